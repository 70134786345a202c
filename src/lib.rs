//! Round-robin match scheduling for youth football tournaments.
//!
//! Each category (U8, U10, U12) is scheduled on its own: pairings come from the
//! circle method, get packed into time slots across the category's fields, receive
//! a referee from the resting teams and finally a wall-clock start time.

pub mod error;
pub mod schedule;
pub mod form;
pub mod parser;
pub mod display;
pub mod web;

pub use error::{ParseError, SchedulerError};
pub use schedule::{generate_all, generate_schedule, CategoryConfig, CategoryKind, Schedule};
