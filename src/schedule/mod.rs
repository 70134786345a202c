pub mod types;
pub mod category;
pub mod slot_utils;
pub mod pairing;
pub mod packer;
pub mod referee;
pub mod fairness;
pub mod assembler;
pub mod generator;

pub use types::{Match, Pair, Participant, ParticipantStats, Schedule, ScheduleWarning};
pub use category::{CategoryConfig, CategoryKind, LunchBreak, SplitRatio};
pub use slot_utils::{format_time, parse_start_time, Timeline};
pub use generator::{generate_all, generate_schedule};
