pub mod submission;

pub use submission::{validate_submission, CategorySubmission, TournamentSubmission};
