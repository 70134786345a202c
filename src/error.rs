use thiserror::Error;

/// Errors raised while generating a single category's schedule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("No eligible referee for {player_a} vs {player_b} in slot {slot}")]
    UnsatisfiableConstraint {
        slot: usize,
        player_a: usize,
        player_b: usize,
    },
}

impl SchedulerError {
    /// Input errors can be fixed by the user; unsatisfiable ones need different sizes.
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, SchedulerError::InvalidConfiguration(_))
    }
}

/// Errors raised while loading category requests from a CSV file.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Row {row}: {message}")]
    InvalidRow { row: usize, message: String },
}
