use alloc::string::String;
use jeopardy_protocol::CategoryId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriviaError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("Request failed: {0}")]
    NetworkFailure(String),
    #[error("Request timed out after {millis} ms")]
    Timeout { millis: u32 },
    #[error("Category {category_id} has {available} clues but {required} are required")]
    DataShortfall {
        category_id: CategoryId,
        required: usize,
        available: usize,
    },
    #[error("Gave up after {attempts} attempts with {accepted} of {required} categories found")]
    ExhaustedRetries {
        attempts: u32,
        accepted: usize,
        required: usize,
    },
    #[error("No clue at row {row}, column {column}")]
    InvalidCell { row: usize, column: usize },
    #[error("Board is not ready")]
    NotReady,
}

impl TriviaError {
    /// Whether starting a fresh build has a chance of succeeding.
    pub const fn is_recoverable(&self) -> bool {
        use TriviaError::*;
        match self {
            NetworkFailure(_) | Timeout { .. } | DataShortfall { .. } | ExhaustedRetries { .. } => {
                true
            }
            InvalidArgument(_) | InvalidCell { .. } | NotReady => false,
        }
    }
}

pub type Result<T> = core::result::Result<T, TriviaError>;
