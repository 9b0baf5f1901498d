use thiserror::Error;

/// Error type for history operations.
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("Calculation {0} not found")]
    NotFound(u64),
    #[error("No calculation ids left to assign")]
    IdsExhausted,
    #[error("Could not (de)serialise history: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience type for `Result<T, HistoryError>`.
pub type HistoryResult<T> = Result<T, HistoryError>;
