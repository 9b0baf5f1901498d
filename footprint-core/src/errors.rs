use thiserror::Error;

use crate::FloatValue;

/// Error type for invalid operations.
#[derive(Error, Debug)]
pub enum FootprintError {
    #[error("Invalid input for {field}: {value}")]
    InvalidInput { field: String, value: String },
    #[error("Invalid emission factor {factor}={value}. Factors must be finite and non-negative, and offset factors must be positive")]
    InvalidFactor { factor: String, value: FloatValue },
    #[error("Could not parse configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl FootprintError {
    pub(crate) fn invalid_input(field: impl Into<String>, value: impl ToString) -> Self {
        FootprintError::InvalidInput {
            field: field.into(),
            value: value.to_string(),
        }
    }
}

impl From<toml::de::Error> for FootprintError {
    fn from(err: toml::de::Error) -> Self {
        FootprintError::Config(err.to_string())
    }
}

/// Convenience type for `Result<T, FootprintError>`.
pub type FootprintResult<T> = Result<T, FootprintError>;
