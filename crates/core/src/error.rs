use thiserror::Error;

/// Top-level error type used across the entire application.
#[derive(Debug, Error)]
pub enum AvgError {
    /// Submitted text did not parse as a finite real number.
    #[error("invalid input: {0:?}")]
    InvalidInput(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl AvgError {
    /// Text shown inline under the input field.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput(_) => "Please enter a valid number".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T, E = AvgError> = std::result::Result<T, E>;
