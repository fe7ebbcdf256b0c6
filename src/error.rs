//! Error handling for the resume scorer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeScorerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeScorerError>;

/// Convert toml parse errors to our custom error type
impl From<toml::de::Error> for ResumeScorerError {
    fn from(err: toml::de::Error) -> Self {
        ResumeScorerError::Configuration(format!("Failed to parse config: {}", err))
    }
}

/// Convert join failures from batch scoring workers
impl From<tokio::task::JoinError> for ResumeScorerError {
    fn from(err: tokio::task::JoinError) -> Self {
        ResumeScorerError::Processing(format!("Scoring worker failed: {}", err))
    }
}
