//! Custom error types and handling
//!
//! This module defines the application's error types. Correctness failures
//! are deliberately absent: a sort that disagrees with the reference is
//! recorded on the trial and logged, never raised.

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Validation errors
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error(
        "Malformed dataset at line {line}: {value:?} is not an integer in [{}, {}]",
        crate::constants::MIN_VALUE,
        crate::constants::MAX_VALUE
    )]
    MalformedDataset { line: u64, value: String },

    #[error("Malformed results table: {0}")]
    MalformedResults(String),

    // Internal errors
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidConfiguration(_) => "INVALID_CONFIGURATION",
            Self::Io(_) => "IO_ERROR",
            Self::Csv(_) => "CSV_ERROR",
            Self::MalformedDataset { .. } => "MALFORMED_DATASET",
            Self::MalformedResults(_) => "MALFORMED_RESULTS",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the error was raised before any benchmarking work began
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration(_))
    }

    /// Shorthand for building an `InvalidConfiguration` error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(err: crate::config::ConfigError) -> Self {
        AppError::InvalidConfiguration(err.to_string())
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
