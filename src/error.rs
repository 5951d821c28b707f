//! Error types and handling for the trip budget service

use thiserror::Error;

/// Main error type for the trip budget service
#[derive(Error, Debug)]
pub enum TripBudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Budget computation errors (unusable rate card, amounts out of range)
    #[error("Calculation error: {message}")]
    Calculation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl TripBudgetError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new calculation error
    pub fn calculation<S: Into<String>>(message: S) -> Self {
        Self::Calculation {
            message: message.into(),
        }
    }
}
