//! Custom error types for the bike rental shop
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for rental shop operations
#[derive(Error, Debug)]
pub enum RentalError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Persisted data that could not be interpreted
    #[error("Storage error: {0}")]
    Storage(String),

    /// A rental type outside the known set
    #[error("Unknown rental type: {0}")]
    UnknownCategory(String),

    /// A rental type that is advertised but has no price or inventory
    #[error("Rental type '{0}' is not offered yet")]
    UnsupportedCategory(String),

    /// Not enough units in the pool for a rental
    #[error("Sorry, we don't have that many bikes available for {category} rental.")]
    Unavailable {
        category: String,
        requested: i64,
        available: i64,
    },

    /// Console input that could not be interpreted
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl RentalError {
    /// Create an "unknown category" error
    pub fn unknown_category(name: impl Into<String>) -> Self {
        Self::UnknownCategory(name.into())
    }

    /// Check if this error rejects a category name
    pub fn is_category_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownCategory(_) | Self::UnsupportedCategory(_)
        )
    }

    /// Check if this error is a recoverable request rejection
    ///
    /// Rejections abandon the current transaction but leave the shop running.
    pub fn is_rejection(&self) -> bool {
        self.is_category_error() || matches!(self, Self::Unavailable { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for RentalError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for RentalError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for rental shop operations
pub type RentalResult<T> = Result<T, RentalError>;
