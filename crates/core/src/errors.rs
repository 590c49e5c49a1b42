//! Core error types for the Climatefolio application.
//!
//! This module defines storage-agnostic error types. Store-specific
//! failures (filesystem, serialization of persisted state) are
//! converted to these types by the store layer.

use thiserror::Error;

use crate::portfolio::transfer::ImportError;
use climatefolio_risk_data::RiskDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the portfolio analytics application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Portfolio import failed: {0}")]
    Import(#[from] ImportError),

    #[error("Risk data operation failed: {0}")]
    RiskData(#[from] RiskDataError),

    #[error("Company not found in portfolio: {0}")]
    CompanyNotFound(String),

    #[error("Analysis superseded by a newer request")]
    Superseded,

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Storage-agnostic error type for state store operations.
///
/// This enum uses `String` for all error details, allowing store
/// implementations to convert backend-specific errors into this format.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read persisted state.
    #[error("Failed to read state: {0}")]
    Read(String),

    /// Failed to write persisted state.
    #[error("Failed to write state: {0}")]
    Write(String),

    /// The persisted state exists but cannot be understood.
    #[error("State store is corrupted: {0}")]
    Corrupt(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}

// === From implementations for common error types ===

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Unexpected(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
