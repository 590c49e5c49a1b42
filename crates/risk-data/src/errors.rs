//! Error types for the risk data crate.

use thiserror::Error;

/// Errors that can occur while talking to a climate risk data source.
///
/// Batch fan-outs capture these per company; a single failing company
/// never fails a whole batch. None of the variants are retried by this
/// crate.
#[derive(Error, Debug)]
pub enum RiskDataError {
    /// The requested company is unknown to the provider (HTTP 404).
    #[error("Company not found: {0}")]
    CompanyNotFound(String),

    /// The provider rate limited the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A provider-specific error occurred (non-success HTTP status or an
    /// error payload).
    #[error("Provider error: {provider} - {message}")]
    Provider {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// A query parameter is outside the provider's accepted domain.
    #[error("Invalid query parameter: {0}")]
    InvalidQuery(String),

    /// Required configuration is missing (e.g. an API key).
    #[error("Missing configuration: {0}")]
    MissingConfig(String),

    /// A network error occurred while communicating with the provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
