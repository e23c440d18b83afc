//! # Payment Error Types
//!
//! Typed error handling for the checkout server.
//! All provider operations return `Result<T, PaymentError>`.

use thiserror::Error;

/// Core error type for all payment operations
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Configuration errors (missing credentials, invalid config)
    #[error("{0}")]
    Configuration(String),

    /// Invalid request data from the shopper's browser
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Payment provider answered without the data we need
    #[error("Provider error [{provider}]: {message}")]
    ProviderError { provider: String, message: String },

    /// Network/HTTP error communicating with provider
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PaymentError {
    /// Shorthand for the error raised when client id or secret is absent
    pub fn missing_credentials() -> Self {
        PaymentError::Configuration("Missing API credentials".to_string())
    }
}

impl From<serde_json::Error> for PaymentError {
    fn from(err: serde_json::Error) -> Self {
        PaymentError::Serialization(err.to_string())
    }
}

/// Result type alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;
