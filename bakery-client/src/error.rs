//! Client error types

use shared::ErrorCode;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (transport or timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Success status with a body that is not the expected JSON
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Request rejected by the endpoint (400)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Endpoint not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-success status
    #[error("Upstream error ({status}): {message}")]
    Upstream { status: u16, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Error code reported when this error sends a checkout to the payment link
    pub fn code(&self) -> ErrorCode {
        match self {
            ClientError::Http(e) if e.is_timeout() => ErrorCode::TimeoutError,
            ClientError::Http(_) => ErrorCode::NetworkError,
            ClientError::Validation(_) => ErrorCode::InvalidRequest,
            ClientError::Config(_) => ErrorCode::ConfigError,
            ClientError::InvalidResponse(_)
            | ClientError::NotFound(_)
            | ClientError::Upstream { .. } => ErrorCode::CheckoutUnavailable,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
