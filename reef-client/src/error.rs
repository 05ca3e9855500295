//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (no usable response)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication required or token rejected (401)
    #[error("Authentication required")]
    Unauthorized,

    /// Backend returned a non-success status with an error message
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Request rejected before dispatch (missing required fields)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Session store failure
    #[error("Session error: {0}")]
    Session(#[from] crate::session::SessionError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// True when the caller should redirect to the login entry point.
    pub fn is_auth(&self) -> bool {
        matches!(self, ClientError::Unauthorized)
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
