//! Client-side error taxonomy.

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// What went wrong talking to the backend.
///
/// All three variants are terminal for the operation that produced them:
/// nothing is retried automatically. View models convert them into
/// user-visible notifications at their boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never reached the server.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status. `message` is the
    /// human-readable text from the response body, surfaced verbatim.
    #[error("API error ({status}): {message}")]
    Status { status: u16, message: String },

    /// The response body did not have the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The text shown to the user for this failure.
    pub fn user_message(&self) -> &str {
        match self {
            ApiError::Status { message, .. } => message,
            ApiError::Network(msg) | ApiError::Decode(msg) => msg,
        }
    }
}
