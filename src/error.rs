//! Failure taxonomy for auth requests.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures never reach this type; they only disable submit.
//! Every `AuthError` is recovered by the submission controller and surfaced
//! as a toast, so nothing here propagates past the sign page.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced while talking to the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),
    /// The request body could not be encoded.
    #[error("failed to encode request: {0}")]
    Encode(String),
}

impl AuthError {
    /// HTTP status carried by the error, if the server responded.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            Self::Network(_) | Self::Decode(_) | Self::Encode(_) => None,
        }
    }
}
