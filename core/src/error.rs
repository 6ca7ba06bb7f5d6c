//! Error types for the RSVP API client.
//!
//! # Design
//! The API has no structured error taxonomy: a failed call is reported as a
//! status code plus one human-readable message. `Status` keeps both so callers
//! can branch on the code, while `Display` yields only the message, exactly as
//! the server (or the transport's reason phrase) phrased it.
//!
//! A 404 from `/verify-name` is not an error at all; see
//! [`VerifyOutcome`](crate::types::VerifyOutcome).

/// Errors returned by `RsvpApi` build and parse methods.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a status the endpoint does not accept.
    ///
    /// `message` is the server-supplied `message` field when the endpoint
    /// consults the body and one was present, otherwise the status text.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// A success response body could not be decoded into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// HTTP status carried by a `Status` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
