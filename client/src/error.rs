use rsvp_core::ApiError;

/// Errors returned by [`RsvpClient`](crate::RsvpClient).
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server answered, but not with something the endpoint accepts.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The request never completed: DNS, refused connection, reset, or a
    /// body that could not be read.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    /// HTTP status of a rejected call, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api(e) => e.status(),
            ClientError::Transport(e) => e.status().map(|s| s.as_u16()),
        }
    }
}
