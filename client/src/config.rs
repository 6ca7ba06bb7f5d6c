//! Client configuration, injected at startup.

/// Base URL used when nothing else is configured: the local development
/// backend.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";

/// Runtime configuration for an [`RsvpClient`](crate::RsvpClient).
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | `RSVP_API_BASE` | `http://localhost:8080/api` | Base URL including the `/api` prefix |
///
/// A production deployment serves the API on the site's own origin, so it
/// sets `RSVP_API_BASE=https://<site>/api`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Example: `"https://example.com/api"`.
    pub api_base: String,
}

impl ClientConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    /// Populate config from environment variables, applying defaults where absent.
    pub fn from_env() -> Self {
        Self::from_api_base(std::env::var("RSVP_API_BASE").ok())
    }

    fn from_api_base(api_base: Option<String>) -> Self {
        match api_base {
            Some(base) if !base.trim().is_empty() => Self::new(base.trim()),
            _ => Self::default(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
