//! Async host for the RSVP API core.
//!
//! # Overview
//! `rsvp-core` decides what to send and how to read the answer; this crate
//! does the sending. [`RsvpClient`] pairs an [`RsvpApi`] with a
//! `reqwest::Client` and exposes one async method per endpoint, each making
//! exactly one HTTP request. There are no retries, no caching, and no shared
//! mutable state, so calls may run concurrently in any order.
//!
//! ```no_run
//! # async fn demo() -> Result<(), rsvp_client::ClientError> {
//! use rsvp_client::{ClientConfig, RsvpClient};
//!
//! let client = RsvpClient::new(&ClientConfig::new("https://example.com/api"));
//! let outcome = client.verify_name("Jane Doe", "jane@example.com").await?;
//! if !outcome.is_found() {
//!     println!("{:?}", outcome.response().message);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;

use rsvp_core::{
    GetAvatarsResponse, HealthStatus, HttpMethod, HttpRequest, HttpResponse, RsvpApi, RsvpRequest,
    RsvpResponse, SaveAvatarsRequest, SaveAvatarsResponse, VerifyOutcome,
};
use tracing::debug;

pub use config::{ClientConfig, DEFAULT_API_BASE};
pub use error::ClientError;

/// Async client for the RSVP API. Cheap to clone.
#[derive(Debug, Clone)]
pub struct RsvpClient {
    api: RsvpApi,
    http: reqwest::Client,
}

impl RsvpClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Use a pre-configured `reqwest::Client` (e.g. with a timeout).
    pub fn with_http_client(config: &ClientConfig, http: reqwest::Client) -> Self {
        Self {
            api: RsvpApi::new(&config.api_base),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        self.api.base_url()
    }

    /// Check a name against the guest list. A guest who is not on the list
    /// yields [`VerifyOutcome::NotFound`], not an error.
    pub async fn verify_name(&self, name: &str, email: &str) -> Result<VerifyOutcome, ClientError> {
        let req = self.api.build_verify_name(name, email)?;
        let resp = self.execute(req).await?;
        Ok(self.api.parse_verify_name(resp)?)
    }

    pub async fn submit_rsvp(&self, input: &RsvpRequest) -> Result<RsvpResponse, ClientError> {
        let req = self.api.build_submit_rsvp(input)?;
        let resp = self.execute(req).await?;
        Ok(self.api.parse_submit_rsvp(resp)?)
    }

    pub async fn save_avatars(&self, input: &SaveAvatarsRequest) -> Result<SaveAvatarsResponse, ClientError> {
        let req = self.api.build_save_avatars(input)?;
        let resp = self.execute(req).await?;
        Ok(self.api.parse_save_avatars(resp)?)
    }

    pub async fn get_avatars(&self) -> Result<GetAvatarsResponse, ClientError> {
        let resp = self.execute(self.api.build_get_avatars()).await?;
        Ok(self.api.parse_get_avatars(resp)?)
    }

    pub async fn health_check(&self) -> Result<HealthStatus, ClientError> {
        let resp = self.execute(self.api.build_health_check()).await?;
        Ok(self.api.parse_health_check(resp)?)
    }

    /// Perform one round-trip. Non-2xx statuses are returned as data.
    async fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ClientError> {
        let method = match req.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        };
        debug!(method = req.method.as_str(), url = %req.url, "sending request");

        let mut builder = self.http.request(method, &req.url);
        for (name, value) in &req.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "response received");

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            headers,
            body,
        })
    }
}
