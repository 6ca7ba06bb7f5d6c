//! Stateless HTTP request builder and response parser for the RSVP API.
//!
//! # Design
//! `RsvpApi` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`. The
//! host executes the round-trip in between.
//!
//! Endpoints differ only in how they treat a non-2xx response:
//!
//! | Endpoint | Non-2xx handling |
//! |----------|------------------|
//! | `/verify-name` | 404 is data; others fail with the status text |
//! | `/submit-rsvp`, `/save-avatars`, `/get-avatars` | body `message`, else status text |
//! | `/health` | status text only |

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{
    GetAvatarsResponse, HealthStatus, RsvpRequest, RsvpResponse, SaveAvatarsRequest,
    SaveAvatarsResponse, VerifyNameRequest, VerifyOutcome,
};

pub const VERIFY_NAME_PATH: &str = "/verify-name";
pub const SUBMIT_RSVP_PATH: &str = "/submit-rsvp";
pub const SAVE_AVATARS_PATH: &str = "/save-avatars";
pub const GET_AVATARS_PATH: &str = "/get-avatars";
pub const HEALTH_PATH: &str = "/health";

/// Synchronous, stateless client for the RSVP API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network.
#[derive(Debug, Clone)]
pub struct RsvpApi {
    base_url: String,
}

impl RsvpApi {
    /// `base_url` includes the API prefix, e.g. `https://example.com/api`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_verify_name(&self, name: &str, email: &str) -> Result<HttpRequest, ApiError> {
        let input = VerifyNameRequest {
            name: name.to_string(),
            email: email.to_string(),
        };
        self.post(VERIFY_NAME_PATH, &input)
    }

    pub fn build_submit_rsvp(&self, input: &RsvpRequest) -> Result<HttpRequest, ApiError> {
        self.post(SUBMIT_RSVP_PATH, input)
    }

    pub fn build_save_avatars(&self, input: &SaveAvatarsRequest) -> Result<HttpRequest, ApiError> {
        self.post(SAVE_AVATARS_PATH, input)
    }

    pub fn build_get_avatars(&self) -> HttpRequest {
        self.get(GET_AVATARS_PATH)
    }

    pub fn build_health_check(&self) -> HttpRequest {
        self.get(HEALTH_PATH)
    }

    pub fn parse_verify_name(&self, response: HttpResponse) -> Result<VerifyOutcome, ApiError> {
        if response.is_success() {
            return decode(&response.body).map(VerifyOutcome::Found);
        }
        if response.status == 404 {
            return decode(&response.body).map(VerifyOutcome::NotFound);
        }
        Err(status_text_error(&response))
    }

    pub fn parse_submit_rsvp(&self, response: HttpResponse) -> Result<RsvpResponse, ApiError> {
        check_status_with_body(&response)?;
        decode(&response.body)
    }

    pub fn parse_save_avatars(&self, response: HttpResponse) -> Result<SaveAvatarsResponse, ApiError> {
        check_status_with_body(&response)?;
        decode(&response.body)
    }

    pub fn parse_get_avatars(&self, response: HttpResponse) -> Result<GetAvatarsResponse, ApiError> {
        check_status_with_body(&response)?;
        decode(&response.body)
    }

    pub fn parse_health_check(&self, response: HttpResponse) -> Result<HealthStatus, ApiError> {
        if !response.is_success() {
            return Err(status_text_error(&response));
        }
        decode(&response.body)
    }

    fn post<T: Serialize>(&self, path: &str, input: &T) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}{path}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    fn get(&self, path: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

fn status_text_error(response: &HttpResponse) -> ApiError {
    ApiError::Status {
        status: response.status,
        message: response.status_text(),
    }
}

/// Fail non-2xx responses, preferring the server's own explanation.
fn check_status_with_body(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    let message = extract_error_message(&response.body).unwrap_or_else(|| response.status_text());
    Err(ApiError::Status {
        status: response.status,
        message,
    })
}

/// Best-effort read of the `message` field from an error body.
///
/// Returns `None` when the body is not JSON, is not an object, or has no
/// non-empty string `message`. The caller substitutes the status text.
pub fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            debug!(error = %e, "error body is not JSON; using status text");
            return None;
        }
    };
    match value.get("message").and_then(|m| m.as_str()) {
        Some(message) if !message.is_empty() => Some(message.to_string()),
        _ => {
            debug!("error body has no usable message field; using status text");
            None
        }
    }
}
