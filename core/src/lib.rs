//! Sans-IO API client core for the RSVP service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The host executes the actual
//! HTTP round-trip, which keeps every status-code rule here deterministic and
//! testable.
//!
//! # Design
//! - `RsvpApi` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - A guest missing from the list is a [`VerifyOutcome::NotFound`], not an
//!   error. Every other failure is an [`ApiError`].
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::{extract_error_message, RsvpApi};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{
    AvatarSelection, FamilyMember, GetAvatarsResponse, GuestAvatar, HealthStatus, RsvpRequest,
    RsvpResponse, SaveAvatarsRequest, SaveAvatarsResponse, VerifyNameRequest, VerifyNameResponse,
    VerifyOutcome,
};
