//! Request and response DTOs for the RSVP API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! integration tests catch any drift between the two crates. Wire names are
//! camelCase. Optional response fields are omitted rather than sent as `null`.

use serde::{Deserialize, Serialize};

/// Body of `POST /verify-name`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyNameRequest {
    pub name: String,
    pub email: String,
}

/// A guest linked to the verified invitee.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FamilyMember {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerifyNameResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Present only on success, and only when the guest has a party.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_members: Option<Vec<FamilyMember>>,
}

/// Result of a name verification.
///
/// A guest missing from the list is a normal outcome of `/verify-name`, so it
/// is reported here instead of as an [`ApiError`](crate::ApiError). Both
/// variants carry the decoded body unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The server answered 2xx.
    Found(VerifyNameResponse),
    /// The server answered 404.
    NotFound(VerifyNameResponse),
}

impl VerifyOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, VerifyOutcome::Found(_))
    }

    pub fn response(&self) -> &VerifyNameResponse {
        match self {
            VerifyOutcome::Found(body) | VerifyOutcome::NotFound(body) => body,
        }
    }

    pub fn into_response(self) -> VerifyNameResponse {
        match self {
            VerifyOutcome::Found(body) | VerifyOutcome::NotFound(body) => body,
        }
    }
}

/// Body of `POST /submit-rsvp`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RsvpRequest {
    pub name: String,
    pub email: String,
    pub is_attending: bool,
    /// Names of the guests who will attend, in the order the guest listed
    /// them. Ignored by the server unless `is_attending` is set.
    #[serde(default)]
    pub attending_guests: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RsvpResponse {
    pub success: bool,
    pub message: String,
}

/// One guest's avatar choice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AvatarSelection {
    pub guest_name: String,
    pub avatar: String,
    pub message: String,
}

/// Body of `POST /save-avatars`: one selection per guest on the RSVP.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaveAvatarsRequest {
    pub email: String,
    pub avatars: Vec<AvatarSelection>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaveAvatarsResponse {
    pub success: bool,
    pub message: String,
}

/// The server's stored projection of an avatar selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuestAvatar {
    pub name: String,
    pub avatar: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GetAvatarsResponse {
    pub success: bool,
    #[serde(default)]
    pub avatars: Vec<GuestAvatar>,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    /// Unix seconds on the server clock.
    pub timestamp: i64,
    /// Number of guests on the list.
    pub guests: u64,
}
