pub mod store;

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{info, warn};

pub use store::{Guest, Store, StoredRsvp};

const INVALID_REQUEST: &str = "Invalid request format";

#[derive(Deserialize)]
pub struct VerifyNameRequest {
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FamilyMember {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyNameResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_members: Option<Vec<FamilyMember>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpRequest {
    pub name: String,
    pub email: String,
    pub is_attending: bool,
    #[serde(default)]
    pub attending_guests: Vec<String>,
    pub diet: Option<String>,
}

/// Shared `{success, message}` body of `/submit-rsvp` and `/save-avatars`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarSelection {
    pub guest_name: String,
    pub avatar: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Deserialize)]
pub struct SaveAvatarsRequest {
    pub email: String,
    #[serde(default)]
    pub avatars: Vec<AvatarSelection>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GuestAvatar {
    pub name: String,
    pub avatar: String,
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GetAvatarsResponse {
    pub success: bool,
    pub avatars: Vec<GuestAvatar>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub timestamp: i64,
    pub guests: usize,
}

pub type Db = Arc<RwLock<Store>>;

/// Router with a small demo guest list.
pub fn app() -> Router {
    app_with_guests(demo_guests())
}

/// Router serving `/api/*` over the given guest list.
pub fn app_with_guests(guests: Vec<Guest>) -> Router {
    let db: Db = Arc::new(RwLock::new(Store::new(guests)));
    let api = Router::new()
        .route("/verify-name", post(verify_name))
        .route("/submit-rsvp", post(submit_rsvp))
        .route("/save-avatars", post(save_avatars))
        .route("/get-avatars", get(get_avatars))
        .route("/health", get(health))
        .with_state(db);
    Router::new().nest("/api", api)
}

pub fn demo_guests() -> Vec<Guest> {
    vec![
        Guest::new("Jane Doe", Some("doe")),
        Guest::new("John Doe", Some("doe")),
        Guest::new("Sam Single", None),
    ]
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, app()).await
}

pub async fn serve(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!("mock RSVP backend listening on http://{addr}/api");
    }
    axum::serve(listener, router).await
}

fn verify_reply(status: StatusCode, success: bool, message: &str) -> (StatusCode, Json<VerifyNameResponse>) {
    (
        status,
        Json(VerifyNameResponse {
            success,
            message: Some(message.to_string()),
            family_members: None,
        }),
    )
}

fn message_reply(status: StatusCode, success: bool, message: impl Into<String>) -> (StatusCode, Json<MessageResponse>) {
    (
        status,
        Json(MessageResponse {
            success,
            message: message.into(),
        }),
    )
}

async fn verify_name(
    State(db): State<Db>,
    payload: Result<Json<VerifyNameRequest>, JsonRejection>,
) -> (StatusCode, Json<VerifyNameResponse>) {
    let Ok(Json(input)) = payload else {
        return verify_reply(StatusCode::BAD_REQUEST, false, INVALID_REQUEST);
    };
    if input.name.trim().is_empty() {
        return verify_reply(StatusCode::BAD_REQUEST, false, "Name cannot be empty");
    }

    let store = db.read().await;
    let Some(guest) = store.find_guest(&input.name) else {
        warn!(name = %input.name, email = %input.email, "guest not found");
        return verify_reply(
            StatusCode::NOT_FOUND,
            false,
            "Name not found on the guest list. Please check the spelling or contact us.",
        );
    };

    info!(name = %guest.name, id = %guest.id, "guest found");
    let party = store.party_of(guest);
    let family_members = (!party.is_empty()).then(|| {
        party
            .into_iter()
            .map(|g| FamilyMember {
                id: g.id.clone(),
                name: g.name.clone(),
            })
            .collect()
    });
    (
        StatusCode::OK,
        Json(VerifyNameResponse {
            success: true,
            message: Some("Guest found".to_string()),
            family_members,
        }),
    )
}

async fn submit_rsvp(
    State(db): State<Db>,
    payload: Result<Json<RsvpRequest>, JsonRejection>,
) -> (StatusCode, Json<MessageResponse>) {
    let Ok(Json(input)) = payload else {
        return message_reply(StatusCode::BAD_REQUEST, false, INVALID_REQUEST);
    };
    if !store::is_valid_email(&input.email) {
        return message_reply(StatusCode::BAD_REQUEST, false, "Invalid email address");
    }

    let mut store = db.write().await;
    if input.is_attending {
        if input.attending_guests.is_empty() {
            return message_reply(
                StatusCode::BAD_REQUEST,
                false,
                "At least one guest must be specified when attending",
            );
        }
        if let Some(unknown) = input
            .attending_guests
            .iter()
            .find(|name| store.find_guest(name).is_none())
        {
            warn!(guest = %unknown, "rsvp names a guest not on the list");
            return message_reply(
                StatusCode::BAD_REQUEST,
                false,
                format!("Guest '{unknown}' is not on the guest list"),
            );
        }
    }

    info!(
        name = %input.name,
        email = %input.email,
        attending = input.is_attending,
        guests = ?input.attending_guests,
        "rsvp recorded"
    );
    store.rsvps.push(StoredRsvp {
        name: input.name,
        email: input.email,
        is_attending: input.is_attending,
        attending_guests: input.attending_guests,
        diet: input.diet,
        avatars: Vec::new(),
    });
    message_reply(StatusCode::OK, true, "RSVP submitted successfully")
}

async fn save_avatars(
    State(db): State<Db>,
    payload: Result<Json<SaveAvatarsRequest>, JsonRejection>,
) -> (StatusCode, Json<MessageResponse>) {
    let Ok(Json(input)) = payload else {
        return message_reply(StatusCode::BAD_REQUEST, false, INVALID_REQUEST);
    };
    if input.email.is_empty() {
        return message_reply(StatusCode::BAD_REQUEST, false, "Email is required");
    }
    if input.avatars.is_empty() {
        return message_reply(
            StatusCode::BAD_REQUEST,
            false,
            "At least one avatar selection is required",
        );
    }
    if input.avatars.iter().any(|a| a.guest_name.is_empty()) {
        return message_reply(
            StatusCode::BAD_REQUEST,
            false,
            "Guest name is required for all avatars",
        );
    }
    if input.avatars.iter().any(|a| a.avatar.is_empty()) {
        return message_reply(StatusCode::BAD_REQUEST, false, "Avatar is required for all guests");
    }

    let count = input.avatars.len();
    match db.write().await.latest_rsvp_mut(&input.email) {
        Some(rsvp) => rsvp.avatars = input.avatars,
        None => warn!(email = %input.email, "no rsvp on file; avatar selections dropped"),
    }
    info!(email = %input.email, count, "avatar selections saved");
    message_reply(StatusCode::OK, true, "Avatar selections saved successfully")
}

async fn get_avatars(State(db): State<Db>) -> Json<GetAvatarsResponse> {
    let store = db.read().await;
    let avatars: Vec<GuestAvatar> = store
        .attending_avatars()
        .into_iter()
        .map(|(name, a)| GuestAvatar {
            name,
            avatar: a.avatar.clone(),
            message: a.message.clone(),
        })
        .collect();
    info!(count = avatars.len(), "returning unique avatars");
    Json(GetAvatarsResponse {
        success: true,
        avatars,
    })
}

async fn health(State(db): State<Db>) -> Json<Health> {
    let store = db.read().await;
    Json(Health {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().timestamp(),
        guests: store.guests.len(),
    })
}
