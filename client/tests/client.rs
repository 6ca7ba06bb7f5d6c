//! `RsvpClient` over real HTTP.
//!
//! The mock backend covers the happy paths and server-side validation. A stub
//! router with canned responses covers status-text fallbacks the mock backend
//! never produces.

use std::net::SocketAddr;

use axum::{http::StatusCode, routing::get, routing::post, Router};
use rsvp_client::{ClientConfig, ClientError, RsvpClient};
use rsvp_core::{ApiError, AvatarSelection, GuestAvatar, RsvpRequest, SaveAvatarsRequest, VerifyOutcome};
use tokio::net::TcpListener;

async fn spawn(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::serve(listener, router));
    addr
}

async fn mock_client() -> RsvpClient {
    let addr = spawn(mock_server::app()).await;
    RsvpClient::new(&ClientConfig::new(format!("http://{addr}/api")))
}

async fn stub_client(api: Router) -> RsvpClient {
    let addr = spawn(Router::new().nest("/api", api)).await;
    RsvpClient::new(&ClientConfig::new(format!("http://{addr}/api/")))
}

fn status_message(err: &ClientError) -> Option<(u16, String)> {
    match err {
        ClientError::Api(ApiError::Status { status, message }) => Some((*status, message.clone())),
        _ => None,
    }
}

#[tokio::test]
async fn verify_found_and_not_found() {
    let client = mock_client().await;

    let found = client.verify_name("John Doe", "john@x.com").await.unwrap();
    assert!(found.is_found());
    assert_eq!(found.response().family_members.as_ref().map(Vec::len), Some(2));

    let missing = client.verify_name("Jane Roe", "jane@x.com").await.unwrap();
    match missing {
        VerifyOutcome::NotFound(body) => {
            assert!(!body.success);
            assert!(body.family_members.is_none());
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn rsvp_and_avatars_round_trip() {
    let client = mock_client().await;

    let rsvp = RsvpRequest {
        name: "Sam Single".to_string(),
        email: "sam@x.com".to_string(),
        is_attending: true,
        attending_guests: vec!["Sam Single".to_string()],
        diet: None,
    };
    assert!(client.submit_rsvp(&rsvp).await.unwrap().success);

    let avatars = SaveAvatarsRequest {
        email: "sam@x.com".to_string(),
        avatars: vec![AvatarSelection {
            guest_name: "Sam Single".to_string(),
            avatar: "fox".to_string(),
            message: "can't wait".to_string(),
        }],
    };
    assert!(client.save_avatars(&avatars).await.unwrap().success);

    let listed = client.get_avatars().await.unwrap();
    assert_eq!(
        listed.avatars,
        vec![GuestAvatar {
            name: "Sam".to_string(),
            avatar: "fox".to_string(),
            message: "can't wait".to_string(),
        }]
    );
}

#[tokio::test]
async fn server_validation_message_is_surfaced() {
    let client = mock_client().await;
    let rsvp = RsvpRequest {
        name: "Jane Doe".to_string(),
        email: "not-an-email".to_string(),
        is_attending: false,
        attending_guests: Vec::new(),
        diet: None,
    };
    let err = client.submit_rsvp(&rsvp).await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid email address");
    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn health_check_reports_guests() {
    let client = mock_client().await;
    let health = client.health_check().await.unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.guests, 3);
}

#[tokio::test]
async fn concurrent_calls_are_independent() {
    let client = mock_client().await;
    let (verify, health, avatars) = tokio::join!(
        client.verify_name("Jane Doe", "jane@x.com"),
        client.health_check(),
        client.get_avatars(),
    );
    assert!(verify.unwrap().is_found());
    assert_eq!(health.unwrap().guests, 3);
    assert!(avatars.unwrap().avatars.is_empty());
}

#[tokio::test]
async fn health_unavailable_uses_status_text() {
    let client = stub_client(Router::new().route(
        "/health",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, r#"{"message":"down for maintenance"}"#) }),
    ))
    .await;

    let err = client.health_check().await.unwrap_err();
    assert_eq!(status_message(&err), Some((503, "Service Unavailable".to_string())));
    assert_eq!(err.to_string(), "Service Unavailable");
}

#[tokio::test]
async fn submit_with_html_error_uses_status_text() {
    let client = stub_client(Router::new().route(
        "/submit-rsvp",
        post(|| async { (StatusCode::BAD_GATEWAY, "<html>upstream</html>") }),
    ))
    .await;

    let rsvp = RsvpRequest {
        name: "Jane Doe".to_string(),
        email: "jane@x.com".to_string(),
        is_attending: false,
        attending_guests: Vec::new(),
        diet: None,
    };
    let err = client.submit_rsvp(&rsvp).await.unwrap_err();
    assert_eq!(status_message(&err), Some((502, "Bad Gateway".to_string())));
}

#[tokio::test]
async fn get_avatars_error_uses_body_message() {
    let client = stub_client(Router::new().route(
        "/get-avatars",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                r#"{"success":false,"message":"Database connection failed"}"#,
            )
        }),
    ))
    .await;

    let err = client.get_avatars().await.unwrap_err();
    assert_eq!(err.to_string(), "Database connection failed");
}

#[tokio::test]
async fn verify_rate_limited_is_an_error() {
    let client = stub_client(Router::new().route(
        "/verify-name",
        post(|| async { (StatusCode::TOO_MANY_REQUESTS, r#"{"success":false,"message":"slow down"}"#) }),
    ))
    .await;

    let err = client.verify_name("Jane Doe", "jane@x.com").await.unwrap_err();
    assert_eq!(status_message(&err), Some((429, "Too Many Requests".to_string())));
}

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = RsvpClient::new(&ClientConfig::new(format!("http://{addr}/api")));
    let err = client.health_check().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
    assert_eq!(err.status(), None);
}
