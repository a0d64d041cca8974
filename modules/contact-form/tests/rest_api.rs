#![allow(clippy::unwrap_used, clippy::expect_used)]

//! REST surface tests: router with a real (in-memory) database behind it.

mod support;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt as _;

use contact_form::api::rest::routes;
use contact_form::domain::model::SubmissionKind;
use support::{RecordingNotifier, all_submissions, build_service, inmem_db};

fn build_app(db: &DatabaseConnection, notifier: Arc<RecordingNotifier>) -> Router {
    routes(build_service(db, notifier))
}

fn contact_request(payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_post_contact_persists_and_reports_success() {
    let db = inmem_db().await;
    let notifier = RecordingNotifier::new();
    let app = build_app(&db, notifier.clone());

    let payload = json!({
        "form_type": "enquiry",
        "from_name": "Ada Lovelace",
        "from_email": "ada@example.com",
        "project_type": "Web App",
        "budget": "$5k",
        "message": "I need a portfolio site."
    });
    let response = app.oneshot(contact_request(&payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Sent Successfully!");

    let stored = all_submissions(&db).await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].sender_name, "Ada Lovelace");
    assert_eq!(stored[0].sender_email, "ada@example.com");
    assert_eq!(stored[0].project_type, "Web App");
    assert_eq!(stored[0].budget, "$5k");
    assert_eq!(stored[0].message, "I need a portfolio site.");
    assert_eq!(stored[0].kind, SubmissionKind::Enquiry);
    assert_eq!(stored[0].subject, "No Subject");

    assert_eq!(notifier.sent().len(), 1);
}

#[tokio::test]
async fn test_post_contact_missing_required_returns_400() {
    let db = inmem_db().await;
    let app = build_app(&db, RecordingNotifier::new());

    let response = app
        .oneshot(contact_request(&json!({
            "from_name": "Ada",
            "from_email": "ada@example.com"
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Name, email, and message are required.");

    assert!(all_submissions(&db).await.is_empty());
}

#[tokio::test]
async fn test_post_contact_implausible_email_returns_400() {
    let db = inmem_db().await;
    let app = build_app(&db, RecordingNotifier::new());

    let response = app
        .oneshot(contact_request(&json!({
            "from_name": "Ada",
            "from_email": "no-at-sign",
            "message": "hello"
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["message"], "A valid email address is required.");
    assert!(all_submissions(&db).await.is_empty());
}

#[tokio::test]
async fn test_post_contact_support_kind_reaches_notifier() {
    let db = inmem_db().await;
    let notifier = RecordingNotifier::new();
    let app = build_app(&db, notifier.clone());

    let response = app
        .oneshot(contact_request(&json!({
            "form_type": "support",
            "from_name": "Ada",
            "from_email": "ada@example.com",
            "subject": "Login broken",
            "message": "Cannot sign in."
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].kind, SubmissionKind::Support);
    assert_eq!(sent[0].subject, "Login broken");

    let stored = all_submissions(&db).await;
    assert_eq!(stored[0].kind, SubmissionKind::Support);
}

#[tokio::test]
async fn test_post_contact_mail_failure_still_reports_success() {
    let db = inmem_db().await;
    let app = build_app(&db, RecordingNotifier::failing());

    let response = app
        .oneshot(contact_request(&json!({
            "from_name": "Ada",
            "from_email": "ada@example.com",
            "message": "hello"
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Saved (Email Error)");

    assert_eq!(all_submissions(&db).await.len(), 1);
}
