use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, extract::Extension};

use crate::domain::service::ContactService;

use super::dto::{ContactEnvelope, SubmitContactRequest};
use super::error::domain_error_response;

/// Envelope message when the record was stored and the mail went out.
pub const SENT_MESSAGE: &str = "Sent Successfully!";
/// Envelope message when the record was stored but the mail failed.
pub const SAVED_WITHOUT_MAIL_MESSAGE: &str = "Saved (Email Error)";

/// `POST /api/contact`
pub async fn submit_contact(
    Extension(svc): Extension<Arc<ContactService>>,
    Json(req): Json<SubmitContactRequest>,
) -> impl IntoResponse {
    match svc.submit(req.into()).await {
        Ok(outcome) => {
            let message = if outcome.mail_delivered {
                SENT_MESSAGE
            } else {
                SAVED_WITHOUT_MAIL_MESSAGE
            };
            (StatusCode::CREATED, Json(ContactEnvelope::ok(message)))
        }
        Err(err) => domain_error_response(err),
    }
}
