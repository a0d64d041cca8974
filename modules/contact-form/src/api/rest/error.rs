use axum::Json;
use axum::http::StatusCode;
use tracing::error;

use crate::domain::error::DomainError;

use super::dto::ContactEnvelope;

/// Envelope message for a persistence failure. The driver error is
/// logged, never echoed to the caller.
pub const STORAGE_FAILED_MESSAGE: &str = "Storage error, submission was not saved.";

pub fn domain_error_response(err: DomainError) -> (StatusCode, Json<ContactEnvelope>) {
    match err {
        DomainError::Validation { message, .. } => {
            (StatusCode::BAD_REQUEST, Json(ContactEnvelope::error(message)))
        }
        DomainError::Database { message } => {
            error!(error = %message, "contact submission storage failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ContactEnvelope::error(STORAGE_FAILED_MESSAGE)),
            )
        }
    }
}
