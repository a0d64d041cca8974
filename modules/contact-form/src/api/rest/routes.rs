use std::sync::Arc;

use axum::{Router, extract::Extension, routing::post};

use crate::domain::service::ContactService;

use super::handlers;

/// Contact API routes with the service wired in; merged into the host
/// application's router.
pub fn routes(service: Arc<ContactService>) -> Router {
    Router::new()
        .route("/api/contact", post(handlers::submit_contact))
        .layer(Extension(service))
}
