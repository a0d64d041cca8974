//! HTTP server assembly: database wiring, routing, middleware and lifecycle.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Json;
use axum::Router;
use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue, Method, Request, Response, StatusCode};
use axum::routing::get;
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{Span, field::Empty, info, warn};

use contact_form::ContactService;
use contact_form::domain::EnquiryNotifier;
use contact_form::infra::email::{NoopNotifier, SmtpNotifier};
use contact_form::infra::storage::{Migrator, SeaOrmSubmissionRepository};

use crate::config::{AppConfig, CorsConfig, ServerConfig};

/// Run the server until SIGINT or SIGTERM.
pub async fn run(config: AppConfig) -> Result<()> {
    config.validate()?;

    let db = connect_database(&config.database.dsn).await?;
    let service = build_service(&config, db)?;
    let router = build_router(&config, service);

    serve(&config, router).await
}

async fn connect_database(dsn: &str) -> Result<DatabaseConnection> {
    let db = Database::connect(dsn)
        .await
        .context("failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("failed to apply database migrations")?;
    Ok(db)
}

fn build_service(config: &AppConfig, db: DatabaseConnection) -> Result<Arc<ContactService>> {
    let repo = Arc::new(SeaOrmSubmissionRepository::new(db));
    let notifier: Arc<dyn EnquiryNotifier> = if config.mail.enabled {
        Arc::new(SmtpNotifier::new(&config.mail).context("failed to set up SMTP notifier")?)
    } else {
        info!("mail delivery disabled; submissions are stored without notification");
        Arc::new(NoopNotifier)
    };
    Ok(Arc::new(ContactService::new(
        repo,
        notifier,
        config.contact_form.clone(),
    )))
}

fn build_router(config: &AppConfig, service: Arc<ContactService>) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .route("/healthz", get(|| async { "ok" }))
        .merge(contact_form::api::rest::routes(service))
        .fallback_service(ServeDir::new(&config.server.static_dir));

    apply_middleware_stack(router, &config.server)
}

/// Layers are registered innermost to outermost; a request traverses them in
/// reverse: request-id -> trace -> timeout -> body limit -> cors -> handler.
fn apply_middleware_stack(router: Router, server: &ServerConfig) -> Router {
    let mut router = router;

    if server.cors.enabled {
        router = router.layer(build_cors_layer(&server.cors));
    }

    router = router
        .layer(RequestBodyLimitLayer::new(server.max_body_bytes))
        .layer(DefaultBodyLimit::max(server.max_body_bytes))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::GATEWAY_TIMEOUT,
            Duration::from_secs(server.request_timeout_secs),
        ));

    router = router.layer(
        TraceLayer::new_for_http()
            .make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("unknown");
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id,
                    status = Empty,
                    latency_ms = Empty,
                )
            })
            .on_response(|response: &Response<Body>, latency: Duration, span: &Span| {
                let ms = latency.as_millis();
                span.record("status", response.status().as_u16());
                span.record("latency_ms", ms);
            }),
    );

    router
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

fn build_cors_layer(cfg: &CorsConfig) -> CorsLayer {
    let wildcard_origin = cfg.allowed_origins.iter().any(|o| o == "*");
    // validate() rejects wildcard entries combined with credentials
    if wildcard_origin {
        warn!("CORS allows any origin; tighten server.cors.allowed_origins for production");
    }

    let mut layer = CorsLayer::new();

    if wildcard_origin {
        layer = layer.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cfg
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        layer = layer.allow_origin(origins);
    }

    if cfg.allowed_methods.iter().any(|m| m == "*") {
        layer = layer.allow_methods(Any);
    } else {
        let methods: Vec<Method> = cfg
            .allowed_methods
            .iter()
            .filter_map(|method| method.parse().ok())
            .collect();
        layer = layer.allow_methods(methods);
    }

    if cfg.allowed_headers.iter().any(|h| h == "*") {
        layer = layer.allow_headers(Any);
    } else {
        let headers: Vec<HeaderName> = cfg
            .allowed_headers
            .iter()
            .filter_map(|header| header.parse().ok())
            .collect();
        layer = layer.allow_headers(headers);
    }

    if cfg.allow_credentials {
        layer = layer.allow_credentials(true);
    }
    if cfg.max_age_seconds > 0 {
        layer = layer.max_age(Duration::from_secs(cfg.max_age_seconds));
    }

    layer
}

async fn health() -> Json<serde_json::Value> {
    let timestamp = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default();
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": timestamp,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn serve(config: &AppConfig, router: Router) -> Result<()> {
    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("HTTP server bound on {addr}");

    let cancel = CancellationToken::new();
    tokio::spawn(watch_signals(cancel.clone()));

    let shutdown = async move {
        cancel.cancelled().await;
        info!("HTTP server shutting down gracefully");
    };

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server error")
}

async fn watch_signals(cancel: CancellationToken) {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!(%error, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(error) => tracing::error!(%error, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received ctrl-c, shutting down"),
        () = terminate => info!("received SIGTERM, shutting down"),
    }

    cancel.cancel();
}
