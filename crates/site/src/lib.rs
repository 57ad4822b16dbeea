//! Meteen restaurant site library.
//!
//! The JSON API, its services and the backend client live here so the
//! binary, the CLI and the integration tests share one implementation.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod content;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod supabase;

use std::time::Duration;

use axum::{
    Router,
    extract::State,
    http::{HeaderValue, Method, StatusCode, header::CONTENT_TYPE},
    middleware::from_fn,
    routing::get,
};
use thiserror::Error;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultOnResponse, OnResponse, TraceLayer},
};
use tracing::Span;

use crate::config::ConfigError;
use crate::state::AppState;
use crate::supabase::{DataSourceError, Query, Table};

/// Failures that stop the server from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("backend client error: {0}")]
    Backend(#[from] DataSourceError),
    #[error("invalid CORS origin: {0}")]
    InvalidOrigin(String),
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the full router: health checks, API routes and middleware.
///
/// # Errors
///
/// Returns `StartupError::InvalidOrigin` if `allowed_origin` is not a valid
/// header value.
pub fn app(state: AppState, allowed_origin: Option<&str>) -> Result<Router, StartupError> {
    let cors = allowed_origin
        .map(|origin| {
            let origin = HeaderValue::from_str(origin)
                .map_err(|_| StartupError::InvalidOrigin(origin.to_string()))?;
            Ok::<_, StartupError>(
                CorsLayer::new()
                    .allow_origin(origin)
                    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                    .allow_headers([CONTENT_TYPE])
                    .max_age(Duration::from_secs(60 * 60)),
            )
        })
        .transpose()?;

    let router = Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes::routes())
        .layer(from_fn(middleware::security_headers_middleware))
        .layer(from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>, latency: Duration, span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state);

    let router = match cors {
        Some(cors) => router.layer(cors),
        None => router,
    };

    // Sentry layers (outermost for full request coverage)
    Ok(router
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction()))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Runs one single-row read against `menu_items`. Returns 503 if the backend
/// can't be reached.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    let probe = Query::from(Table::MenuItems).limit(1);
    match state.source().select(&probe).await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness probe failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
