//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every request passes through the session gate middleware before any
//! handler runs: auth pages, the dashboard, the marketing surface, and the
//! static asset tree are all behind the same gate, which is why the
//! classifier's asset bypass exists. The auth API lives under `/api` and is
//! bypassed by the gate so credential submission is never itself redirected.

pub mod auth;
pub mod pages;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::gate;
use crate::state::AppState;

/// Resolve the static asset directory.
fn static_dir() -> PathBuf {
    std::env::var("STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"))
}

/// Full application router with the gate applied to every route.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(pages::home))
        .route("/dashboard", get(pages::dashboard))
        .route("/auth/login", get(pages::login))
        .route("/auth/register", get(pages::register))
        .route("/auth/forgot-password", get(pages::forgot_password))
        .route("/api/entry", get(auth::entry_redirect))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/logout", post(auth::logout))
        .route("/healthz", get(healthz))
        .nest_service("/static", ServeDir::new(static_dir()))
        .layer(middleware::from_fn(gate::session_gate))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
