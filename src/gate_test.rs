use super::*;

use axum::body::Body;
use axum::http::{StatusCode, header};
use tower::ServiceExt;

use crate::config::Config;
use crate::state::AppState;

// =============================================================================
// classify
// =============================================================================

#[test]
fn classify_public_routes() {
    for path in PUBLIC_ROUTES {
        assert_eq!(classify(path), RouteKind::Public, "expected public for {path}");
    }
}

#[test]
fn classify_protected_fallthrough() {
    assert_eq!(classify("/"), RouteKind::Protected);
    assert_eq!(classify("/dashboard"), RouteKind::Protected);
    assert_eq!(classify("/quiz/42"), RouteKind::Protected);
    assert_eq!(classify("/auth/login/extra"), RouteKind::Protected);
}

#[test]
fn classify_asset_prefixes() {
    assert_eq!(classify("/api/auth/login"), RouteKind::Asset);
    assert_eq!(classify("/pkg/app.wasm"), RouteKind::Asset);
    assert_eq!(classify("/static/site.css"), RouteKind::Asset);
    assert_eq!(classify("/assets/hero.svg"), RouteKind::Asset);
    assert_eq!(classify("/images/banner.webp"), RouteKind::Asset);
}

#[test]
fn classify_asset_exact_paths() {
    assert_eq!(classify("/favicon.ico"), RouteKind::Asset);
    assert_eq!(classify("/robots.txt"), RouteKind::Asset);
    assert_eq!(classify("/healthz"), RouteKind::Asset);
}

#[test]
fn classify_file_extension_anywhere() {
    assert_eq!(classify("/logo.png"), RouteKind::Asset);
    assert_eq!(classify("/deep/nested/chart.min.js"), RouteKind::Asset);
}

#[test]
fn classify_is_idempotent() {
    for path in ["/", "/dashboard", "/auth/login", "/logo.png", "/api/x"] {
        assert_eq!(classify(path), classify(path));
    }
}

// Every path yields exactly one kind; dotted segments in the middle of a
// path do not make the route an asset.
#[test]
fn classify_extension_checks_final_segment_only() {
    assert_eq!(classify("/v1.2/dashboard"), RouteKind::Protected);
}

// =============================================================================
// decide — the full table
// =============================================================================

#[test]
fn decide_asset_always_allows() {
    assert_eq!(decide("/logo.png", true), Verdict::Allow);
    assert_eq!(decide("/logo.png", false), Verdict::Allow);
}

#[test]
fn decide_public_with_token_redirects_home() {
    assert_eq!(decide("/auth/login", true), Verdict::RedirectTo(HOME_TARGET));
    assert_eq!(decide("/auth/register", true), Verdict::RedirectTo(HOME_TARGET));
}

#[test]
fn decide_public_without_token_allows() {
    assert_eq!(decide("/auth/login", false), Verdict::Allow);
}

#[test]
fn decide_protected_with_token_allows() {
    assert_eq!(decide("/dashboard", true), Verdict::Allow);
}

#[test]
fn decide_protected_without_token_redirects_login() {
    assert_eq!(decide("/dashboard", false), Verdict::RedirectTo(LOGIN_TARGET));
    assert_eq!(decide("/", false), Verdict::RedirectTo(LOGIN_TARGET));
}

#[test]
fn entry_and_gate_anonymous_targets_stay_distinct() {
    assert_ne!(REGISTER_TARGET, LOGIN_TARGET);
}

// =============================================================================
// middleware scenarios
// =============================================================================

fn test_app() -> axum::Router {
    let config = Config {
        identity_api_root: "http://127.0.0.1:9".to_owned(),
        port: 0,
        cookie_secure: false,
    };
    crate::routes::app(AppState::new(config))
}

fn get_request(path: &str, cookie: Option<&str>) -> axum::http::Request<Body> {
    let mut builder = axum::http::Request::builder().uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn anonymous_dashboard_request_redirects_to_login() {
    let response = test_app()
        .oneshot(get_request("/dashboard", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), LOGIN_TARGET);
}

#[tokio::test]
async fn authenticated_login_page_request_redirects_home() {
    let response = test_app()
        .oneshot(get_request("/auth/login", Some("access_token=tok-1")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), HOME_TARGET);
}

#[tokio::test]
async fn asset_request_passes_through_without_token() {
    let response = test_app().oneshot(get_request("/logo.png", None)).await.unwrap();

    // No handler owns the path; pass-through means the router 404s instead
    // of the gate redirecting.
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn authenticated_dashboard_request_is_served() {
    let response = test_app()
        .oneshot(get_request("/dashboard", Some("access_token=tok-1")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn anonymous_register_page_is_served() {
    let response = test_app().oneshot(get_request("/auth/register", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn empty_cookie_value_counts_as_anonymous() {
    let response = test_app()
        .oneshot(get_request("/dashboard", Some("access_token=")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), LOGIN_TARGET);
}

#[tokio::test]
async fn healthz_is_reachable_without_token() {
    let response = test_app().oneshot(get_request("/healthz", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
