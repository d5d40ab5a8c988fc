//! Session gate — route classification and the request-time redirect decision.
//!
//! DESIGN
//! ======
//! Classification is pure data: ordered rule lists evaluated top to bottom,
//! first match wins (public pages, then asset exclusions, then the protected
//! fallthrough). The middleware consults the classifier before any handler
//! runs. Its only outputs are pass-through and redirect — routing never
//! produces an error page.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;

use crate::token;

// =============================================================================
// ROUTE TABLE
// =============================================================================

/// Pages reachable without a token, matched exactly.
pub const PUBLIC_ROUTES: &[&str] = &["/auth/login", "/auth/register", "/auth/forgot-password"];

/// Path prefixes excluded from gating entirely: API, server-internal assets,
/// static files, and images.
const BYPASS_PREFIXES: &[&str] = &["/api/", "/pkg/", "/static/", "/assets/", "/images/"];

/// Exact paths excluded from gating entirely.
const BYPASS_EXACT: &[&str] = &["/favicon.ico", "/robots.txt", "/healthz"];

/// Where an authenticated user lands when visiting an auth page.
pub const HOME_TARGET: &str = "/";

/// Where an anonymous user is sent from a protected page.
pub const LOGIN_TARGET: &str = "/auth/login";

/// The entry guard's anonymous destination. First-touch navigation goes to
/// sign-up, not sign-in — kept distinct from `LOGIN_TARGET` on purpose.
pub const REGISTER_TARGET: &str = "/auth/register";

/// The entry guard's authenticated destination.
pub const DASHBOARD_TARGET: &str = "/dashboard";

// =============================================================================
// CLASSIFIER
// =============================================================================

/// Every path belongs to exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    Public,
    Asset,
    Protected,
}

/// Gate outcome for a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Allow,
    RedirectTo(&'static str),
}

/// True when the final path segment carries a file extension.
fn has_file_extension(path: &str) -> bool {
    path.rsplit('/').next().is_some_and(|segment| segment.contains('.'))
}

fn is_asset(path: &str) -> bool {
    BYPASS_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
        || BYPASS_EXACT.contains(&path)
        || has_file_extension(path)
}

/// Classify a path into exactly one route kind. Asset rules are consulted
/// only when the path is not an exact public match.
#[must_use]
pub fn classify(path: &str) -> RouteKind {
    if PUBLIC_ROUTES.contains(&path) {
        return RouteKind::Public;
    }
    if is_asset(path) {
        return RouteKind::Asset;
    }
    RouteKind::Protected
}

/// The full decision table over route kind and token presence. Total: every
/// combination yields exactly one verdict.
#[must_use]
pub fn decide(path: &str, token_present: bool) -> Verdict {
    match (classify(path), token_present) {
        (RouteKind::Asset, _) => Verdict::Allow,
        (RouteKind::Public, true) => Verdict::RedirectTo(HOME_TARGET),
        (RouteKind::Public, false) => Verdict::Allow,
        (RouteKind::Protected, true) => Verdict::Allow,
        (RouteKind::Protected, false) => Verdict::RedirectTo(LOGIN_TARGET),
    }
}

// =============================================================================
// MIDDLEWARE
// =============================================================================

/// Pre-render interception: resolve the edge-side token and apply the
/// decision table before any handler runs. Redirects use a relative
/// `Location`, so the original protocol and host are preserved and only the
/// path changes.
pub async fn session_gate(jar: CookieJar, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let token_present = token::resolve_edge(&jar).is_some();

    match decide(&path, token_present) {
        Verdict::Allow => next.run(request).await,
        Verdict::RedirectTo(target) => {
            tracing::debug!(%path, redirect = target, token_present, "gate redirect");
            Redirect::temporary(target).into_response()
        }
    }
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod tests;
