//! Auth flow routes — credential submission, cookie persistence, entry redirect.
//!
//! DESIGN
//! ======
//! The gate core only reads the token; this module is the caller that
//! persists it. The cookie is written exactly once, after a successful login
//! response, so an aborted transport call leaves no partial state.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde_json::json;
use time::Duration;

use crate::gate;
use crate::services::identity::IdentityError;
use crate::services::validation::{LoginForm, RegisterForm};
use crate::state::AppState;
use crate::token;

const SESSION_COOKIE_DAYS: i64 = 7;

fn session_cookie(value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((token::ACCESS_TOKEN_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::days(SESSION_COOKIE_DAYS))
        .build()
}

fn identity_error_response(err: &IdentityError) -> Response {
    match err {
        IdentityError::RequestFailed { status, message } => {
            let status = StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, Json(json!({ "message": message }))).into_response()
        }
        IdentityError::Transport(e) => {
            tracing::error!(error = %e, "identity service unreachable");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "message": "identity service unreachable" })),
            )
                .into_response()
        }
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/auth/login` — validate, forward to the identity service, then
/// persist the returned token into the session cookie.
pub async fn login(State(state): State<AppState>, jar: CookieJar, Json(form): Json<LoginForm>) -> Response {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "errors": errors }))).into_response();
        }
    };

    match state.identity.login(&input).await {
        Ok(session) => {
            let authenticated = session.authenticated;
            let jar = jar.add(session_cookie(session.token, state.config.cookie_secure));
            (jar, Json(json!({ "authenticated": authenticated }))).into_response()
        }
        Err(e) => identity_error_response(&e),
    }
}

/// `POST /api/auth/register` — validate, forward to the identity service.
/// No cookie is set; the user signs in afterwards.
pub async fn register(State(state): State<AppState>, Json(form): Json<RegisterForm>) -> Response {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "errors": errors }))).into_response();
        }
    };

    match state.identity.register(&input).await {
        Ok(message) => (StatusCode::CREATED, Json(json!({ "message": message }))).into_response(),
        Err(e) => identity_error_response(&e),
    }
}

/// `POST /api/auth/logout` — clear the session cookie.
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    let cookie = Cookie::build((token::ACCESS_TOKEN_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.config.cookie_secure)
        .max_age(Duration::ZERO);

    let jar = CookieJar::new().add(cookie);
    (jar, StatusCode::NO_CONTENT)
}

/// `GET /api/entry` — user-gesture entry point. Resolves the token
/// client-side (cookie, then persistent-store relay header) and picks the
/// navigation target: dashboard when present, registration when absent.
/// Never blocks rendering; it only decides where the gesture lands.
pub async fn entry_redirect(jar: CookieJar, headers: HeaderMap) -> Redirect {
    let store_value = headers
        .get(token::ACCESS_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok());

    match token::resolve_client(&jar, store_value) {
        Some(_) => Redirect::temporary(gate::DASHBOARD_TARGET),
        None => Redirect::temporary(gate::REGISTER_TARGET),
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
