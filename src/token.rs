//! Access-token resolution across the two credential stores.
//!
//! DESIGN
//! ======
//! The token is opaque to this layer: presence of a non-empty value is the
//! only signal consumed. Two stores exist — the origin-wide cookie and a
//! client-local persistent store whose value the browser relays in a request
//! header. The edge is authoritative and cookie-only, since the cookie jar is
//! the only store visible at request time; the client-side resolution is a
//! monotone OR across both stores, cookie first. The asymmetry is deliberate
//! and must not be unified.

use axum_extra::extract::cookie::{Cookie, CookieJar};

/// Cookie holding the access token, scoped to the whole origin.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Header the client uses to relay its persistent-store copy of the token.
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() { None } else { Some(value.to_owned()) }
}

/// Edge-side resolution: request cookie only. A missing token is a normal
/// state for anonymous visitors, never an error.
#[must_use]
pub fn resolve_edge(jar: &CookieJar) -> Option<String> {
    jar.get(ACCESS_TOKEN_COOKIE).map(Cookie::value).and_then(non_empty)
}

/// Client-side resolution: cookie first, persistent-store relay second.
#[must_use]
pub fn resolve_client(jar: &CookieJar, store_value: Option<&str>) -> Option<String> {
    resolve_edge(jar).or_else(|| store_value.and_then(non_empty))
}

#[cfg(test)]
#[path = "token_test.rs"]
mod tests;
