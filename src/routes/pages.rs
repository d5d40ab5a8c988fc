//! Page stubs for the gated surface.
//!
//! Visual rendering is out of scope; these handlers exist so every route
//! kind the gate classifies is reachable end to end.

use axum::response::Html;

pub async fn home() -> Html<&'static str> {
    Html("<!doctype html><title>Quiz Platform</title><h1>Quiz Platform</h1>")
}

pub async fn dashboard() -> Html<&'static str> {
    Html("<!doctype html><title>Dashboard</title><h1>Dashboard</h1>")
}

pub async fn login() -> Html<&'static str> {
    Html("<!doctype html><title>Log in</title><h1>Log in</h1>")
}

pub async fn register() -> Html<&'static str> {
    Html("<!doctype html><title>Register</title><h1>Register</h1>")
}

pub async fn forgot_password() -> Html<&'static str> {
    Html("<!doctype html><title>Reset password</title><h1>Reset password</h1>")
}
