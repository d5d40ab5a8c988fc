//! Identity-service transport client.
//!
//! TRADE-OFFS
//! ==========
//! Exactly one attempt per operation, no internal timeout or retry. A failed
//! credential submission is surfaced to the caller as-is, so a submission is
//! never duplicated silently. Callers own cancellation; nothing is persisted
//! here, so an aborted call leaves no partial state.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::services::validation::{Gender, LoginInput, RegisterInput};

pub const DEFAULT_LOGIN_FAILURE: &str = "login failed";
pub const DEFAULT_REGISTRATION_FAILURE: &str = "registration failed";

/// Which outbound operation produced a failure; selects the default message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Login,
    Registration,
}

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("identity request failed ({status}): {message}")]
    RequestFailed { status: u16, message: String },
    #[error("identity transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

// =============================================================================
// WIRE SHAPES
// =============================================================================

/// Envelope every identity-service response arrives in.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    message: Option<String>,
    data: T,
}

/// Best-effort error body; the backend may omit `message` or send no body.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// `data` payload of a successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub authenticated: bool,
    pub token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    email: &'a str,
    password_hash: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RegisterRequest<'a> {
    email: &'a str,
    password_hash: String,
    full_name: &'a str,
    phone_number: &'a str,
    date_of_birth: String,
    gender: Gender,
    role: &'static str,
}

// =============================================================================
// HELPERS
// =============================================================================

/// Hex SHA-256 of the password; the backend never sees the plaintext.
#[must_use]
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    let bytes = hasher.finalize();
    bytes.iter().map(|b| format!("{b:02x}")).collect::<String>()
}

/// Two-tier failure message: the backend-provided message when present and
/// non-empty, else the fixed per-operation default.
#[must_use]
pub fn failure_message(operation: Operation, backend: Option<String>) -> String {
    backend.filter(|m| !m.is_empty()).unwrap_or_else(|| match operation {
        Operation::Login => DEFAULT_LOGIN_FAILURE.to_owned(),
        Operation::Registration => DEFAULT_REGISTRATION_FAILURE.to_owned(),
    })
}

fn format_date(date: time::Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

// =============================================================================
// CLIENT
// =============================================================================

/// Thin client for the backend identity service. Holds a shared connection
/// pool; cheap to clone.
#[derive(Debug, Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    api_root: String,
}

impl IdentityClient {
    #[must_use]
    pub fn new(api_root: String) -> Self {
        Self { http: reqwest::Client::new(), api_root }
    }

    /// `POST {root}/auth/login` — one attempt, no retry.
    ///
    /// # Errors
    ///
    /// `RequestFailed` on any non-success status, with the backend's message
    /// when it sent one; `Transport` when the call itself failed.
    pub async fn login(&self, input: &LoginInput) -> Result<AuthSession, IdentityError> {
        let body = LoginRequest { email: &input.email, password_hash: hash_password(&input.password) };

        let response = self
            .http
            .post(format!("{}/auth/login", self.api_root))
            .json(&body)
            .send()
            .await?;

        let response = Self::check(response, Operation::Login).await?;
        let envelope: Envelope<AuthSession> = response.json().await?;
        Ok(envelope.data)
    }

    /// `POST {root}/users` — one attempt, no retry. Returns the backend's
    /// acknowledgement message.
    ///
    /// # Errors
    ///
    /// `RequestFailed` on any non-success status; `Transport` when the call
    /// itself failed.
    pub async fn register(&self, input: &RegisterInput) -> Result<String, IdentityError> {
        let body = RegisterRequest {
            email: &input.email,
            password_hash: hash_password(&input.password),
            full_name: &input.full_name,
            phone_number: &input.phone_number,
            date_of_birth: format_date(input.date_of_birth),
            gender: input.gender,
            role: "USER",
        };

        let response = self
            .http
            .post(format!("{}/users", self.api_root))
            .json(&body)
            .send()
            .await?;

        let response = Self::check(response, Operation::Registration).await?;
        let envelope: Envelope<serde_json::Value> = response.json().await?;
        Ok(envelope.message.unwrap_or_else(|| "registration successful".to_owned()))
    }

    async fn check(response: reqwest::Response, operation: Operation) -> Result<reqwest::Response, IdentityError> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let backend = response.json::<ErrorBody>().await.ok().and_then(|body| body.message);
        Err(IdentityError::RequestFailed { status, message: failure_message(operation, backend) })
    }
}

#[cfg(test)]
#[path = "identity_test.rs"]
mod tests;
