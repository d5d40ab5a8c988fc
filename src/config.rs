//! Gateway configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env var: {var}")]
    MissingVar { var: String },
}

/// Typed runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Versioned API root of the backend identity service, no trailing slash.
    pub identity_api_root: String,
    /// Listen port.
    pub port: u16,
    /// Whether session cookies are issued with the `Secure` attribute.
    pub cookie_secure: bool,
}

impl Config {
    /// Build typed config from environment variables.
    ///
    /// Required:
    /// - `IDENTITY_API_URL`: base URL of the identity service API
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `PUBLIC_BASE_URL`: used to infer `Secure` cookies when `COOKIE_SECURE` is unset
    /// - `COOKIE_SECURE`: explicit override, truthy/falsy strings
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        let identity_api_root = std::env::var("IDENTITY_API_URL")
            .map_err(|_| ConfigError::MissingVar { var: "IDENTITY_API_URL".into() })?
            .trim_end_matches('/')
            .to_string();

        let port = env_parse("PORT", DEFAULT_PORT);
        let public_base_url = std::env::var("PUBLIC_BASE_URL").ok();
        let cookie_secure = infer_cookie_secure(env_bool("COOKIE_SECURE"), public_base_url.as_deref());

        Ok(Self { identity_api_root, port, cookie_secure })
    }
}

/// Explicit override wins; otherwise infer from the public base URL scheme.
#[must_use]
pub fn infer_cookie_secure(explicit: Option<bool>, public_base_url: Option<&str>) -> bool {
    if let Some(value) = explicit {
        return value;
    }

    public_base_url
        .map(|url| url.starts_with("https://"))
        .unwrap_or(false)
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
