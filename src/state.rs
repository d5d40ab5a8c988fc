//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! The gate itself holds no state: every decision is recomputed from the
//! request's cookie jar, so concurrent requests never interfere and the two
//! credential stores cannot go stale relative to a cache.

use crate::config::Config;
use crate::services::identity::IdentityClient;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub identity: IdentityClient,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        let identity = IdentityClient::new(config.identity_api_root.clone());
        Self { config, identity }
    }
}
