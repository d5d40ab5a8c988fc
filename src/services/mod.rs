//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own credential validation and identity-service transport
//! so route handlers can stay focused on protocol translation and cookie
//! plumbing.

pub mod identity;
pub mod validation;
