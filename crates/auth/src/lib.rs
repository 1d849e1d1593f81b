//! `boxhub-auth` — pure authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: the gate
//! functions are synchronous decisions over an optional [`Identity`], and the
//! transport layer decides how a rejection becomes a response.

pub mod config;
pub mod gate;
pub mod identity;

pub use config::{DEV_BYPASS_ENV, GateConfig};
pub use gate::{GateError, ensure_identity, require_identity, require_role};
pub use identity::{Identity, Role};
