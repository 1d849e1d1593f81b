//! Gate decision procedures.
//!
//! Both gates are pure functions over the optional [`Identity`] carried by
//! the request context:
//!
//! - [`ensure_identity`]: the identity gate. Guarantees downstream handlers
//!   observe a populated identity, synthesizing the dev identity when the
//!   bypass is enabled.
//! - [`require_role`]: the role gate. Restricts execution to identities
//!   holding one caller-declared role.
//!
//! Neither performs I/O, so a rejection is fully determined by the arguments.

use thiserror::Error;

use crate::config::GateConfig;
use crate::identity::{Identity, Role};

/// Rejection produced by a gate.
///
/// The display strings are part of the wire protocol: the HTTP layer emits
/// them verbatim as the `error` field of the rejection body.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GateError {
    /// The request carries no authenticated identity (HTTP 401).
    #[error("You must be logged in")]
    Unauthenticated,

    /// The identity does not hold the required role (HTTP 403).
    #[error("Forbidden: insufficient rights")]
    Forbidden,
}

/// Require a populated identity.
///
/// Shared by both gates so the unauthenticated rejection cannot drift
/// between the two call sites.
pub fn require_identity(identity: Option<Identity>) -> Result<Identity, GateError> {
    identity.ok_or(GateError::Unauthenticated)
}

/// Identity gate: resolve the identity a request proceeds with.
///
/// In bypass mode an absent identity is populated with [`Identity::dev`] and
/// the request always continues; a present identity is returned unchanged
/// (populate-if-absent, never overwrite). In normal mode an absent identity
/// is rejected with [`GateError::Unauthenticated`].
///
/// The bypass path never inspects the role and cannot reject.
pub fn ensure_identity(
    config: &GateConfig,
    identity: Option<Identity>,
) -> Result<Identity, GateError> {
    if config.dev_bypass {
        return Ok(identity.unwrap_or_else(Identity::dev));
    }
    require_identity(identity)
}

/// Role gate: require an exact, case-sensitive role match.
pub fn require_role(identity: &Identity, required: &Role) -> Result<(), GateError> {
    if identity.role == *required {
        Ok(())
    } else {
        Err(GateError::Forbidden)
    }
}
