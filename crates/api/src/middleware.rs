//! Request pipeline gates.
//!
//! Three layers, applied outside-in:
//!
//! 1. [`session_context`]: attaches the identity provisioned by the fronting
//!    session service (trusted headers). Never rejects.
//! 2. [`identity_gate`]: guarantees downstream handlers observe a populated
//!    identity, or terminates the request with 401.
//! 3. [`role_gate`]: per-route layer bound to one required role; terminates
//!    with 403 on mismatch (or 401 if the identity gate was bypassed by
//!    misconfigured routing).

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::borrow::Cow;
use tracing::warn;

use boxhub_auth::{GateConfig, Identity, Role, ensure_identity, require_identity, require_role};

use crate::app::errors::GateRejection;
use crate::context::IdentityContext;

/// Headers the fronting session service uses to convey the identity.
const HEADER_ID: &str = "x-auth-id";
const HEADER_USERNAME: &str = "x-auth-username";
const HEADER_ROLE: &str = "x-auth-role";

/// State for the identity gate, built once at router construction.
#[derive(Debug, Clone)]
pub struct GateState {
    pub config: GateConfig,
}

/// State for one role gate instance. Each protected route layers its own,
/// bound to exactly one required role.
#[derive(Debug, Clone)]
pub struct RequiredRole(Role);

impl RequiredRole {
    pub fn new(role: impl Into<Cow<'static, str>>) -> Self {
        Self(Role::new(role))
    }

    pub fn role(&self) -> &Role {
        &self.0
    }
}

/// Attach the externally provisioned identity, if any.
///
/// This is the stand-in for the upstream session collaborator: it trusts the
/// `x-auth-*` headers set by the fronting session service and performs no
/// credential verification itself. A record is attached only when all three
/// fields are present; a partial set is treated as anonymous.
pub async fn session_context(mut req: Request, next: Next) -> Response {
    if let Some(identity) = identity_from_headers(req.headers()) {
        req.extensions_mut().insert(IdentityContext::new(identity));
    }
    next.run(req).await
}

/// Identity gate middleware.
///
/// On continue, the resolved identity (possibly the synthesized dev identity)
/// is written back into the extensions so handlers and role gates read one
/// consistent record.
pub async fn identity_gate(
    State(state): State<GateState>,
    mut req: Request,
    next: Next,
) -> Result<Response, GateRejection> {
    let current = req
        .extensions()
        .get::<IdentityContext>()
        .map(|ctx| ctx.identity().clone());

    let identity = ensure_identity(&state.config, current)?;

    req.extensions_mut().insert(IdentityContext::new(identity));
    Ok(next.run(req).await)
}

/// Role gate middleware.
///
/// Re-validates identity presence defensively rather than assuming the
/// identity gate ran upstream.
pub async fn role_gate(
    State(required): State<RequiredRole>,
    req: Request,
    next: Next,
) -> Result<Response, GateRejection> {
    let current = req.extensions().get::<IdentityContext>().cloned();
    let identity = require_identity(current.map(IdentityContext::into_identity))?;
    require_role(&identity, required.role())?;
    Ok(next.run(req).await)
}

fn identity_from_headers(headers: &HeaderMap) -> Option<Identity> {
    let field = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());

    match (field(HEADER_ID), field(HEADER_USERNAME), field(HEADER_ROLE)) {
        (Some(id), Some(username), Some(role)) => {
            Some(Identity::new(id, username, role.to_string()))
        }
        (None, None, None) => None,
        _ => {
            // Partial records violate the identity invariant; treat the
            // request as anonymous rather than attach an incomplete record.
            warn!("incomplete identity headers; treating request as anonymous");
            None
        }
    }
}
