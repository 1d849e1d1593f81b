//! HTTP API application wiring (Axum router + service wiring).
//!
//! Folder structure:
//! - `services.rs`: in-memory box registry shared by the handlers
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses, including the gate rejections

use std::sync::Arc;

use axum::{Extension, Router, middleware::from_fn, middleware::from_fn_with_state, routing::get};

use boxhub_auth::GateConfig;

use crate::middleware::{self, GateState};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// The gate configuration is injected here once; request handling never
/// consults the environment.
pub fn build_app(config: GateConfig) -> Router {
    let gate_state = GateState { config };
    let services = Arc::new(services::AppServices::new());

    // Protected routes. Layers run outermost-last: the session context is
    // attached first, then the identity gate decides, then any per-route
    // role gate inside `routes::router()`.
    let protected = routes::router()
        .layer(Extension(services))
        .layer(from_fn_with_state(gate_state, middleware::identity_gate))
        .layer(from_fn(middleware::session_context));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(protected)
}
