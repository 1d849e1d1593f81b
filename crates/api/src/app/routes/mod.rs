use axum::{Router, routing::get};

pub mod boxes;
pub mod system;

/// Router for all endpoints behind the identity gate.
pub fn router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .merge(boxes::read_router())
        .merge(boxes::admin_router())
        .merge(boxes::ingest_router())
}
