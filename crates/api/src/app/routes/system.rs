use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use crate::context::IdentityContext;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn whoami(Extension(identity): Extension<IdentityContext>) -> impl IntoResponse {
    let identity = identity.identity();
    Json(serde_json::json!({
        "id": identity.id,
        "username": identity.username,
        "role": identity.role.as_str(),
    }))
}
