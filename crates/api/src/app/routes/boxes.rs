use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    middleware::from_fn_with_state,
    response::IntoResponse,
    routing::{delete, get, post},
};

use crate::app::services::{AppServices, SensorBox};
use crate::app::{dto, errors};
use crate::middleware::{RequiredRole, role_gate};

/// Read endpoints: any authenticated identity.
pub fn read_router() -> Router {
    Router::new()
        .route("/boxes", get(list_boxes))
        .route("/boxes/:id", get(get_box))
}

/// Box administration: requires the "admin" role.
pub fn admin_router() -> Router {
    Router::new()
        .route("/boxes", post(register_box))
        .route("/boxes/:id", delete(remove_box))
        .layer(from_fn_with_state(RequiredRole::new("admin"), role_gate))
}

/// Reading ingestion: requires the "sensor" role. A separate role gate
/// instance from the admin one, bound to a different role.
pub fn ingest_router() -> Router {
    Router::new()
        .route("/boxes/:id/readings", post(record_reading))
        .layer(from_fn_with_state(RequiredRole::new("sensor"), role_gate))
}

pub async fn list_boxes(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let items = services
        .list_boxes()
        .iter()
        .map(dto::box_to_json)
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn get_box(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.get_box(&id) {
        Some(sensor_box) => (StatusCode::OK, Json(dto::box_to_json(&sensor_box))).into_response(),
        None => unknown_box(&id),
    }
}

pub async fn register_box(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::RegisterBoxRequest>,
) -> axum::response::Response {
    let sensor_box = SensorBox {
        id: body.id,
        name: body.name,
        sensor_type: body.sensor_type,
        last_reading: None,
    };

    if !services.register_box(sensor_box.clone()) {
        return errors::json_error(
            StatusCode::CONFLICT,
            "conflict",
            format!("box '{}' is already registered", sensor_box.id),
        );
    }

    tracing::info!(box_id = %sensor_box.id, "registered sensor box");
    (StatusCode::CREATED, Json(dto::box_to_json(&sensor_box))).into_response()
}

pub async fn remove_box(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if !services.remove_box(&id) {
        return unknown_box(&id);
    }
    StatusCode::NO_CONTENT.into_response()
}

pub async fn record_reading(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::ReadingRequest>,
) -> axum::response::Response {
    if !services.record_reading(&id, body.value) {
        return unknown_box(&id);
    }
    StatusCode::ACCEPTED.into_response()
}

fn unknown_box(id: &str) -> axum::response::Response {
    errors::json_error(
        StatusCode::NOT_FOUND,
        "not_found",
        format!("no box registered with id '{id}'"),
    )
}
