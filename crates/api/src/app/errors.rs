//! Consistent error responses.
//!
//! Gate rejections carry a fixed wire shape (`{"error": <message>}` with the
//! exact message strings from `boxhub-auth`); handler-level errors use the
//! code + message shape via [`json_error`].

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use boxhub_auth::GateError;

/// A gate rejection, terminal for the request.
///
/// The pipeline never sees this as an error value: converting it into a
/// response resolves the rejection entirely within the middleware layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateRejection(GateError);

impl From<GateError> for GateRejection {
    fn from(err: GateError) -> Self {
        Self(err)
    }
}

impl IntoResponse for GateRejection {
    fn into_response(self) -> Response {
        let status = match self.0 {
            GateError::Unauthenticated => StatusCode::UNAUTHORIZED,
            GateError::Forbidden => StatusCode::FORBIDDEN,
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> Response {
    (
        status,
        Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
