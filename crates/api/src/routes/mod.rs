pub mod callback;
pub mod donations;
pub mod health;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// Fallback for known paths hit with an unsupported method.
///
/// Axum's default 405 has an empty body; the public contract promises a
/// JSON error body instead.
pub(crate) async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
}
