use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use models_notemon::response::ErrorResponse;

/// Maps any handler failure to the uniform error body the original contract
/// exposes: HTTP 500 with `{"error": "<message>"}`. There is deliberately no
/// differentiated status taxonomy.
pub fn internal_error(message: impl Into<String>) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}
