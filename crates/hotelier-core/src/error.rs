use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Uniform `{ "kind", "message" }` error body.
///
/// Service error enums map themselves to a status and kind, then render
/// through here. Pass `internal` for 5xx causes: only those are logged, since
/// tower-http `TraceLayer` already records status for every request.
pub fn error_response(
    status: StatusCode,
    kind: &'static str,
    message: String,
    internal: Option<&dyn std::fmt::Display>,
) -> Response {
    if let Some(cause) = internal {
        ::tracing::error!(error = %cause, kind, "internal error");
    }
    let body = serde_json::json!({
        "kind": kind,
        "message": message,
    });
    (status, axum::Json(body)).into_response()
}
