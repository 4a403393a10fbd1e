use axum::http::StatusCode;

/// Handler for `GET /healthz`: liveness only; readiness is per service
/// because it depends on what the service talks to.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Map a dependency probe to the `GET /readyz` status.
pub fn readiness(ready: bool) -> StatusCode {
    if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}
