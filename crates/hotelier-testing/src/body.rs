//! Response body helpers.

use axum::body::{Body, to_bytes};
use axum::http::{Response, StatusCode};

/// Collect a response body as JSON.
pub async fn json_body(resp: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a `{ kind, message }` error response.
pub async fn assert_error(resp: Response<Body>, status: StatusCode, kind: &str, message: &str) {
    assert_eq!(resp.status(), status);
    let json = json_body(resp).await;
    assert_eq!(json["kind"], kind);
    assert_eq!(json["message"], message);
}
