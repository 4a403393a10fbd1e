use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;
use tower::ServiceExt;

use hotelier_auth::router::build_router;
use hotelier_auth::state::AppState;
use hotelier_domain::role::Role;
use hotelier_testing::body::{assert_error, json_body};
use hotelier_testing::session::MockSession;

use crate::helpers::{TEST_SECRET, ttl};

// Session checks and logout never reach the database.
fn app() -> axum::Router {
    build_router(AppState {
        db: DatabaseConnection::Disconnected,
        session_secret: TEST_SECRET.to_owned(),
        cookie_domain: "hotel.test".to_owned(),
        session_ttl: ttl(),
    })
}

fn request(method: Method, session: Option<&MockSession>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri("/auth/session");
    if let Some(session) = session {
        let (name, value) = session.cookie_header();
        builder = builder.header(name, value);
    }
    builder.body(Body::empty()).unwrap()
}

fn cleared_cookie(resp: &axum::response::Response) -> bool {
    resp.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .any(|v| v.starts_with("hotelier_session=;") && v.contains("Max-Age=0"))
}

#[tokio::test]
async fn should_return_identity_for_live_session() {
    let session = MockSession::new(Role::StockManager);

    let resp = app()
        .oneshot(request(Method::GET, Some(&session)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = json_body(resp).await;
    assert_eq!(json["id"], session.identity().id.to_string());
    assert_eq!(json["role"], "stock_manager");
    assert_eq!(json["home"], "/stock");
}

#[tokio::test]
async fn should_reject_expired_session_and_clear_cookie() {
    let session = MockSession::expiring(Role::Admin, Utc::now() - Duration::seconds(1));

    let resp = app()
        .oneshot(request(Method::GET, Some(&session)))
        .await
        .unwrap();

    assert!(cleared_cookie(&resp));
    assert_error(
        resp,
        StatusCode::UNAUTHORIZED,
        "INVALID_SESSION",
        "session expired",
    )
    .await;
}

#[tokio::test]
async fn should_reject_request_without_cookie() {
    let resp = app().oneshot(request(Method::GET, None)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_clear_cookie_on_logout_even_without_session() {
    let session = MockSession::new(Role::User);

    let resp = app()
        .oneshot(request(Method::DELETE, Some(&session)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(cleared_cookie(&resp));

    let resp = app().oneshot(request(Method::DELETE, None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(cleared_cookie(&resp));
}

#[tokio::test]
async fn should_reject_login_body_without_code_as_invalid_code() {
    for (content_type, body) in [
        ("application/json", "{}"),
        ("application/json", "not json"),
        ("text/plain", "9999999"),
    ] {
        let resp = app()
            .oneshot(
                Request::post("/auth/session")
                    .header(header::CONTENT_TYPE, content_type)
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_error(
            resp,
            StatusCode::UNAUTHORIZED,
            "INVALID_CODE",
            "invalid access code",
        )
        .await;
    }
}

#[tokio::test]
async fn should_answer_liveness_probe() {
    let resp = app()
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));
}
