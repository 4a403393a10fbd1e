use std::sync::Arc;

use axum::body::Body;
use axum::extract::Request;
use axum::http::{StatusCode, header};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router, middleware};
use chrono::Duration;
use tower::ServiceExt;

use hotelier_auth_types::identity::Identity;
use hotelier_auth_types::session::Clock;
use hotelier_domain::role::Role;
use hotelier_hotel::gate::{GateState, hotel_route_guard, session_gate};
use hotelier_testing::body::json_body;
use hotelier_testing::clock::ManualClock;
use hotelier_testing::session::MockSession;

use crate::helpers::TEST_SECRET;

async fn whoami(identity: Identity) -> Json<Identity> {
    Json(identity)
}

async fn public(request: Request) -> String {
    format!("identity={}", request.extensions().get::<Identity>().is_some())
}

/// Stand-in dashboards behind the real gate, driven by `clock`.
fn app(clock: ManualClock) -> Router {
    let gate = GateState {
        guard: Arc::new(hotel_route_guard()),
        session_secret: TEST_SECRET.to_owned(),
        cookie_domain: "hotel.test".to_owned(),
        session_ttl: Duration::hours(1),
        clock,
    };
    Router::new()
        .route("/admin/dashboard", get(whoami))
        .route("/stock/items", get(whoami))
        .route("/user/reservations", get(whoami))
        .route("/employee/reservations", get(whoami))
        .route("/administrator", get(public))
        .route("/rooms", get(public))
        .layer(middleware::from_fn_with_state(
            gate,
            session_gate::<ManualClock>,
        ))
}

/// A session minted at the clock's current instant, live for one hour.
fn login(clock: &ManualClock, role: Role) -> MockSession {
    MockSession::expiring(role, clock.now() + Duration::hours(1))
}

fn get_with(path: &str, session: Option<&MockSession>) -> Request {
    let mut builder = Request::builder().uri(path);
    if let Some(session) = session {
        let (name, value) = session.cookie_header();
        builder = builder.header(name, value);
    }
    builder.body(Body::empty()).unwrap()
}

fn location(resp: &Response) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

fn cleared_cookie(resp: &Response) -> bool {
    resp.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .any(|v| v.starts_with("hotelier_session=;") && v.contains("Max-Age=0"))
}

async fn body_text(resp: Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn should_admit_each_role_to_its_own_dashboard() {
    let clock = ManualClock::fixed();
    for (role, path) in [
        (Role::Admin, "/admin/dashboard"),
        (Role::StockManager, "/stock/items"),
        (Role::User, "/user/reservations"),
        (Role::Employee, "/employee/reservations"),
    ] {
        let session = login(&clock, role);

        let resp = app(clock.clone())
            .oneshot(get_with(path, Some(&session)))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK, "{role} on {path}");
        let json = json_body(resp).await;
        assert_eq!(json["id"], session.identity().id.to_string());
        assert_eq!(json["role"], role.as_str());
    }
}

#[tokio::test]
async fn should_send_wrong_role_home_without_touching_the_cookie() {
    let clock = ManualClock::fixed();
    let session = login(&clock, Role::User);

    let resp = app(clock)
        .oneshot(get_with("/admin/dashboard", Some(&session)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");
    assert!(!cleared_cookie(&resp));
}

#[tokio::test]
async fn should_send_employee_away_from_stock() {
    let clock = ManualClock::fixed();
    let session = login(&clock, Role::Employee);

    let resp = app(clock)
        .oneshot(get_with("/stock/items", Some(&session)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");
}

#[tokio::test]
async fn should_redirect_to_login_without_a_session() {
    let resp = app(ManualClock::fixed())
        .oneshot(get_with("/employee/reservations", None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login");
    assert!(!cleared_cookie(&resp));
}

#[tokio::test]
async fn should_keep_session_until_the_last_second() {
    let clock = ManualClock::fixed();
    let session = login(&clock, Role::Admin);
    clock.advance(3599);

    let resp = app(clock)
        .oneshot(get_with("/admin/dashboard", Some(&session)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn should_expire_session_at_its_deadline() {
    let clock = ManualClock::fixed();
    let session = login(&clock, Role::Admin);
    clock.advance(3600);

    let resp = app(clock)
        .oneshot(get_with("/admin/dashboard", Some(&session)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login");
    assert!(cleared_cookie(&resp));
}

#[tokio::test]
async fn should_redirect_expired_session_to_login_even_on_wrong_dashboard() {
    let clock = ManualClock::fixed();
    let session = login(&clock, Role::User);
    clock.advance(3601);

    let resp = app(clock)
        .oneshot(get_with("/admin/dashboard", Some(&session)))
        .await
        .unwrap();

    assert_eq!(location(&resp), "/login");
}

#[tokio::test]
async fn should_treat_forged_cookie_as_no_session() {
    let clock = ManualClock::fixed();
    let session = login(&clock, Role::Admin);
    let token = session.token();
    let (signed, _) = token.rsplit_once('.').unwrap();
    let forged = format!("{signed}.c2lnbmF0dXJl");

    let resp = app(clock)
        .oneshot(
            Request::builder()
                .uri("/admin/dashboard")
                .header(header::COOKIE, format!("hotelier_session={forged}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login");
    assert!(cleared_cookie(&resp));
}

#[tokio::test]
async fn should_serve_public_paths_without_identity() {
    let clock = ManualClock::fixed();
    let session = login(&clock, Role::Admin);

    for session in [None, Some(&session)] {
        let resp = app(clock.clone())
            .oneshot(get_with("/rooms", session))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_text(resp).await, "identity=false");
    }
}

#[tokio::test]
async fn should_match_dashboard_prefix_on_segment_boundary() {
    let resp = app(ManualClock::fixed())
        .oneshot(get_with("/administrator", None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}
