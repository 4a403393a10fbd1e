use axum::{
    Router,
    routing::{get, post},
};

use hotelier_core::health::healthz;
use hotelier_core::middleware::with_observability;

use crate::handlers::{
    health::readyz,
    session::{check_session, login, logout},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Session
        .route(
            "/auth/session",
            post(login).get(check_session).delete(logout),
        )
        .with_state(state);
    with_observability(router)
}
