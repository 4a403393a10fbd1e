//! Session gate: every request is checked against the route table before it
//! reaches a handler.
//!
//! The gate restores a [`SessionStore`] from the session cookie, asks the
//! [`RouteGuard`] for a decision, and either forwards the request (with the
//! live [`Identity`] in its extensions) or answers `303 See Other`.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use chrono::Duration;
use tracing::debug;

use hotelier_auth_types::cookie::{HOTELIER_SESSION, clear_session_cookie};
use hotelier_auth_types::guard::{
    GuardDecision, HOME_PATH, LOGIN_PATH, ProtectedRoute, RouteGuard,
};
use hotelier_auth_types::identity::Identity;
use hotelier_auth_types::session::{Clock, SessionStore, SystemClock};
use hotelier_auth_types::token::decode_session_token;
use hotelier_domain::role::Role;

/// Dashboard prefixes and the single role each one admits.
pub fn hotel_route_guard() -> RouteGuard {
    RouteGuard::new(vec![
        ProtectedRoute::new("/admin", [Role::Admin]),
        ProtectedRoute::new("/stock", [Role::StockManager]),
        ProtectedRoute::new("/user", [Role::User]),
        ProtectedRoute::new("/employee", [Role::Employee]),
    ])
}

#[derive(Clone)]
pub struct GateState<C = SystemClock> {
    pub guard: Arc<RouteGuard>,
    pub session_secret: String,
    pub cookie_domain: String,
    pub session_ttl: Duration,
    pub clock: C,
}

impl GateState {
    pub fn new(session_secret: String, cookie_domain: String, session_ttl: Duration) -> Self {
        Self {
            guard: Arc::new(hotel_route_guard()),
            session_secret,
            cookie_domain,
            session_ttl,
            clock: SystemClock,
        }
    }
}

impl<C: Clock + Clone> GateState<C> {
    fn restore(&self, jar: &CookieJar) -> SessionStore<C> {
        let session = jar.get(HOTELIER_SESSION).and_then(|cookie| {
            decode_session_token(cookie.value(), &self.session_secret)
                .inspect_err(|e| debug!(error = %e, "ignoring undecodable session cookie"))
                .ok()
        });
        SessionStore::restore(session, self.clock.clone(), self.session_ttl)
    }
}

/// `axum::middleware::from_fn_with_state` middleware.
pub async fn session_gate<C>(
    State(gate): State<GateState<C>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response
where
    C: Clock + Clone + 'static,
{
    let path = request.uri().path().to_owned();
    let mut store = gate.restore(&jar);

    match gate.guard.decide(&path, &mut store) {
        GuardDecision::Allow => {
            // Only protected routes ran `check_session`; public ones never
            // see an identity.
            if gate.guard.route_for(&path).is_some() {
                if let Some(identity) = store.current().cloned() {
                    request.extensions_mut().insert::<Identity>(identity);
                }
            }
            next.run(request).await
        }
        GuardDecision::RedirectToLogin => {
            debug!(path = %path, "no live session; redirecting to login");
            let redirect = Redirect::to(LOGIN_PATH);
            if jar.get(HOTELIER_SESSION).is_some() {
                (clear_session_cookie(jar, gate.cookie_domain.clone()), redirect).into_response()
            } else {
                redirect.into_response()
            }
        }
        GuardDecision::RedirectToHome => {
            debug!(path = %path, "role not permitted; redirecting home");
            Redirect::to(HOME_PATH).into_response()
        }
    }
}
