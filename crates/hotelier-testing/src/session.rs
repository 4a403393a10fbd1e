//! Session cookie minting for HTTP-level tests.
//!
//! Gated routes read the `hotelier_session` cookie. `MockSession` signs one
//! directly, so tests need neither the auth service nor a database.

use axum::http::{HeaderValue, header};
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use hotelier_auth_types::cookie::HOTELIER_SESSION;
use hotelier_auth_types::identity::Identity;
use hotelier_auth_types::session::Session;
use hotelier_auth_types::token::issue_session_token;
use hotelier_domain::role::Role;

pub const TEST_SESSION_SECRET: &str = "test-session-secret-for-unit-tests-only";

pub struct MockSession {
    pub session: Session,
}

impl MockSession {
    /// A live session (one hour from now) for a fresh identity with `role`.
    pub fn new(role: Role) -> Self {
        Self::expiring(role, Utc::now() + Duration::hours(1))
    }

    pub fn expiring(role: Role, expires_at: DateTime<Utc>) -> Self {
        Self {
            session: Session {
                identity: Identity {
                    id: Uuid::new_v4(),
                    name: format!("test {role}"),
                    role,
                },
                expires_at,
            },
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.session.identity.id = id;
        self
    }

    pub fn identity(&self) -> &Identity {
        &self.session.identity
    }

    /// Signed cookie value under [`TEST_SESSION_SECRET`].
    pub fn token(&self) -> String {
        issue_session_token(&self.session, TEST_SESSION_SECRET).unwrap()
    }

    /// `(COOKIE, "hotelier_session=<token>")`, ready for a request builder.
    pub fn cookie_header(&self) -> (header::HeaderName, HeaderValue) {
        let value = format!("{HOTELIER_SESSION}={}", self.token());
        (header::COOKIE, HeaderValue::from_str(&value).unwrap())
    }
}
