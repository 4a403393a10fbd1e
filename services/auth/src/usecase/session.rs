use anyhow::Context as _;
use chrono::Duration;
use tracing::{debug, error, info, warn};

use hotelier_auth_types::identity::Identity;
use hotelier_auth_types::resolve::IdentityResolver;
use hotelier_auth_types::session::{Clock, LoginError, Session, SessionStore};
use hotelier_auth_types::token::{decode_session_token, issue_session_token};

use crate::error::AuthServiceError;

fn restore_store<C: Clock>(
    token: Option<&str>,
    secret: &str,
    clock: C,
    ttl: Duration,
) -> SessionStore<C> {
    let session = token.and_then(|value| match decode_session_token(value, secret) {
        Ok(session) => Some(session),
        Err(e) => {
            debug!(error = %e, "discarding undecodable session cookie");
            None
        }
    });
    SessionStore::restore(session, clock, ttl)
}

// ── Login ────────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct LoginOutput {
    pub session: Session,
    pub token: String,
}

pub struct LoginUseCase<A: IdentityResolver<Error = AuthServiceError>, C: Clock + Clone> {
    pub authenticator: A,
    pub clock: C,
    pub ttl: Duration,
    pub secret: String,
}

impl<A, C> LoginUseCase<A, C>
where
    A: IdentityResolver<Error = AuthServiceError>,
    C: Clock + Clone,
{
    /// Exchange an access code for a signed session.
    ///
    /// Unknown codes and failed lookups both surface as
    /// [`AuthServiceError::InvalidCode`]; the lookup cause is logged.
    pub async fn execute(&self, code: &str) -> Result<LoginOutput, AuthServiceError> {
        let mut store = SessionStore::new(self.clock.clone(), self.ttl);
        let session = match store.login(&self.authenticator, code).await {
            Ok(session) => session.clone(),
            Err(LoginError::InvalidCode) => {
                warn!("login rejected: unknown access code");
                return Err(AuthServiceError::InvalidCode);
            }
            Err(LoginError::Lookup(e)) => {
                error!(error = %e, "identity lookup failed during login");
                return Err(AuthServiceError::InvalidCode);
            }
        };

        let token = issue_session_token(&session, &self.secret).context("sign session token")?;

        info!(
            identity_id = %session.identity.id,
            role = %session.identity.role,
            "session started"
        );
        Ok(LoginOutput { session, token })
    }
}

// ── CheckSession ─────────────────────────────────────────────────────────────

pub struct CheckSessionUseCase<C: Clock + Clone> {
    pub clock: C,
    pub ttl: Duration,
    pub secret: String,
}

impl<C: Clock + Clone> CheckSessionUseCase<C> {
    /// The live session carried by `token`, or `InvalidSession` when it is
    /// missing, forged, or past its expiry.
    pub async fn execute(&self, token: Option<&str>) -> Result<Session, AuthServiceError> {
        let mut store = restore_store(token, &self.secret, self.clock.clone(), self.ttl);
        if !store.check_session() {
            return Err(AuthServiceError::InvalidSession);
        }
        store.into_session().ok_or(AuthServiceError::InvalidSession)
    }
}

// ── Logout ───────────────────────────────────────────────────────────────────

pub struct LogoutUseCase<C: Clock + Clone> {
    pub clock: C,
    pub ttl: Duration,
    pub secret: String,
}

impl<C: Clock + Clone> LogoutUseCase<C> {
    /// End the session carried by `token`. Idempotent: an absent or stale
    /// token is not an error. Returns who was logged out, if anyone.
    pub async fn execute(&self, token: Option<&str>) -> Option<Identity> {
        let mut store = restore_store(token, &self.secret, self.clock.clone(), self.ttl);
        let ending = store.check_session().then(|| store.current().cloned()).flatten();
        store.logout();
        if let Some(identity) = &ending {
            info!(identity_id = %identity.id, role = %identity.role, "session ended");
        }
        ending
    }
}
