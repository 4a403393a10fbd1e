//! Session store.
//!
//! A [`SessionStore`] is an explicit, per-request session context: it is
//! restored from the session cookie, consulted by the route guard, and
//! written back (or cleared) by the handler that owns it. Nothing here is
//! process-global.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::Identity;
use crate::resolve::{IdentityResolver, Resolution};

/// Source of "now" for expiry decisions.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// An authenticated identity with an absolute expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub identity: Identity,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoginError<E> {
    /// Empty code, or no strategy recognised it.
    #[error("invalid access code")]
    InvalidCode,
    /// A strategy could not complete its lookup.
    #[error("identity lookup failed")]
    Lookup(#[source] E),
}

#[derive(Debug, Clone)]
pub struct SessionStore<C> {
    session: Option<Session>,
    clock: C,
    ttl: Duration,
}

impl<C: Clock> SessionStore<C> {
    pub fn new(clock: C, ttl: Duration) -> Self {
        Self::restore(None, clock, ttl)
    }

    /// Rehydrate from persisted state. A restored session is not trusted
    /// until [`check_session`](Self::check_session) has run.
    pub fn restore(session: Option<Session>, clock: C, ttl: Duration) -> Self {
        Self {
            session,
            clock,
            ttl,
        }
    }

    /// Resolve `code` and start a session expiring `ttl` from now.
    ///
    /// Any previous session is dropped first, so a failed attempt always
    /// leaves the store empty.
    pub async fn login<R>(
        &mut self,
        resolver: &R,
        code: &str,
    ) -> Result<&Session, LoginError<R::Error>>
    where
        R: IdentityResolver,
    {
        self.session = None;

        let code = code.trim();
        if code.is_empty() {
            return Err(LoginError::InvalidCode);
        }

        match resolver.resolve(code).await.map_err(LoginError::Lookup)? {
            Resolution::Found(identity) => {
                let expires_at = self.clock.now() + self.ttl;
                Ok(&*self.session.insert(Session {
                    identity,
                    expires_at,
                }))
            }
            Resolution::NotFound => Err(LoginError::InvalidCode),
        }
    }

    /// Forget the session. Idempotent.
    pub fn logout(&mut self) {
        self.session = None;
    }

    /// True while a session exists and has not reached its expiry. An
    /// expired session is cleared as a side effect.
    pub fn check_session(&mut self) -> bool {
        let now = self.clock.now();
        let live = self.session.as_ref().is_some_and(|s| s.is_live_at(now));
        if !live {
            self.session = None;
        }
        live
    }

    /// Identity of the stored session, without an expiry check.
    pub fn current(&self) -> Option<&Identity> {
        self.session.as_ref().map(|s| &s.identity)
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn into_session(self) -> Option<Session> {
        self.session
    }
}
