//! Authenticated identity and its request extractor.

use axum::extract::FromRequestParts;
use http::StatusCode;
use http::request::Parts;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hotelier_domain::role::Role;

/// Who is behind a session: a `profiles` row with its stored role, or an
/// `employees` row with the role forced to [`Role::Employee`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
}

/// Reads the identity the session gate stored in request extensions.
///
/// Returns 401 when the request did not pass through the gate with a live
/// session (public routes, or a handler mounted outside the gated router).
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    // axum-core 0.5 declares this as `fn -> impl Future + Send`; extract
    // synchronously and hand back a 'static future.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let identity = parts.extensions.get::<Identity>().cloned();
        async move { identity.ok_or(StatusCode::UNAUTHORIZED) }
    }
}
