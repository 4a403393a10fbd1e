//! Session token codec.
//!
//! The session is persisted client-side as an HS256 JWT in the
//! [`HOTELIER_SESSION`](crate::cookie::HOTELIER_SESSION) cookie. Decoding
//! verifies the signature only; whether the session is still live is decided
//! by [`SessionStore::check_session`](crate::session::SessionStore::check_session)
//! against its clock.

use chrono::DateTime;
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::Deserialize;
#[cfg(any(feature = "issue", test))]
use serde::Serialize;
use uuid::Uuid;

use hotelier_domain::role::Role;

use crate::identity::Identity;
use crate::session::Session;

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("malformed token")]
    Malformed,
}

/// JWT claims payload.
///
/// | Field  | JWT claim | Meaning                               |
/// |--------|-----------|---------------------------------------|
/// | `sub`  | `sub`     | identity id (UUID string)             |
/// | `name` | custom    | display name                          |
/// | `role` | custom    | snake_case [`Role`]                   |
/// | `exp`  | `exp`     | session expiry, seconds since epoch   |
///
/// [`Serialize`] requires the **`issue`** feature; only the auth service
/// (and test helpers) mint sessions.
#[derive(Debug, Deserialize)]
#[cfg_attr(any(feature = "issue", test), derive(Serialize))]
pub struct SessionClaims {
    pub sub: String,
    pub name: String,
    pub role: Role,
    pub exp: i64,
}

fn decode_jwt(token: &str, secret: &str) -> Result<SessionClaims, TokenError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = false;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::InvalidSignature
        | jsonwebtoken::errors::ErrorKind::InvalidEcdsaKey
        | jsonwebtoken::errors::ErrorKind::InvalidRsaKey(_) => TokenError::InvalidSignature,
        _ => TokenError::Malformed,
    })?;

    Ok(data.claims)
}

/// Decode a session cookie value back into a [`Session`].
pub fn decode_session_token(token: &str, secret: &str) -> Result<Session, TokenError> {
    let claims = decode_jwt(token, secret)?;
    let id = claims
        .sub
        .parse::<Uuid>()
        .map_err(|_| TokenError::Malformed)?;
    let expires_at = DateTime::from_timestamp(claims.exp, 0).ok_or(TokenError::Malformed)?;
    Ok(Session {
        identity: Identity {
            id,
            name: claims.name,
            role: claims.role,
        },
        expires_at,
    })
}

/// Sign `session` into a cookie value. Sub-second expiry precision is
/// truncated, so a restored session may end up to one second early.
#[cfg(any(feature = "issue", test))]
pub fn issue_session_token(
    session: &Session,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    use jsonwebtoken::{EncodingKey, Header, encode};

    let claims = SessionClaims {
        sub: session.identity.id.to_string(),
        name: session.identity.name.clone(),
        role: session.identity.role,
        exp: session.expires_at.timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}
