use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hotelier_auth_types::cookie::{HOTELIER_SESSION, clear_session_cookie, set_session_cookie};
use hotelier_auth_types::session::Session;
use hotelier_domain::role::Role;

use crate::error::AuthServiceError;
use crate::state::AppState;
use crate::usecase::session::{CheckSessionUseCase, LoginUseCase, LogoutUseCase};

#[derive(Serialize)]
pub struct SessionResponse {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
    /// Dashboard to navigate to for this role.
    pub home: &'static str,
    #[serde(serialize_with = "hotelier_core::serde::to_rfc3339_ms")]
    pub expires_at: chrono::DateTime<chrono::Utc>,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            id: session.identity.id,
            home: session.identity.role.home_path(),
            name: session.identity.name,
            role: session.identity.role,
            expires_at: session.expires_at,
        }
    }
}

fn session_token(jar: &CookieJar) -> Option<String> {
    jar.get(HOTELIER_SESSION)
        .map(|c| c.value().to_owned())
        .filter(|v| !v.is_empty())
}

// ── POST /auth/session ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub code: String,
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AuthServiceError> {
    // A body without a readable code fails like a blank one.
    let code = body.map(|Json(b)| b.code).unwrap_or_default();
    let usecase = LoginUseCase {
        authenticator: state.authenticator(),
        clock: state.clock(),
        ttl: state.session_ttl,
        secret: state.session_secret.clone(),
    };
    let out = usecase.execute(&code).await?;

    let jar = set_session_cookie(
        jar,
        out.token,
        state.cookie_domain.clone(),
        state.session_ttl.num_seconds(),
    );
    Ok((StatusCode::CREATED, jar, Json(SessionResponse::from(out.session))))
}

// ── GET /auth/session ────────────────────────────────────────────────────────

pub async fn check_session(State(state): State<AppState>, jar: CookieJar) -> Response {
    let usecase = CheckSessionUseCase {
        clock: state.clock(),
        ttl: state.session_ttl,
        secret: state.session_secret.clone(),
    };
    let token = session_token(&jar);
    match usecase.execute(token.as_deref()).await {
        Ok(session) => (StatusCode::OK, Json(SessionResponse::from(session))).into_response(),
        // A stale cookie is cleared so the client stops presenting it.
        Err(e) => (clear_session_cookie(jar, state.cookie_domain.clone()), e).into_response(),
    }
}

// ── DELETE /auth/session ─────────────────────────────────────────────────────

pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let usecase = LogoutUseCase {
        clock: state.clock(),
        ttl: state.session_ttl,
        secret: state.session_secret.clone(),
    };
    usecase.execute(session_token(&jar).as_deref()).await;
    let jar = clear_session_cookie(jar, state.cookie_domain.clone());
    (StatusCode::NO_CONTENT, jar)
}
