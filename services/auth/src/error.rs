use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use hotelier_core::error::error_response;

/// Auth service error variants.
#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    #[error("invalid access code")]
    InvalidCode,
    #[error("session expired")]
    InvalidSession,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl AuthServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidCode => "INVALID_CODE",
            Self::InvalidSession => "INVALID_SESSION",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for AuthServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidCode | Self::InvalidSession => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let internal = match &self {
            Self::Internal(e) => Some(e as &dyn std::fmt::Display),
            _ => None,
        };
        error_response(status, self.kind(), self.to_string(), internal)
    }
}
