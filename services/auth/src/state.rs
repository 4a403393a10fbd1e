use chrono::Duration;
use sea_orm::DatabaseConnection;

use hotelier_auth_types::session::SystemClock;

use crate::infra::db::{DbEmployeeRepository, DbProfileRepository};
use crate::usecase::resolver::{AccessCodeAuthenticator, access_code_authenticator};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub session_secret: String,
    pub cookie_domain: String,
    pub session_ttl: Duration,
}

impl AppState {
    pub fn profile_repo(&self) -> DbProfileRepository {
        DbProfileRepository {
            db: self.db.clone(),
        }
    }

    pub fn employee_repo(&self) -> DbEmployeeRepository {
        DbEmployeeRepository {
            db: self.db.clone(),
        }
    }

    pub fn authenticator(&self) -> AccessCodeAuthenticator<DbProfileRepository, DbEmployeeRepository> {
        access_code_authenticator(self.profile_repo(), self.employee_repo())
    }

    pub fn clock(&self) -> SystemClock {
        SystemClock
    }
}
