use anyhow::Context as _;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use hotelier_auth_schema::{employees, profiles};
use hotelier_domain::role::Role;

use crate::domain::repository::{EmployeeRepository, ProfileRepository};
use crate::domain::types::{EmployeeRecord, ProfileRecord};
use crate::error::AuthServiceError;

// ── Profile repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProfileRepository {
    pub db: DatabaseConnection,
}

impl ProfileRepository for DbProfileRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<ProfileRecord>, AuthServiceError> {
        let model = profiles::Entity::find()
            .filter(profiles::Column::Code.eq(code))
            .one(&self.db)
            .await
            .context("find profile by code")?;
        model.map(profile_from_model).transpose()
    }
}

fn profile_from_model(model: profiles::Model) -> Result<ProfileRecord, AuthServiceError> {
    let role = model
        .role
        .parse::<Role>()
        .with_context(|| format!("profile {} carries an unknown role", model.id))?;
    Ok(ProfileRecord {
        id: model.id,
        name: model.name,
        role,
    })
}

// ── Employee repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbEmployeeRepository {
    pub db: DatabaseConnection,
}

impl EmployeeRepository for DbEmployeeRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<EmployeeRecord>, AuthServiceError> {
        let model = employees::Entity::find()
            .filter(employees::Column::Code.eq(code))
            .one(&self.db)
            .await
            .context("find employee by code")?;
        Ok(model.map(|m| EmployeeRecord {
            id: m.id,
            first_name: m.first_name,
            last_name: m.last_name,
        }))
    }
}
