use chrono::Utc;
use rand::RngExt;
use tracing::{debug, info};
use uuid::Uuid;

use hotelier_domain::pagination::PageRequest;
use hotelier_domain::role::Role;

use crate::domain::repository::{CodeRegistry, ProfileRepository};
use crate::domain::types::{ACCESS_CODE_LEN, Profile, ProfileChanges, is_access_code};
use crate::error::HotelServiceError;

/// Generated codes that collide are redrawn at most this many times.
pub const MAX_CODE_ATTEMPTS: usize = 10;

/// Where candidate access codes come from.
pub trait CodeSource: Send + Sync {
    fn next_code(&self) -> String;
}

/// Uniform 7-digit codes, leading zeros included.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodes;

impl CodeSource for RandomCodes {
    fn next_code(&self) -> String {
        let mut rng = rand::rng();
        (0..ACCESS_CODE_LEN)
            .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
            .collect()
    }
}

/// Draw codes until one is free in both identity tables.
pub async fn issue_code<R, G>(registry: &R, codes: &G) -> Result<String, HotelServiceError>
where
    R: CodeRegistry,
    G: CodeSource,
{
    for attempt in 1..=MAX_CODE_ATTEMPTS {
        let code = codes.next_code();
        if !registry.code_in_use(&code).await? {
            return Ok(code);
        }
        debug!(attempt, "generated access code already taken");
    }
    Err(anyhow::anyhow!("no free access code after {MAX_CODE_ATTEMPTS} attempts").into())
}

/// Accept a caller-chosen code if it is well formed and unused.
pub async fn claim_code<R: CodeRegistry>(
    registry: &R,
    code: &str,
) -> Result<String, HotelServiceError> {
    let code = code.trim();
    if !is_access_code(code) {
        return Err(HotelServiceError::invalid(format!(
            "code must be {ACCESS_CODE_LEN} digits"
        )));
    }
    if registry.code_in_use(code).await? {
        return Err(HotelServiceError::CodeTaken);
    }
    Ok(code.to_owned())
}

fn require_profile_role(role: Role) -> Result<Role, HotelServiceError> {
    if role.is_profile_role() {
        Ok(role)
    } else {
        Err(HotelServiceError::InvalidRole)
    }
}

fn require_name(name: &str) -> Result<String, HotelServiceError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(HotelServiceError::invalid("name must not be empty"));
    }
    Ok(name.to_owned())
}

// ── ListProfiles ─────────────────────────────────────────────────────────────

pub struct ListProfilesUseCase<R: ProfileRepository> {
    pub repo: R,
}

impl<R: ProfileRepository> ListProfilesUseCase<R> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<Profile>, HotelServiceError> {
        self.repo.list(page).await
    }
}

// ── CreateProfile ────────────────────────────────────────────────────────────

pub struct CreateProfileInput {
    pub name: String,
    pub role: Role,
    /// Generated when absent.
    pub code: Option<String>,
}

pub struct CreateProfileUseCase<R, C, G>
where
    R: ProfileRepository,
    C: CodeRegistry,
    G: CodeSource,
{
    pub repo: R,
    pub registry: C,
    pub codes: G,
}

impl<R, C, G> CreateProfileUseCase<R, C, G>
where
    R: ProfileRepository,
    C: CodeRegistry,
    G: CodeSource,
{
    pub async fn execute(&self, input: CreateProfileInput) -> Result<Profile, HotelServiceError> {
        let name = require_name(&input.name)?;
        let role = require_profile_role(input.role)?;
        let code = match input.code.as_deref() {
            Some(code) => claim_code(&self.registry, code).await?,
            None => issue_code(&self.registry, &self.codes).await?,
        };

        let profile = Profile {
            id: Uuid::now_v7(),
            name,
            role,
            code,
            created_at: Utc::now(),
        };
        self.repo.create(&profile).await?;
        info!(profile_id = %profile.id, role = %profile.role, "profile created");
        Ok(profile)
    }
}

// ── UpdateProfile ────────────────────────────────────────────────────────────

pub struct UpdateProfileUseCase<R: ProfileRepository, C: CodeRegistry> {
    pub repo: R,
    pub registry: C,
}

impl<R: ProfileRepository, C: CodeRegistry> UpdateProfileUseCase<R, C> {
    pub async fn execute(
        &self,
        id: Uuid,
        changes: ProfileChanges,
    ) -> Result<Profile, HotelServiceError> {
        if changes.name.is_none() && changes.role.is_none() && changes.code.is_none() {
            return Err(HotelServiceError::invalid("nothing to update"));
        }
        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(HotelServiceError::ProfileNotFound)?;

        let name = changes.name.as_deref().map(require_name).transpose()?;
        let role = changes.role.map(require_profile_role).transpose()?;
        let code = match changes.code.as_deref().map(str::trim) {
            // Re-submitting the current code is not a conflict with itself.
            Some(code) if code == current.code => None,
            Some(code) => Some(claim_code(&self.registry, code).await?),
            None => None,
        };

        self.repo
            .update(id, &ProfileChanges { name, role, code })
            .await?
            .ok_or(HotelServiceError::ProfileNotFound)
    }
}

// ── DeleteProfile ────────────────────────────────────────────────────────────

pub struct DeleteProfileUseCase<R: ProfileRepository> {
    pub repo: R,
}

impl<R: ProfileRepository> DeleteProfileUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), HotelServiceError> {
        if !self.repo.delete(id).await? {
            return Err(HotelServiceError::ProfileNotFound);
        }
        info!(profile_id = %id, "profile deleted");
        Ok(())
    }
}
