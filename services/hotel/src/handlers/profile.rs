use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hotelier_domain::pagination::PageRequest;
use hotelier_domain::role::Role;

use crate::domain::types::{Profile, ProfileChanges};
use crate::error::HotelServiceError;
use crate::state::AppState;
use crate::usecase::identity::{
    CreateProfileInput, CreateProfileUseCase, DeleteProfileUseCase, ListProfilesUseCase,
    UpdateProfileUseCase,
};

#[derive(Serialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
    pub code: String,
    #[serde(serialize_with = "hotelier_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id,
            name: profile.name,
            role: profile.role,
            code: profile.code,
            created_at: profile.created_at,
        }
    }
}

// ── GET /admin/users ─────────────────────────────────────────────────────────

pub async fn list_profiles(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<ProfileResponse>>, HotelServiceError> {
    let usecase = ListProfilesUseCase {
        repo: state.profile_repo(),
    };
    let profiles = usecase.execute(page).await?;
    Ok(Json(profiles.into_iter().map(Into::into).collect()))
}

// ── POST /admin/users ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateProfileRequest {
    pub name: String,
    pub role: Role,
    pub code: Option<String>,
}

pub async fn create_profile(
    State(state): State<AppState>,
    Json(body): Json<CreateProfileRequest>,
) -> Result<(StatusCode, Json<ProfileResponse>), HotelServiceError> {
    let usecase = CreateProfileUseCase {
        repo: state.profile_repo(),
        registry: state.code_registry(),
        codes: state.codes(),
    };
    let profile = usecase
        .execute(CreateProfileInput {
            name: body.name,
            role: body.role,
            code: body.code,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(profile.into())))
}

// ── PATCH /admin/users/{id} ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub role: Option<Role>,
    pub code: Option<String>,
}

pub async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, HotelServiceError> {
    let usecase = UpdateProfileUseCase {
        repo: state.profile_repo(),
        registry: state.code_registry(),
    };
    let profile = usecase
        .execute(
            id,
            ProfileChanges {
                name: body.name,
                role: body.role,
                code: body.code,
            },
        )
        .await?;
    Ok(Json(profile.into()))
}

// ── DELETE /admin/users/{id} ─────────────────────────────────────────────────

pub async fn delete_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, HotelServiceError> {
    let usecase = DeleteProfileUseCase {
        repo: state.profile_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
