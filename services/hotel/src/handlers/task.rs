use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use hotelier_domain::pagination::PageRequest;
use hotelier_domain::status::TaskStatus;

use crate::domain::types::{Task, TaskChanges};
use crate::error::HotelServiceError;
use crate::state::AppState;
use crate::usecase::task::{
    CreateTaskInput, CreateTaskUseCase, DeleteTaskUseCase, ListTasksUseCase, UpdateTaskUseCase,
};

#[derive(Serialize)]
pub struct TaskResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub assigned_to: Option<Uuid>,
    #[serde(serialize_with = "hotelier_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "hotelier_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            status: task.status,
            assigned_to: task.assigned_to,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

/// Distinguishes an absent field (`None`) from an explicit `null`
/// (`Some(None)`).
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

// ── GET /admin/tasks ─────────────────────────────────────────────────────────

pub async fn list_tasks(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<TaskResponse>>, HotelServiceError> {
    let usecase = ListTasksUseCase {
        repo: state.task_repo(),
    };
    let tasks = usecase.execute(page).await?;
    Ok(Json(tasks.into_iter().map(Into::into).collect()))
}

// ── POST /admin/tasks ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub assigned_to: Option<Uuid>,
    pub status: Option<TaskStatus>,
}

pub async fn create_task(
    State(state): State<AppState>,
    Json(body): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskResponse>), HotelServiceError> {
    let usecase = CreateTaskUseCase {
        repo: state.task_repo(),
        profiles: state.profile_repo(),
    };
    let task = usecase
        .execute(CreateTaskInput {
            title: body.title,
            description: body.description,
            assigned_to: body.assigned_to,
            status: body.status,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(task.into())))
}

// ── PATCH /admin/tasks/{id} ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    #[serde(default, deserialize_with = "present")]
    pub assigned_to: Option<Option<Uuid>>,
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateTaskRequest>,
) -> Result<Json<TaskResponse>, HotelServiceError> {
    let usecase = UpdateTaskUseCase {
        repo: state.task_repo(),
        profiles: state.profile_repo(),
    };
    let task = usecase
        .execute(
            id,
            TaskChanges {
                title: body.title,
                description: body.description,
                status: body.status,
                assigned_to: body.assigned_to,
            },
        )
        .await?;
    Ok(Json(task.into()))
}

// ── DELETE /admin/tasks/{id} ─────────────────────────────────────────────────

pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, HotelServiceError> {
    let usecase = DeleteTaskUseCase {
        repo: state.task_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
