use chrono::Utc;
use uuid::Uuid;

use hotelier_domain::pagination::PageRequest;
use hotelier_domain::status::TaskStatus;

use crate::domain::repository::{ProfileRepository, TaskRepository};
use crate::domain::types::{Task, TaskChanges};
use crate::error::HotelServiceError;

fn require_title(title: &str) -> Result<String, HotelServiceError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(HotelServiceError::invalid("title must not be empty"));
    }
    Ok(title.to_owned())
}

async fn require_assignee<P: ProfileRepository>(
    profiles: &P,
    assignee: Option<Uuid>,
) -> Result<(), HotelServiceError> {
    if let Some(id) = assignee {
        if profiles.find_by_id(id).await?.is_none() {
            return Err(HotelServiceError::ProfileNotFound);
        }
    }
    Ok(())
}

// ── ListTasks ────────────────────────────────────────────────────────────────

pub struct ListTasksUseCase<R: TaskRepository> {
    pub repo: R,
}

impl<R: TaskRepository> ListTasksUseCase<R> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<Task>, HotelServiceError> {
        self.repo.list(page).await
    }
}

// ── CreateTask ───────────────────────────────────────────────────────────────

pub struct CreateTaskInput {
    pub title: String,
    pub description: String,
    pub assigned_to: Option<Uuid>,
    pub status: Option<TaskStatus>,
}

pub struct CreateTaskUseCase<R: TaskRepository, P: ProfileRepository> {
    pub repo: R,
    pub profiles: P,
}

impl<R: TaskRepository, P: ProfileRepository> CreateTaskUseCase<R, P> {
    pub async fn execute(&self, input: CreateTaskInput) -> Result<Task, HotelServiceError> {
        let title = require_title(&input.title)?;
        require_assignee(&self.profiles, input.assigned_to).await?;

        let now = Utc::now();
        let task = Task {
            id: Uuid::now_v7(),
            title,
            description: input.description,
            status: input.status.unwrap_or(TaskStatus::Pending),
            assigned_to: input.assigned_to,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&task).await?;
        Ok(task)
    }
}

// ── UpdateTask ───────────────────────────────────────────────────────────────

pub struct UpdateTaskUseCase<R: TaskRepository, P: ProfileRepository> {
    pub repo: R,
    pub profiles: P,
}

impl<R: TaskRepository, P: ProfileRepository> UpdateTaskUseCase<R, P> {
    pub async fn execute(&self, id: Uuid, changes: TaskChanges) -> Result<Task, HotelServiceError> {
        let title = changes.title.as_deref().map(require_title).transpose()?;
        require_assignee(&self.profiles, changes.assigned_to.flatten()).await?;

        self.repo
            .update(id, &TaskChanges { title, ..changes })
            .await?
            .ok_or(HotelServiceError::TaskNotFound)
    }
}

// ── DeleteTask ───────────────────────────────────────────────────────────────

pub struct DeleteTaskUseCase<R: TaskRepository> {
    pub repo: R,
}

impl<R: TaskRepository> DeleteTaskUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), HotelServiceError> {
        if !self.repo.delete(id).await? {
            return Err(HotelServiceError::TaskNotFound);
        }
        Ok(())
    }
}
