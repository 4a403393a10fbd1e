use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hotelier_domain::pagination::PageRequest;

use crate::domain::types::{Department, Employee, EmployeeDetails};
use crate::error::HotelServiceError;
use crate::state::AppState;
use crate::usecase::employee::{
    CreateEmployeeUseCase, DeleteEmployeeUseCase, GetEmployeeUseCase, ListEmployeesUseCase,
    UpdateEmployeeUseCase,
};

#[derive(Serialize)]
pub struct EmployeeResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub telephone: String,
    pub address: String,
    pub email: String,
    pub ccp: String,
    pub department: Department,
    pub code: String,
    #[serde(serialize_with = "hotelier_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "hotelier_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        let details = employee.details;
        Self {
            id: employee.id,
            first_name: details.first_name,
            last_name: details.last_name,
            telephone: details.telephone,
            address: details.address,
            email: details.email,
            ccp: details.ccp,
            department: details.department,
            code: employee.code,
            created_at: employee.created_at,
            updated_at: employee.updated_at,
        }
    }
}

/// Body of both create and update: the full editable record.
#[derive(Deserialize)]
pub struct EmployeeRequest {
    pub first_name: String,
    pub last_name: String,
    pub telephone: String,
    pub address: String,
    pub email: String,
    pub ccp: String,
    pub department: Department,
}

impl From<EmployeeRequest> for EmployeeDetails {
    fn from(body: EmployeeRequest) -> Self {
        Self {
            first_name: body.first_name,
            last_name: body.last_name,
            telephone: body.telephone,
            address: body.address,
            email: body.email,
            ccp: body.ccp,
            department: body.department,
        }
    }
}

// ── GET /admin/employees ─────────────────────────────────────────────────────

pub async fn list_employees(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<EmployeeResponse>>, HotelServiceError> {
    let usecase = ListEmployeesUseCase {
        repo: state.employee_repo(),
    };
    let employees = usecase.execute(page).await?;
    Ok(Json(employees.into_iter().map(Into::into).collect()))
}

// ── GET /admin/employees/{id} ────────────────────────────────────────────────

pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EmployeeResponse>, HotelServiceError> {
    let usecase = GetEmployeeUseCase {
        repo: state.employee_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── POST /admin/employees ────────────────────────────────────────────────────

pub async fn create_employee(
    State(state): State<AppState>,
    Json(body): Json<EmployeeRequest>,
) -> Result<(StatusCode, Json<EmployeeResponse>), HotelServiceError> {
    let usecase = CreateEmployeeUseCase {
        repo: state.employee_repo(),
        registry: state.code_registry(),
        codes: state.codes(),
    };
    let employee = usecase.execute(body.into()).await?;
    Ok((StatusCode::CREATED, Json(employee.into())))
}

// ── PUT /admin/employees/{id} ────────────────────────────────────────────────

pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<EmployeeRequest>,
) -> Result<Json<EmployeeResponse>, HotelServiceError> {
    let usecase = UpdateEmployeeUseCase {
        repo: state.employee_repo(),
    };
    Ok(Json(usecase.execute(id, body.into()).await?.into()))
}

// ── DELETE /admin/employees/{id} ─────────────────────────────────────────────

pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, HotelServiceError> {
    let usecase = DeleteEmployeeUseCase {
        repo: state.employee_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
