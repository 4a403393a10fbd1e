use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use hotelier_domain::pagination::PageRequest;

use crate::domain::repository::{CodeRegistry, EmployeeRepository};
use crate::domain::types::{Employee, EmployeeDetails};
use crate::error::HotelServiceError;
use crate::usecase::identity::{CodeSource, issue_code};

fn normalized(details: EmployeeDetails) -> EmployeeDetails {
    EmployeeDetails {
        first_name: details.first_name.trim().to_owned(),
        last_name: details.last_name.trim().to_owned(),
        telephone: details.telephone.trim().to_owned(),
        address: details.address.trim().to_owned(),
        email: details.email.trim().to_owned(),
        ccp: details.ccp.trim().to_owned(),
        department: details.department,
    }
}

// ── ListEmployees ────────────────────────────────────────────────────────────

pub struct ListEmployeesUseCase<R: EmployeeRepository> {
    pub repo: R,
}

impl<R: EmployeeRepository> ListEmployeesUseCase<R> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<Employee>, HotelServiceError> {
        self.repo.list(page).await
    }
}

// ── GetEmployee ──────────────────────────────────────────────────────────────

pub struct GetEmployeeUseCase<R: EmployeeRepository> {
    pub repo: R,
}

impl<R: EmployeeRepository> GetEmployeeUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<Employee, HotelServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(HotelServiceError::EmployeeNotFound)
    }
}

// ── CreateEmployee ───────────────────────────────────────────────────────────

pub struct CreateEmployeeUseCase<R, C, G>
where
    R: EmployeeRepository,
    C: CodeRegistry,
    G: CodeSource,
{
    pub repo: R,
    pub registry: C,
    pub codes: G,
}

impl<R, C, G> CreateEmployeeUseCase<R, C, G>
where
    R: EmployeeRepository,
    C: CodeRegistry,
    G: CodeSource,
{
    /// The new employee's access code is always generated.
    pub async fn execute(&self, details: EmployeeDetails) -> Result<Employee, HotelServiceError> {
        let details = normalized(details);
        details.validate()?;
        let code = issue_code(&self.registry, &self.codes).await?;

        let now = Utc::now();
        let employee = Employee {
            id: Uuid::now_v7(),
            details,
            code,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&employee).await?;
        info!(
            employee_id = %employee.id,
            department = %employee.details.department,
            "employee created"
        );
        Ok(employee)
    }
}

// ── UpdateEmployee ───────────────────────────────────────────────────────────

pub struct UpdateEmployeeUseCase<R: EmployeeRepository> {
    pub repo: R,
}

impl<R: EmployeeRepository> UpdateEmployeeUseCase<R> {
    pub async fn execute(
        &self,
        id: Uuid,
        details: EmployeeDetails,
    ) -> Result<Employee, HotelServiceError> {
        let details = normalized(details);
        details.validate()?;
        self.repo
            .update(id, &details)
            .await?
            .ok_or(HotelServiceError::EmployeeNotFound)
    }
}

// ── DeleteEmployee ───────────────────────────────────────────────────────────

pub struct DeleteEmployeeUseCase<R: EmployeeRepository> {
    pub repo: R,
}

impl<R: EmployeeRepository> DeleteEmployeeUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), HotelServiceError> {
        if !self.repo.delete(id).await? {
            return Err(HotelServiceError::EmployeeNotFound);
        }
        info!(employee_id = %id, "employee deleted");
        Ok(())
    }
}
