#![allow(async_fn_in_trait)]

use crate::domain::types::{EmployeeRecord, ProfileRecord};
use crate::error::AuthServiceError;

/// Lookup of `profiles` rows by access code.
pub trait ProfileRepository: Send + Sync {
    async fn find_by_code(&self, code: &str) -> Result<Option<ProfileRecord>, AuthServiceError>;
}

/// Lookup of `employees` rows by access code.
pub trait EmployeeRepository: Send + Sync {
    async fn find_by_code(&self, code: &str) -> Result<Option<EmployeeRecord>, AuthServiceError>;
}
