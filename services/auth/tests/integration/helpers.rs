use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::Duration;
use uuid::Uuid;

use hotelier_auth::domain::repository::{EmployeeRepository, ProfileRepository};
use hotelier_auth::domain::types::{EmployeeRecord, ProfileRecord};
use hotelier_auth::error::AuthServiceError;
use hotelier_domain::role::Role;

// ── MockProfileRepo ──────────────────────────────────────────────────────────

pub struct MockProfileRepo {
    pub rows: Vec<(String, ProfileRecord)>,
    pub fail: bool,
    pub lookups: AtomicUsize,
}

impl MockProfileRepo {
    pub fn new(rows: Vec<(&str, ProfileRecord)>) -> Self {
        Self {
            rows: rows.into_iter().map(|(c, p)| (c.to_owned(), p)).collect(),
            fail: false,
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::empty()
        }
    }
}

impl ProfileRepository for MockProfileRepo {
    async fn find_by_code(&self, code: &str) -> Result<Option<ProfileRecord>, AuthServiceError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(anyhow::anyhow!("profiles unreachable").into());
        }
        Ok(self
            .rows
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, p)| p.clone()))
    }
}

// ── MockEmployeeRepo ─────────────────────────────────────────────────────────

pub struct MockEmployeeRepo {
    pub rows: Vec<(String, EmployeeRecord)>,
    pub lookups: AtomicUsize,
}

impl MockEmployeeRepo {
    pub fn new(rows: Vec<(&str, EmployeeRecord)>) -> Self {
        Self {
            rows: rows.into_iter().map(|(c, e)| (c.to_owned(), e)).collect(),
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }
}

impl EmployeeRepository for MockEmployeeRepo {
    async fn find_by_code(&self, code: &str) -> Result<Option<EmployeeRecord>, AuthServiceError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .rows
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, e)| e.clone()))
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub use hotelier_testing::session::TEST_SESSION_SECRET as TEST_SECRET;

pub const ADMIN_CODE: &str = "9999999";

pub fn ttl() -> Duration {
    Duration::hours(1)
}

pub fn seeded_admin() -> ProfileRecord {
    ProfileRecord {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap(),
        name: "Admin".to_owned(),
        role: Role::Admin,
    }
}

pub fn profile(name: &str, role: Role) -> ProfileRecord {
    ProfileRecord {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        role,
    }
}

pub fn employee(first_name: &str, last_name: &str) -> EmployeeRecord {
    EmployeeRecord {
        id: Uuid::new_v4(),
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
    }
}
