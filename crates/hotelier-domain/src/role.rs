//! Staff and guest roles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role attached to an authenticated identity.
///
/// Wire format: snake_case string, identical to the `profiles.role` column.
/// `Employee` is never stored on a profile row; it is assigned when a code
/// resolves against the `employees` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    StockManager,
    User,
    Employee,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::StockManager, Role::User, Role::Employee];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::StockManager => "stock_manager",
            Self::User => "user",
            Self::Employee => "employee",
        }
    }

    /// Landing page for this role after a successful login.
    pub fn home_path(self) -> &'static str {
        match self {
            Self::Admin => "/admin",
            Self::StockManager => "/stock",
            Self::User => "/user",
            Self::Employee => "/employee",
        }
    }

    /// Whether a `profiles` row may carry this role.
    pub fn is_profile_role(self) -> bool {
        !matches!(self, Self::Employee)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_owned()))
    }
}
