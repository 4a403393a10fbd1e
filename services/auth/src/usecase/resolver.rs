use hotelier_auth_types::identity::Identity;
use hotelier_auth_types::resolve::{FirstMatch, IdentityResolver, Resolution};
use hotelier_domain::role::Role;

use crate::domain::repository::{EmployeeRepository, ProfileRepository};
use crate::error::AuthServiceError;

/// Resolves codes against `profiles`, keeping the stored role.
pub struct ProfileResolver<P: ProfileRepository> {
    pub profiles: P,
}

impl<P: ProfileRepository> IdentityResolver for ProfileResolver<P> {
    type Error = AuthServiceError;

    async fn resolve(&self, code: &str) -> Result<Resolution, Self::Error> {
        Ok(match self.profiles.find_by_code(code).await? {
            Some(profile) => Resolution::Found(Identity {
                id: profile.id,
                name: profile.name,
                role: profile.role,
            }),
            None => Resolution::NotFound,
        })
    }
}

/// Resolves codes against `employees`; the role is always [`Role::Employee`].
pub struct EmployeeResolver<E: EmployeeRepository> {
    pub employees: E,
}

impl<E: EmployeeRepository> IdentityResolver for EmployeeResolver<E> {
    type Error = AuthServiceError;

    async fn resolve(&self, code: &str) -> Result<Resolution, Self::Error> {
        Ok(match self.employees.find_by_code(code).await? {
            Some(employee) => Resolution::Found(Identity {
                id: employee.id,
                name: employee.display_name(),
                role: Role::Employee,
            }),
            None => Resolution::NotFound,
        })
    }
}

/// Profiles first, then employees.
pub type AccessCodeAuthenticator<P, E> = FirstMatch<ProfileResolver<P>, EmployeeResolver<E>>;

pub fn access_code_authenticator<P, E>(profiles: P, employees: E) -> AccessCodeAuthenticator<P, E>
where
    P: ProfileRepository,
    E: EmployeeRepository,
{
    FirstMatch::new(ProfileResolver { profiles }, EmployeeResolver { employees })
}
