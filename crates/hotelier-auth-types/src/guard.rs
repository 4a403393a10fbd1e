//! Role-based route guard.

use hotelier_domain::role::Role;

use crate::session::{Clock, SessionStore};

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

/// A path prefix and the roles allowed under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedRoute {
    prefix: String,
    allowed: Vec<Role>,
}

impl ProtectedRoute {
    pub fn new(prefix: impl Into<String>, allowed: impl IntoIterator<Item = Role>) -> Self {
        let prefix = prefix.into();
        let prefix = match prefix.trim_end_matches('/') {
            "" => "/".to_owned(),
            trimmed => trimmed.to_owned(),
        };
        Self {
            prefix,
            allowed: allowed.into_iter().collect(),
        }
    }

    /// Segment-aware prefix match: `/admin` covers `/admin` and `/admin/x`,
    /// not `/administrator`.
    pub fn matches(&self, path: &str) -> bool {
        if self.prefix == "/" {
            return true;
        }
        match path.strip_prefix(self.prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }

    pub fn allows(&self, role: Role) -> bool {
        self.allowed.contains(&role)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
    RedirectToHome,
}

impl GuardDecision {
    pub fn location(self) -> Option<&'static str> {
        match self {
            Self::Allow => None,
            Self::RedirectToLogin => Some(LOGIN_PATH),
            Self::RedirectToHome => Some(HOME_PATH),
        }
    }
}

/// Static route table, built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    routes: Vec<ProtectedRoute>,
}

impl RouteGuard {
    pub fn new(routes: Vec<ProtectedRoute>) -> Self {
        Self { routes }
    }

    /// First route whose prefix covers `path`.
    pub fn route_for(&self, path: &str) -> Option<&ProtectedRoute> {
        self.routes.iter().find(|route| route.matches(path))
    }

    /// Decide a navigation to `path`.
    ///
    /// Unprotected paths are allowed without touching the store. Protected
    /// paths always run [`SessionStore::check_session`], which clears an
    /// expired session before the role is looked at.
    pub fn decide<C: Clock>(&self, path: &str, store: &mut SessionStore<C>) -> GuardDecision {
        let Some(route) = self.route_for(path) else {
            return GuardDecision::Allow;
        };
        if !store.check_session() {
            return GuardDecision::RedirectToLogin;
        }
        match store.current() {
            Some(identity) if route.allows(identity.role) => GuardDecision::Allow,
            Some(_) => GuardDecision::RedirectToHome,
            None => GuardDecision::RedirectToLogin,
        }
    }
}
