//! Read-only views of the identity tables the auth service logs in against.
//!
//! The hotel service owns these tables and their migrations; the auth
//! service only maps the columns a login needs.

pub mod employees;
pub mod profiles;
