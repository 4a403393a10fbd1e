//! Session gate shared across Hotelier services.
//!
//! Access-code resolution strategies, the session store, the role-based
//! route guard, session-token codec, and session cookie builders.

pub mod cookie;
pub mod guard;
pub mod identity;
pub mod resolve;
pub mod session;
pub mod token;
