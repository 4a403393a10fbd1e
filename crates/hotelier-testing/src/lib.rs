//! Test utilities for Hotelier services.
//!
//! Session cookie minting, a hand-driven clock, and response body helpers.
//! Import from dev-dependencies only, never in production code.

pub mod body;
pub mod clock;
pub mod session;
