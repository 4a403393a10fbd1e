pub mod resolver;
pub mod session;
