pub mod dashboard;
pub mod employee;
pub mod identity;
pub mod reservation;
pub mod room;
pub mod stock;
pub mod task;
