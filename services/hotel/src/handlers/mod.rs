pub mod booking;
pub mod dashboard;
pub mod employee;
pub mod health;
pub mod profile;
pub mod reservation;
pub mod room;
pub mod stock;
pub mod task;
