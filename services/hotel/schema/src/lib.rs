//! sea-orm entities for every table the hotel service owns.

pub mod employees;
pub mod profiles;
pub mod reservation_history;
pub mod reservations;
pub mod room_chambers;
pub mod rooms;
pub mod stock_items;
pub mod tasks;
