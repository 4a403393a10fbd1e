use axum::{
    Router, middleware,
    routing::{get, patch, post, put},
};

use hotelier_auth_types::session::SystemClock;
use hotelier_core::health::healthz;
use hotelier_core::middleware::with_observability;

use crate::gate::session_gate;
use crate::handlers::{
    booking::create_booking,
    dashboard::get_dashboard,
    employee::{create_employee, delete_employee, get_employee, list_employees, update_employee},
    health::readyz,
    profile::{create_profile, delete_profile, list_profiles, update_profile},
    reservation::{
        change_reservation_status, create_own_reservation, delete_own_reservation,
        list_own_reservations, list_reservation_history, list_reservations,
        update_own_reservation,
    },
    room::{add_chamber, create_room, list_rooms},
    stock::{create_item, delete_item, list_items, update_item},
    task::{create_task, delete_task, list_tasks, update_task},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let gate = state.gate.clone();
    let router = Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Public
        .route("/rooms", get(list_rooms))
        .route("/bookings", post(create_booking))
        // Admin
        .route("/admin/dashboard", get(get_dashboard))
        .route("/admin/users", get(list_profiles).post(create_profile))
        .route("/admin/users/{id}", patch(update_profile).delete(delete_profile))
        .route("/admin/employees", get(list_employees).post(create_employee))
        .route(
            "/admin/employees/{id}",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .route("/admin/tasks", get(list_tasks).post(create_task))
        .route("/admin/tasks/{id}", patch(update_task).delete(delete_task))
        .route("/admin/rooms", post(create_room))
        .route("/admin/rooms/{room_type}/chambers", post(add_chamber))
        // Stock manager
        .route("/stock/items", get(list_items).post(create_item))
        .route("/stock/items/{id}", put(update_item).delete(delete_item))
        // Reservation user
        .route(
            "/user/reservations",
            get(list_own_reservations).post(create_own_reservation),
        )
        .route(
            "/user/reservations/{id}",
            patch(update_own_reservation).delete(delete_own_reservation),
        )
        // Reservation employee
        .route("/employee/rooms", get(list_rooms))
        .route("/employee/reservations", get(list_reservations))
        .route(
            "/employee/reservations/history",
            get(list_reservation_history),
        )
        .route(
            "/employee/reservations/{id}/status",
            patch(change_reservation_status),
        )
        .layer(middleware::from_fn_with_state(gate, session_gate::<SystemClock>))
        .with_state(state);
    with_observability(router)
}
