#![allow(async_fn_in_trait)]

use uuid::Uuid;

use hotelier_domain::pagination::PageRequest;
use hotelier_domain::status::ReservationStatus;

use crate::domain::types::{
    BookingOutcome, Chamber, DashboardCounts, Employee, EmployeeDetails, GuestContact,
    HistoryEntry, Profile, ProfileChanges, Reservation, Room, StatusChange, Stay, StockItem,
    StockItemDetails, Task, TaskChanges,
};
use crate::error::HotelServiceError;

/// Access codes live in two tables; uniqueness is checked across both.
pub trait CodeRegistry: Send + Sync {
    async fn code_in_use(&self, code: &str) -> Result<bool, HotelServiceError>;
}

pub trait ProfileRepository: Send + Sync {
    async fn list(&self, page: PageRequest) -> Result<Vec<Profile>, HotelServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, HotelServiceError>;
    async fn create(&self, profile: &Profile) -> Result<(), HotelServiceError>;
    /// Returns the updated row, or `None` when `id` does not exist.
    async fn update(
        &self,
        id: Uuid,
        changes: &ProfileChanges,
    ) -> Result<Option<Profile>, HotelServiceError>;
    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, HotelServiceError>;
}

pub trait EmployeeRepository: Send + Sync {
    async fn list(&self, page: PageRequest) -> Result<Vec<Employee>, HotelServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>, HotelServiceError>;
    async fn create(&self, employee: &Employee) -> Result<(), HotelServiceError>;
    async fn update(
        &self,
        id: Uuid,
        details: &EmployeeDetails,
    ) -> Result<Option<Employee>, HotelServiceError>;
    async fn delete(&self, id: Uuid) -> Result<bool, HotelServiceError>;
}

pub trait TaskRepository: Send + Sync {
    async fn list(&self, page: PageRequest) -> Result<Vec<Task>, HotelServiceError>;
    async fn create(&self, task: &Task) -> Result<(), HotelServiceError>;
    async fn update(
        &self,
        id: Uuid,
        changes: &TaskChanges,
    ) -> Result<Option<Task>, HotelServiceError>;
    async fn delete(&self, id: Uuid) -> Result<bool, HotelServiceError>;
}

pub trait StockRepository: Send + Sync {
    async fn list(&self, page: PageRequest) -> Result<Vec<StockItem>, HotelServiceError>;
    async fn create(&self, item: &StockItem) -> Result<(), HotelServiceError>;
    /// Replaces the details and stamps `last_restocked`.
    async fn update(
        &self,
        id: Uuid,
        details: &StockItemDetails,
    ) -> Result<Option<StockItem>, HotelServiceError>;
    async fn delete(&self, id: Uuid) -> Result<bool, HotelServiceError>;
}

pub trait RoomRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Room>, HotelServiceError>;
    async fn exists(&self, room_type: &str) -> Result<bool, HotelServiceError>;
    async fn create(&self, room: &Room) -> Result<(), HotelServiceError>;
    async fn add_chamber(&self, chamber: &Chamber) -> Result<(), HotelServiceError>;
}

pub trait ReservationRepository: Send + Sync {
    /// Insert a public booking and assign it a free chamber of the room type,
    /// all in one transaction. Without a free chamber the reservation is kept
    /// as `not_assigned`.
    async fn book(
        &self,
        id: Uuid,
        guest: &GuestContact,
        stay: &Stay,
    ) -> Result<BookingOutcome, HotelServiceError>;

    async fn create(&self, reservation: &Reservation) -> Result<(), HotelServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Reservation>, HotelServiceError>;
    async fn list_all(&self, page: PageRequest) -> Result<Vec<Reservation>, HotelServiceError>;
    async fn list_for_user(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Reservation>, HotelServiceError>;

    /// Rewrites the stay of a reservation owned by `user_id` while it is
    /// still pending. `None` when no such reservation exists.
    async fn update_stay(
        &self,
        id: Uuid,
        user_id: Uuid,
        stay: &Stay,
    ) -> Result<Option<Reservation>, HotelServiceError>;

    async fn delete_for_user(&self, id: Uuid, user_id: Uuid) -> Result<bool, HotelServiceError>;

    /// Move a reservation to `status`. When the status actually changes a
    /// history row is written, and a cancellation frees the held chamber,
    /// in the same transaction.
    async fn change_status(
        &self,
        id: Uuid,
        status: ReservationStatus,
        changed_by: Uuid,
    ) -> Result<Option<StatusChange>, HotelServiceError>;

    async fn list_history(&self, page: PageRequest)
    -> Result<Vec<HistoryEntry>, HotelServiceError>;
}

pub trait DashboardRepository: Send + Sync {
    async fn counts(&self) -> Result<DashboardCounts, HotelServiceError>;
}
