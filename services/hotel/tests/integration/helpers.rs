use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use hotelier_domain::pagination::PageRequest;
use hotelier_domain::role::Role;
use hotelier_domain::status::{ChamberStatus, ReservationStatus, TaskStatus};
use hotelier_hotel::domain::repository::{
    CodeRegistry, DashboardRepository, EmployeeRepository, ProfileRepository,
    ReservationRepository, RoomRepository, StockRepository, TaskRepository,
};
use hotelier_hotel::domain::types::{
    BookingOutcome, Chamber, DashboardCounts, Department, Employee, EmployeeDetails,
    GuestContact, HistoryEntry, LOW_STOCK_THRESHOLD, Profile, ProfileChanges, Reservation, Room,
    RoomDetails, StatusChange, Stay, StayEdit, StockItem, StockItemDetails, Task, TaskChanges,
    TaskCounts,
};
use hotelier_hotel::error::HotelServiceError;
use hotelier_hotel::usecase::identity::CodeSource;

pub use hotelier_testing::session::TEST_SESSION_SECRET as TEST_SECRET;

fn page<T: Clone>(rows: &[T], page: PageRequest) -> Vec<T> {
    rows.iter()
        .skip(page.offset() as usize)
        .take(page.limit() as usize)
        .cloned()
        .collect()
}

// ── Access codes ─────────────────────────────────────────────────────────────

/// Codes already held by some profile or employee.
#[derive(Clone, Default)]
pub struct MemoryCodes {
    taken: Arc<Mutex<HashSet<String>>>,
}

impl MemoryCodes {
    pub fn taken(codes: &[&str]) -> Self {
        Self {
            taken: Arc::new(Mutex::new(codes.iter().map(|c| (*c).to_owned()).collect())),
        }
    }
}

impl CodeRegistry for MemoryCodes {
    async fn code_in_use(&self, code: &str) -> Result<bool, HotelServiceError> {
        Ok(self.taken.lock().unwrap().contains(code))
    }
}

/// Hands out a fixed sequence of codes, repeating the last one forever.
pub struct ScriptedCodes {
    codes: Vec<&'static str>,
    next: Mutex<usize>,
}

impl ScriptedCodes {
    pub fn new(codes: Vec<&'static str>) -> Self {
        Self {
            codes,
            next: Mutex::new(0),
        }
    }

    pub fn drawn(&self) -> usize {
        *self.next.lock().unwrap()
    }
}

impl CodeSource for ScriptedCodes {
    fn next_code(&self) -> String {
        let mut next = self.next.lock().unwrap();
        let code = self.codes[(*next).min(self.codes.len() - 1)];
        *next += 1;
        code.to_owned()
    }
}

// ── Profiles ─────────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MemoryProfiles {
    pub rows: Arc<Mutex<Vec<Profile>>>,
}

impl MemoryProfiles {
    pub fn with(profiles: Vec<Profile>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(profiles)),
        }
    }

    pub fn all(&self) -> Vec<Profile> {
        self.rows.lock().unwrap().clone()
    }
}

impl ProfileRepository for MemoryProfiles {
    async fn list(&self, p: PageRequest) -> Result<Vec<Profile>, HotelServiceError> {
        let mut rows = self.all();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(page(&rows, p))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, HotelServiceError> {
        Ok(self.all().into_iter().find(|p| p.id == id))
    }

    async fn create(&self, profile: &Profile) -> Result<(), HotelServiceError> {
        self.rows.lock().unwrap().push(profile.clone());
        Ok(())
    }

    async fn update(
        &self,
        id: Uuid,
        changes: &ProfileChanges,
    ) -> Result<Option<Profile>, HotelServiceError> {
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        if let Some(name) = &changes.name {
            row.name = name.clone();
        }
        if let Some(role) = changes.role {
            row.role = role;
        }
        if let Some(code) = &changes.code {
            row.code = code.clone();
        }
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, HotelServiceError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id != id);
        Ok(rows.len() < before)
    }
}

pub fn profile(name: &str, role: Role, code: &str) -> Profile {
    Profile {
        id: Uuid::now_v7(),
        name: name.to_owned(),
        role,
        code: code.to_owned(),
        created_at: Utc::now(),
    }
}

// ── Employees ────────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MemoryEmployees {
    pub rows: Arc<Mutex<Vec<Employee>>>,
}

impl EmployeeRepository for MemoryEmployees {
    async fn list(&self, p: PageRequest) -> Result<Vec<Employee>, HotelServiceError> {
        Ok(page(&self.rows.lock().unwrap(), p))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>, HotelServiceError> {
        Ok(self.rows.lock().unwrap().iter().find(|e| e.id == id).cloned())
    }

    async fn create(&self, employee: &Employee) -> Result<(), HotelServiceError> {
        self.rows.lock().unwrap().push(employee.clone());
        Ok(())
    }

    async fn update(
        &self,
        id: Uuid,
        details: &EmployeeDetails,
    ) -> Result<Option<Employee>, HotelServiceError> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.iter_mut().find(|e| e.id == id).map(|row| {
            row.details = details.clone();
            row.updated_at = Utc::now();
            row.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, HotelServiceError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|e| e.id != id);
        Ok(rows.len() < before)
    }
}

pub fn employee_details() -> EmployeeDetails {
    EmployeeDetails {
        first_name: "Nadia".to_owned(),
        last_name: "Haddad".to_owned(),
        telephone: "0555123456".to_owned(),
        address: "12 rue des Oliviers".to_owned(),
        email: "nadia@hotel.test".to_owned(),
        ccp: "0012345678".to_owned(),
        department: Department::Reservation,
    }
}

// ── Tasks ────────────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MemoryTasks {
    pub rows: Arc<Mutex<Vec<Task>>>,
}

impl TaskRepository for MemoryTasks {
    async fn list(&self, p: PageRequest) -> Result<Vec<Task>, HotelServiceError> {
        Ok(page(&self.rows.lock().unwrap(), p))
    }

    async fn create(&self, task: &Task) -> Result<(), HotelServiceError> {
        self.rows.lock().unwrap().push(task.clone());
        Ok(())
    }

    async fn update(
        &self,
        id: Uuid,
        changes: &TaskChanges,
    ) -> Result<Option<Task>, HotelServiceError> {
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        if let Some(title) = &changes.title {
            row.title = title.clone();
        }
        if let Some(description) = &changes.description {
            row.description = description.clone();
        }
        if let Some(status) = changes.status {
            row.status = status;
        }
        if let Some(assigned_to) = changes.assigned_to {
            row.assigned_to = assigned_to;
        }
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, HotelServiceError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|t| t.id != id);
        Ok(rows.len() < before)
    }
}

// ── Stock ────────────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MemoryStock {
    pub rows: Arc<Mutex<Vec<StockItem>>>,
}

impl StockRepository for MemoryStock {
    async fn list(&self, p: PageRequest) -> Result<Vec<StockItem>, HotelServiceError> {
        Ok(page(&self.rows.lock().unwrap(), p))
    }

    async fn create(&self, item: &StockItem) -> Result<(), HotelServiceError> {
        self.rows.lock().unwrap().push(item.clone());
        Ok(())
    }

    async fn update(
        &self,
        id: Uuid,
        details: &StockItemDetails,
    ) -> Result<Option<StockItem>, HotelServiceError> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.iter_mut().find(|i| i.id == id).map(|row| {
            row.details = details.clone();
            row.last_restocked = Utc::now();
            row.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, HotelServiceError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|i| i.id != id);
        Ok(rows.len() < before)
    }
}

pub fn stock_details(name: &str, quantity: i32) -> StockItemDetails {
    StockItemDetails {
        name: name.to_owned(),
        category: "linen".to_owned(),
        quantity,
        price: 4.5,
        unit: "piece".to_owned(),
        description: None,
    }
}

// ── Dashboard ────────────────────────────────────────────────────────────────

/// Counts over the in-memory tables, using the database's low-stock cutoff.
#[derive(Clone, Default)]
pub struct MemoryDashboard {
    pub employees: MemoryEmployees,
    pub tasks: MemoryTasks,
    pub stock: MemoryStock,
}

impl DashboardRepository for MemoryDashboard {
    async fn counts(&self) -> Result<DashboardCounts, HotelServiceError> {
        let tasks = self.tasks.rows.lock().unwrap();
        let with = |status: TaskStatus| tasks.iter().filter(|t| t.status == status).count() as u64;
        let stock = self.stock.rows.lock().unwrap();
        Ok(DashboardCounts {
            employees: self.employees.rows.lock().unwrap().len() as u64,
            tasks: TaskCounts {
                pending: with(TaskStatus::Pending),
                in_progress: with(TaskStatus::InProgress),
                completed: with(TaskStatus::Completed),
            },
            stock_items: stock.len() as u64,
            low_stock_items: stock
                .iter()
                .filter(|i| i.details.quantity < LOW_STOCK_THRESHOLD)
                .count() as u64,
        })
    }
}

// ── Rooms and reservations ───────────────────────────────────────────────────

/// Room catalog, chambers and reservations behind one lock each, mirroring
/// the booking and cancellation rules of the database repository.
#[derive(Clone, Default)]
pub struct MemoryHotel {
    pub rooms: Arc<Mutex<Vec<Room>>>,
    pub chambers: Arc<Mutex<Vec<Chamber>>>,
    pub reservations: Arc<Mutex<Vec<Reservation>>>,
    pub history: Arc<Mutex<Vec<HistoryEntry>>>,
}

impl MemoryHotel {
    /// One room type with the given chamber numbers, all available.
    pub fn with_room(room_type: &str, chambers: &[&str]) -> Self {
        let hotel = Self::default();
        hotel.rooms.lock().unwrap().push(Room {
            id: Uuid::now_v7(),
            details: room_details(room_type),
            created_at: Utc::now(),
        });
        hotel
            .chambers
            .lock()
            .unwrap()
            .extend(chambers.iter().map(|number| Chamber {
                id: Uuid::now_v7(),
                chamber_number: (*number).to_owned(),
                room_type: room_type.to_owned(),
                status: ChamberStatus::Available,
            }));
        hotel
    }

    pub fn chamber_status(&self, number: &str) -> ChamberStatus {
        self.chambers
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.chamber_number == number)
            .map(|c| c.status)
            .unwrap()
    }

    pub fn reservation(&self, id: Uuid) -> Reservation {
        self.reservations
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .unwrap()
    }

    pub fn history(&self) -> Vec<HistoryEntry> {
        self.history.lock().unwrap().clone()
    }
}

impl RoomRepository for MemoryHotel {
    async fn list(&self) -> Result<Vec<Room>, HotelServiceError> {
        Ok(self.rooms.lock().unwrap().clone())
    }

    async fn exists(&self, room_type: &str) -> Result<bool, HotelServiceError> {
        Ok(self
            .rooms
            .lock()
            .unwrap()
            .iter()
            .any(|r| r.details.room_type == room_type))
    }

    async fn create(&self, room: &Room) -> Result<(), HotelServiceError> {
        let mut rooms = self.rooms.lock().unwrap();
        if rooms.iter().any(|r| r.details.room_type == room.details.room_type) {
            return Err(HotelServiceError::RoomTypeTaken);
        }
        rooms.push(room.clone());
        Ok(())
    }

    async fn add_chamber(&self, chamber: &Chamber) -> Result<(), HotelServiceError> {
        let mut chambers = self.chambers.lock().unwrap();
        if chambers
            .iter()
            .any(|c| c.chamber_number == chamber.chamber_number)
        {
            return Err(HotelServiceError::ChamberTaken);
        }
        chambers.push(chamber.clone());
        Ok(())
    }
}

impl ReservationRepository for MemoryHotel {
    async fn book(
        &self,
        id: Uuid,
        guest: &GuestContact,
        stay: &Stay,
    ) -> Result<BookingOutcome, HotelServiceError> {
        let held = {
            let mut chambers = self.chambers.lock().unwrap();
            chambers
                .iter_mut()
                .find(|c| c.room_type == stay.room_type && c.status == ChamberStatus::Available)
                .map(|c| {
                    c.status = ChamberStatus::Reserved;
                    (c.id, c.chamber_number.clone())
                })
        };
        let status = match held {
            Some(_) => ReservationStatus::Pending,
            None => ReservationStatus::NotAssigned,
        };
        let now = Utc::now();
        self.reservations.lock().unwrap().push(Reservation {
            id,
            guest: Some(guest.clone()),
            stay: stay.clone(),
            status,
            chamber_id: held.as_ref().map(|(id, _)| *id),
            chamber_number: held.as_ref().map(|(_, n)| n.clone()),
            user_id: None,
            created_at: now,
            updated_at: now,
        });
        Ok(BookingOutcome {
            id,
            status,
            chamber_number: held.map(|(_, n)| n),
        })
    }

    async fn create(&self, reservation: &Reservation) -> Result<(), HotelServiceError> {
        self.reservations.lock().unwrap().push(reservation.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Reservation>, HotelServiceError> {
        Ok(self
            .reservations
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn list_all(&self, p: PageRequest) -> Result<Vec<Reservation>, HotelServiceError> {
        let mut rows = self.reservations.lock().unwrap().clone();
        rows.reverse();
        Ok(page(&rows, p))
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
        p: PageRequest,
    ) -> Result<Vec<Reservation>, HotelServiceError> {
        let mut rows: Vec<_> = self
            .reservations
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == Some(user_id))
            .cloned()
            .collect();
        rows.reverse();
        Ok(page(&rows, p))
    }

    async fn update_stay(
        &self,
        id: Uuid,
        user_id: Uuid,
        stay: &Stay,
    ) -> Result<Option<Reservation>, HotelServiceError> {
        let mut rows = self.reservations.lock().unwrap();
        let Some(row) = rows
            .iter_mut()
            .find(|r| r.id == id && r.user_id == Some(user_id))
        else {
            return Ok(None);
        };
        if row.status != ReservationStatus::Pending {
            return Err(HotelServiceError::ReservationLocked);
        }
        row.stay = stay.clone();
        row.updated_at = Utc::now();
        Ok(Some(row.clone()))
    }

    async fn delete_for_user(&self, id: Uuid, user_id: Uuid) -> Result<bool, HotelServiceError> {
        let mut rows = self.reservations.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| !(r.id == id && r.user_id == Some(user_id)));
        Ok(rows.len() < before)
    }

    async fn change_status(
        &self,
        id: Uuid,
        status: ReservationStatus,
        changed_by: Uuid,
    ) -> Result<Option<StatusChange>, HotelServiceError> {
        let mut rows = self.reservations.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        let previous = row.status;
        if previous == status {
            return Ok(Some(StatusChange {
                reservation: row.clone(),
                previous,
                released_chamber: None,
            }));
        }

        let mut released_chamber = None;
        if status == ReservationStatus::Cancelled {
            if let Some(chamber_id) = row.chamber_id.take() {
                let mut chambers = self.chambers.lock().unwrap();
                if let Some(chamber) = chambers.iter_mut().find(|c| c.id == chamber_id) {
                    chamber.status = ChamberStatus::Available;
                }
                released_chamber = row.chamber_number.take();
            }
        }
        row.status = status;
        row.updated_at = Utc::now();

        self.history.lock().unwrap().push(HistoryEntry {
            id: Uuid::now_v7(),
            reservation_id: id,
            field_changed: "status".to_owned(),
            old_value: Some(previous.as_str().to_owned()),
            new_value: Some(status.as_str().to_owned()),
            changed_by,
            changed_at: row.updated_at,
        });

        Ok(Some(StatusChange {
            reservation: row.clone(),
            previous,
            released_chamber,
        }))
    }

    async fn list_history(&self, p: PageRequest) -> Result<Vec<HistoryEntry>, HotelServiceError> {
        let mut rows = self.history();
        rows.reverse();
        Ok(page(&rows, p))
    }
}

pub fn room_details(room_type: &str) -> RoomDetails {
    RoomDetails {
        room_type: room_type.to_owned(),
        description: "Sea view".to_owned(),
        guests: 2,
        size_m2: 32,
        beds: "1 king".to_owned(),
        price_per_night: 180.0,
        rating: 4.6,
        amenities: vec!["wifi".to_owned(), "minibar".to_owned()],
        features: vec!["balcony".to_owned()],
        cancellation_policy: "Free until 48h before check-in".to_owned(),
        image_urls: vec![],
    }
}

pub fn guest() -> GuestContact {
    GuestContact {
        first_name: "Amine".to_owned(),
        last_name: "Belkacem".to_owned(),
        email: "amine@guest.test".to_owned(),
        phone: "0661234567".to_owned(),
    }
}

pub fn stay(room_type: &str) -> Stay {
    Stay {
        check_in: date("2026-07-01"),
        check_out: date("2026-07-04"),
        room_type: room_type.to_owned(),
        guests: 2,
        special_requests: None,
    }
}

/// The dates of [`stay`], leaving the guest count untouched.
pub fn stay_edit(room_type: &str) -> StayEdit {
    StayEdit {
        check_in: date("2026-07-01"),
        check_out: date("2026-07-04"),
        room_type: room_type.to_owned(),
        guests: None,
        special_requests: None,
    }
}

pub fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}
