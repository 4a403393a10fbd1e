use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hotelier_domain::role::Role;
use hotelier_domain::status::{ReservationStatus, TaskStatus};

use crate::error::HotelServiceError;

/// Access codes are exactly this many ASCII digits.
pub const ACCESS_CODE_LEN: usize = 7;

/// Items below this quantity count as low stock.
pub const LOW_STOCK_THRESHOLD: i32 = 10;

pub fn is_access_code(code: &str) -> bool {
    code.len() == ACCESS_CODE_LEN && code.bytes().all(|b| b.is_ascii_digit())
}

/// Character count after trimming, so "  a " is one char long.
fn trimmed_len(value: &str) -> usize {
    value.trim().chars().count()
}

pub(crate) fn require_min_len(
    field: &str,
    value: &str,
    min: usize,
) -> Result<(), HotelServiceError> {
    if trimmed_len(value) < min {
        return Err(HotelServiceError::invalid(format!(
            "{field} must be at least {min} characters"
        )));
    }
    Ok(())
}

pub(crate) fn require_email(value: &str) -> Result<(), HotelServiceError> {
    if !value.contains('@') {
        return Err(HotelServiceError::invalid("email must contain @"));
    }
    Ok(())
}

// ── Profiles ─────────────────────────────────────────────────────────────────

/// A login-capable person with a stored role (never [`Role::Employee`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
    pub code: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub role: Option<Role>,
    pub code: Option<String>,
}

// ── Employees ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Reservation,
    Stock,
}

impl Department {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reservation => "reservation",
            Self::Stock => "stock",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Department {
    type Err = HotelServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reservation" => Ok(Self::Reservation),
            "stock" => Ok(Self::Stock),
            _ => Err(HotelServiceError::invalid(
                "department must be reservation or stock",
            )),
        }
    }
}

/// The editable part of an employee record.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDetails {
    pub first_name: String,
    pub last_name: String,
    pub telephone: String,
    pub address: String,
    pub email: String,
    pub ccp: String,
    pub department: Department,
}

impl EmployeeDetails {
    pub fn validate(&self) -> Result<(), HotelServiceError> {
        require_min_len("first_name", &self.first_name, 2)?;
        require_min_len("last_name", &self.last_name, 2)?;
        require_min_len("telephone", &self.telephone, 10)?;
        require_min_len("address", &self.address, 5)?;
        require_email(&self.email)?;
        require_min_len("ccp", &self.ccp, 5)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: Uuid,
    pub details: EmployeeDetails,
    pub code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ── Tasks ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub assigned_to: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    /// `Some(None)` unassigns.
    pub assigned_to: Option<Option<Uuid>>,
}

// ── Stock ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    Out,
    Low,
    Ok,
}

impl StockLevel {
    pub fn of(quantity: i32) -> Self {
        if quantity <= 0 {
            Self::Out
        } else if quantity < LOW_STOCK_THRESHOLD {
            Self::Low
        } else {
            Self::Ok
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StockItemDetails {
    pub name: String,
    pub category: String,
    pub quantity: i32,
    pub price: f64,
    pub unit: String,
    pub description: Option<String>,
}

impl StockItemDetails {
    pub fn validate(&self) -> Result<(), HotelServiceError> {
        require_min_len("name", &self.name, 1)?;
        if self.quantity < 0 {
            return Err(HotelServiceError::invalid("quantity must not be negative"));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(HotelServiceError::invalid("price must not be negative"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StockItem {
    pub id: Uuid,
    pub details: StockItemDetails,
    pub last_restocked: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl StockItem {
    pub fn level(&self) -> StockLevel {
        StockLevel::of(self.details.quantity)
    }
}

// ── Rooms ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct RoomDetails {
    pub room_type: String,
    pub description: String,
    pub guests: i32,
    pub size_m2: i32,
    pub beds: String,
    pub price_per_night: f64,
    pub rating: f64,
    pub amenities: Vec<String>,
    pub features: Vec<String>,
    pub cancellation_policy: String,
    pub image_urls: Vec<String>,
}

impl RoomDetails {
    pub fn validate(&self) -> Result<(), HotelServiceError> {
        require_min_len("room_type", &self.room_type, 1)?;
        if self.guests < 1 {
            return Err(HotelServiceError::invalid("guests must be at least 1"));
        }
        if self.size_m2 < 1 {
            return Err(HotelServiceError::invalid("size_m2 must be positive"));
        }
        if !self.price_per_night.is_finite() || self.price_per_night < 0.0 {
            return Err(HotelServiceError::invalid(
                "price_per_night must not be negative",
            ));
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(HotelServiceError::invalid("rating must be between 0 and 5"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: Uuid,
    pub details: RoomDetails,
    pub created_at: DateTime<Utc>,
}

/// A physical room of some room type.
#[derive(Debug, Clone, PartialEq)]
pub struct Chamber {
    pub id: Uuid,
    pub chamber_number: String,
    pub room_type: String,
    pub status: hotelier_domain::status::ChamberStatus,
}

// ── Reservations ─────────────────────────────────────────────────────────────

/// Dates, room type and requests of a stay; shared by public bookings and
/// reservation-user requests.
#[derive(Debug, Clone, PartialEq)]
pub struct Stay {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub room_type: String,
    pub guests: i32,
    pub special_requests: Option<String>,
}

impl Stay {
    pub fn validate(&self) -> Result<(), HotelServiceError> {
        if self.check_in >= self.check_out {
            return Err(HotelServiceError::invalid(
                "check_out must be after check_in",
            ));
        }
        if self.guests < 1 {
            return Err(HotelServiceError::invalid("guests must be at least 1"));
        }
        require_min_len("room_type", &self.room_type, 1)
    }
}

/// A reservation user's edit of a pending stay. Leaving `guests` out keeps
/// the stored count.
#[derive(Debug, Clone, PartialEq)]
pub struct StayEdit {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub room_type: String,
    pub guests: Option<i32>,
    pub special_requests: Option<String>,
}

impl StayEdit {
    pub fn applied_to(self, current: &Stay) -> Stay {
        Stay {
            check_in: self.check_in,
            check_out: self.check_out,
            room_type: self.room_type,
            guests: self.guests.unwrap_or(current.guests),
            special_requests: self.special_requests,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GuestContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl GuestContact {
    pub fn validate(&self) -> Result<(), HotelServiceError> {
        require_min_len("first_name", &self.first_name, 2)?;
        require_min_len("last_name", &self.last_name, 2)?;
        require_email(&self.email)?;
        require_min_len("phone", &self.phone, 10)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: Uuid,
    pub guest: Option<GuestContact>,
    pub stay: Stay,
    pub status: ReservationStatus,
    pub chamber_id: Option<Uuid>,
    pub chamber_number: Option<String>,
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// What a public booking produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingOutcome {
    pub id: Uuid,
    pub status: ReservationStatus,
    pub chamber_number: Option<String>,
}

/// Result of a staff status change, before and after.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChange {
    pub reservation: Reservation,
    pub previous: ReservationStatus,
    /// Chamber put back to `available` by a cancellation.
    pub released_chamber: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub reservation_id: Uuid,
    pub field_changed: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    pub changed_by: Uuid,
    pub changed_at: DateTime<Utc>,
}

// ── Dashboard ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskCounts {
    pub pending: u64,
    pub in_progress: u64,
    pub completed: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardCounts {
    pub employees: u64,
    pub tasks: TaskCounts,
    pub stock_items: u64,
    pub low_stock_items: u64,
}
