use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hotelier_auth_types::identity::Identity;
use hotelier_domain::pagination::PageRequest;
use hotelier_domain::status::ReservationStatus;

use crate::domain::types::{HistoryEntry, Reservation, Stay, StayEdit};
use crate::error::HotelServiceError;
use crate::state::AppState;
use crate::usecase::reservation::{
    ChangeReservationStatusUseCase, CreateOwnReservationUseCase, DeleteOwnReservationUseCase,
    ListOwnReservationsUseCase, ListReservationHistoryUseCase, ListReservationsUseCase,
    UpdateOwnReservationUseCase,
};

#[derive(Serialize)]
pub struct ReservationResponse {
    pub id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub room_type: String,
    pub guests: i32,
    pub special_requests: Option<String>,
    pub status: ReservationStatus,
    pub chamber_number: Option<String>,
    pub user_id: Option<Uuid>,
    #[serde(serialize_with = "hotelier_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "hotelier_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Reservation> for ReservationResponse {
    fn from(reservation: Reservation) -> Self {
        let stay = reservation.stay;
        let (first_name, last_name, email, phone) = match reservation.guest {
            Some(g) => (Some(g.first_name), Some(g.last_name), Some(g.email), Some(g.phone)),
            None => (None, None, None, None),
        };
        Self {
            id: reservation.id,
            first_name,
            last_name,
            email,
            phone,
            check_in: stay.check_in,
            check_out: stay.check_out,
            room_type: stay.room_type,
            guests: stay.guests,
            special_requests: stay.special_requests,
            status: reservation.status,
            chamber_number: reservation.chamber_number,
            user_id: reservation.user_id,
            created_at: reservation.created_at,
            updated_at: reservation.updated_at,
        }
    }
}

/// Stay fields a reservation user submits on create and edit. A missing
/// `guests` means one guest on create and no change on edit.
#[derive(Deserialize)]
pub struct StayRequest {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub room_type: String,
    pub guests: Option<i32>,
    pub special_requests: Option<String>,
}

impl From<StayRequest> for Stay {
    fn from(body: StayRequest) -> Self {
        Self {
            check_in: body.check_in,
            check_out: body.check_out,
            room_type: body.room_type,
            guests: body.guests.unwrap_or(1),
            special_requests: body.special_requests,
        }
    }
}

impl From<StayRequest> for StayEdit {
    fn from(body: StayRequest) -> Self {
        Self {
            check_in: body.check_in,
            check_out: body.check_out,
            room_type: body.room_type,
            guests: body.guests,
            special_requests: body.special_requests,
        }
    }
}

// ── GET /user/reservations ───────────────────────────────────────────────────

pub async fn list_own_reservations(
    identity: Identity,
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<ReservationResponse>>, HotelServiceError> {
    let usecase = ListOwnReservationsUseCase {
        repo: state.reservation_repo(),
    };
    let reservations = usecase.execute(identity.id, page).await?;
    Ok(Json(reservations.into_iter().map(Into::into).collect()))
}

// ── POST /user/reservations ──────────────────────────────────────────────────

pub async fn create_own_reservation(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<StayRequest>,
) -> Result<(StatusCode, Json<ReservationResponse>), HotelServiceError> {
    let usecase = CreateOwnReservationUseCase {
        repo: state.reservation_repo(),
        rooms: state.room_repo(),
    };
    let reservation = usecase.execute(identity.id, body.into()).await?;
    Ok((StatusCode::CREATED, Json(reservation.into())))
}

// ── PATCH /user/reservations/{id} ────────────────────────────────────────────

pub async fn update_own_reservation(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<StayRequest>,
) -> Result<Json<ReservationResponse>, HotelServiceError> {
    let usecase = UpdateOwnReservationUseCase {
        repo: state.reservation_repo(),
        rooms: state.room_repo(),
    };
    let reservation = usecase.execute(id, identity.id, body.into()).await?;
    Ok(Json(reservation.into()))
}

// ── DELETE /user/reservations/{id} ───────────────────────────────────────────

pub async fn delete_own_reservation(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, HotelServiceError> {
    let usecase = DeleteOwnReservationUseCase {
        repo: state.reservation_repo(),
    };
    usecase.execute(id, identity.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /employee/reservations ───────────────────────────────────────────────

pub async fn list_reservations(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<ReservationResponse>>, HotelServiceError> {
    let usecase = ListReservationsUseCase {
        repo: state.reservation_repo(),
    };
    let reservations = usecase.execute(page).await?;
    Ok(Json(reservations.into_iter().map(Into::into).collect()))
}

// ── PATCH /employee/reservations/{id}/status ─────────────────────────────────

#[derive(Deserialize)]
pub struct ChangeStatusRequest {
    pub status: String,
}

pub async fn change_reservation_status(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ChangeStatusRequest>,
) -> Result<Json<ReservationResponse>, HotelServiceError> {
    let status = body
        .status
        .parse::<ReservationStatus>()
        .map_err(|_| HotelServiceError::InvalidStatus)?;
    let usecase = ChangeReservationStatusUseCase {
        repo: state.reservation_repo(),
    };
    let change = usecase.execute(id, status, identity.id).await?;
    Ok(Json(change.reservation.into()))
}

// ── GET /employee/reservations/history ───────────────────────────────────────

#[derive(Serialize)]
pub struct HistoryEntryResponse {
    pub id: Uuid,
    pub reservation_id: Uuid,
    pub field_changed: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    pub changed_by: Uuid,
    #[serde(serialize_with = "hotelier_core::serde::to_rfc3339_ms")]
    pub changed_at: chrono::DateTime<chrono::Utc>,
}

impl From<HistoryEntry> for HistoryEntryResponse {
    fn from(entry: HistoryEntry) -> Self {
        Self {
            id: entry.id,
            reservation_id: entry.reservation_id,
            field_changed: entry.field_changed,
            old_value: entry.old_value,
            new_value: entry.new_value,
            changed_by: entry.changed_by,
            changed_at: entry.changed_at,
        }
    }
}

pub async fn list_reservation_history(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<HistoryEntryResponse>>, HotelServiceError> {
    let usecase = ListReservationHistoryUseCase {
        repo: state.reservation_repo(),
    };
    let entries = usecase.execute(page).await?;
    Ok(Json(entries.into_iter().map(Into::into).collect()))
}
