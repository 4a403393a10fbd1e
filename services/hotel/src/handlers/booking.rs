use axum::{Json, extract::State, http::StatusCode};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hotelier_domain::status::ReservationStatus;

use crate::domain::types::{GuestContact, Stay};
use crate::error::HotelServiceError;
use crate::state::AppState;
use crate::usecase::reservation::{BookInput, BookUseCase};

// ── POST /bookings ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct BookingRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub room_type: String,
    pub guests: i32,
    pub special_requests: Option<String>,
}

#[derive(Serialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub status: ReservationStatus,
    pub chamber_number: Option<String>,
}

pub async fn create_booking(
    State(state): State<AppState>,
    Json(body): Json<BookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), HotelServiceError> {
    let usecase = BookUseCase {
        repo: state.reservation_repo(),
        rooms: state.room_repo(),
    };
    let outcome = usecase
        .execute(BookInput {
            guest: GuestContact {
                first_name: body.first_name,
                last_name: body.last_name,
                email: body.email,
                phone: body.phone,
            },
            stay: Stay {
                check_in: body.check_in,
                check_out: body.check_out,
                room_type: body.room_type,
                guests: body.guests,
                special_requests: body.special_requests,
            },
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(BookingResponse {
            id: outcome.id,
            status: outcome.status,
            chamber_number: outcome.chamber_number,
        }),
    ))
}
