use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hotelier_domain::status::ChamberStatus;

use crate::domain::types::{Chamber, Room, RoomDetails};
use crate::error::HotelServiceError;
use crate::state::AppState;
use crate::usecase::room::{AddChamberUseCase, CreateRoomUseCase, ListRoomsUseCase};

#[derive(Serialize)]
pub struct RoomResponse {
    pub id: Uuid,
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
    #[serde(serialize_with = "hotelier_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        let details = room.details;
        Self {
            id: room.id,
            room_type: details.room_type,
            description: details.description,
            guests: details.guests,
            size_m2: details.size_m2,
            beds: details.beds,
            price_per_night: details.price_per_night,
            rating: details.rating,
            amenities: details.amenities,
            features: details.features,
            cancellation_policy: details.cancellation_policy,
            image_urls: details.image_urls,
            created_at: room.created_at,
        }
    }
}

// ── GET /rooms, GET /employee/rooms ──────────────────────────────────────────

pub async fn list_rooms(
    State(state): State<AppState>,
) -> Result<Json<Vec<RoomResponse>>, HotelServiceError> {
    let usecase = ListRoomsUseCase {
        repo: state.room_repo(),
    };
    let rooms = usecase.execute().await?;
    Ok(Json(rooms.into_iter().map(Into::into).collect()))
}

// ── POST /admin/rooms ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateRoomRequest {
    pub room_type: String,
    pub description: String,
    pub guests: i32,
    pub size_m2: i32,
    pub beds: String,
    pub price_per_night: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub cancellation_policy: String,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

pub async fn create_room(
    State(state): State<AppState>,
    Json(body): Json<CreateRoomRequest>,
) -> Result<(StatusCode, Json<RoomResponse>), HotelServiceError> {
    let usecase = CreateRoomUseCase {
        repo: state.room_repo(),
    };
    let room = usecase
        .execute(RoomDetails {
            room_type: body.room_type,
            description: body.description,
            guests: body.guests,
            size_m2: body.size_m2,
            beds: body.beds,
            price_per_night: body.price_per_night,
            rating: body.rating,
            amenities: body.amenities,
            features: body.features,
            cancellation_policy: body.cancellation_policy,
            image_urls: body.image_urls,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(room.into())))
}

// ── POST /admin/rooms/{room_type}/chambers ───────────────────────────────────

#[derive(Deserialize)]
pub struct AddChamberRequest {
    pub chamber_number: String,
}

#[derive(Serialize)]
pub struct ChamberResponse {
    pub id: Uuid,
    pub chamber_number: String,
    pub room_type: String,
    pub status: ChamberStatus,
}

impl From<Chamber> for ChamberResponse {
    fn from(chamber: Chamber) -> Self {
        Self {
            id: chamber.id,
            chamber_number: chamber.chamber_number,
            room_type: chamber.room_type,
            status: chamber.status,
        }
    }
}

pub async fn add_chamber(
    State(state): State<AppState>,
    Path(room_type): Path<String>,
    Json(body): Json<AddChamberRequest>,
) -> Result<(StatusCode, Json<ChamberResponse>), HotelServiceError> {
    let usecase = AddChamberUseCase {
        repo: state.room_repo(),
    };
    let chamber = usecase.execute(&room_type, &body.chamber_number).await?;
    Ok((StatusCode::CREATED, Json(chamber.into())))
}
