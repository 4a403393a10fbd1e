use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use hotelier_domain::status::ChamberStatus;

use crate::domain::repository::RoomRepository;
use crate::domain::types::{Chamber, Room, RoomDetails};
use crate::error::HotelServiceError;

// ── ListRooms ────────────────────────────────────────────────────────────────

pub struct ListRoomsUseCase<R: RoomRepository> {
    pub repo: R,
}

impl<R: RoomRepository> ListRoomsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Room>, HotelServiceError> {
        self.repo.list().await
    }
}

// ── CreateRoom ───────────────────────────────────────────────────────────────

pub struct CreateRoomUseCase<R: RoomRepository> {
    pub repo: R,
}

impl<R: RoomRepository> CreateRoomUseCase<R> {
    pub async fn execute(&self, details: RoomDetails) -> Result<Room, HotelServiceError> {
        let details = RoomDetails {
            room_type: details.room_type.trim().to_owned(),
            ..details
        };
        details.validate()?;

        let room = Room {
            id: Uuid::now_v7(),
            details,
            created_at: Utc::now(),
        };
        self.repo.create(&room).await?;
        info!(room_type = %room.details.room_type, "room type created");
        Ok(room)
    }
}

// ── AddChamber ───────────────────────────────────────────────────────────────

pub struct AddChamberUseCase<R: RoomRepository> {
    pub repo: R,
}

impl<R: RoomRepository> AddChamberUseCase<R> {
    /// Register a physical room; it starts out available.
    pub async fn execute(
        &self,
        room_type: &str,
        chamber_number: &str,
    ) -> Result<Chamber, HotelServiceError> {
        let chamber_number = chamber_number.trim();
        if chamber_number.is_empty() {
            return Err(HotelServiceError::invalid(
                "chamber_number must not be empty",
            ));
        }
        if !self.repo.exists(room_type).await? {
            return Err(HotelServiceError::RoomNotFound);
        }

        let chamber = Chamber {
            id: Uuid::now_v7(),
            chamber_number: chamber_number.to_owned(),
            room_type: room_type.to_owned(),
            status: ChamberStatus::Available,
        };
        self.repo.add_chamber(&chamber).await?;
        Ok(chamber)
    }
}
