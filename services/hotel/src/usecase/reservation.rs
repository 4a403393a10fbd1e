use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use hotelier_domain::pagination::PageRequest;
use hotelier_domain::status::ReservationStatus;

use crate::domain::repository::{ReservationRepository, RoomRepository};
use crate::domain::types::{
    BookingOutcome, GuestContact, HistoryEntry, Reservation, Stay, StayEdit, StatusChange,
};
use crate::error::HotelServiceError;

fn normalized_stay(stay: Stay) -> Stay {
    Stay {
        room_type: stay.room_type.trim().to_owned(),
        special_requests: stay
            .special_requests
            .map(|r| r.trim().to_owned())
            .filter(|r| !r.is_empty()),
        ..stay
    }
}

async fn require_room_type<R: RoomRepository>(
    rooms: &R,
    room_type: &str,
) -> Result<(), HotelServiceError> {
    if !rooms.exists(room_type).await? {
        return Err(HotelServiceError::RoomNotFound);
    }
    Ok(())
}

// ── Book (public) ────────────────────────────────────────────────────────────

pub struct BookInput {
    pub guest: GuestContact,
    pub stay: Stay,
}

pub struct BookUseCase<R: ReservationRepository, M: RoomRepository> {
    pub repo: R,
    pub rooms: M,
}

impl<R: ReservationRepository, M: RoomRepository> BookUseCase<R, M> {
    /// Store the booking and try to hold a chamber for it in one step.
    /// Running out of chambers is not an error: the booking is kept as
    /// `not_assigned` for staff to resolve.
    pub async fn execute(&self, input: BookInput) -> Result<BookingOutcome, HotelServiceError> {
        let guest = GuestContact {
            first_name: input.guest.first_name.trim().to_owned(),
            last_name: input.guest.last_name.trim().to_owned(),
            email: input.guest.email.trim().to_owned(),
            phone: input.guest.phone.trim().to_owned(),
        };
        let stay = normalized_stay(input.stay);
        guest.validate()?;
        stay.validate()?;
        require_room_type(&self.rooms, &stay.room_type).await?;

        let outcome = self.repo.book(Uuid::now_v7(), &guest, &stay).await?;
        match &outcome.chamber_number {
            Some(chamber) => info!(
                reservation_id = %outcome.id,
                room_type = %stay.room_type,
                chamber = %chamber,
                "booking assigned a chamber"
            ),
            None => warn!(
                reservation_id = %outcome.id,
                room_type = %stay.room_type,
                "no chamber available; booking left unassigned"
            ),
        }
        Ok(outcome)
    }
}

// ── Reservation user ─────────────────────────────────────────────────────────

pub struct ListOwnReservationsUseCase<R: ReservationRepository> {
    pub repo: R,
}

impl<R: ReservationRepository> ListOwnReservationsUseCase<R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Reservation>, HotelServiceError> {
        self.repo.list_for_user(user_id, page).await
    }
}

pub struct CreateOwnReservationUseCase<R: ReservationRepository, M: RoomRepository> {
    pub repo: R,
    pub rooms: M,
}

impl<R: ReservationRepository, M: RoomRepository> CreateOwnReservationUseCase<R, M> {
    pub async fn execute(&self, user_id: Uuid, stay: Stay) -> Result<Reservation, HotelServiceError> {
        let stay = normalized_stay(stay);
        stay.validate()?;
        require_room_type(&self.rooms, &stay.room_type).await?;

        let now = Utc::now();
        let reservation = Reservation {
            id: Uuid::now_v7(),
            guest: None,
            stay,
            status: ReservationStatus::Pending,
            chamber_id: None,
            chamber_number: None,
            user_id: Some(user_id),
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&reservation).await?;
        Ok(reservation)
    }
}

pub struct UpdateOwnReservationUseCase<R: ReservationRepository, M: RoomRepository> {
    pub repo: R,
    pub rooms: M,
}

impl<R: ReservationRepository, M: RoomRepository> UpdateOwnReservationUseCase<R, M> {
    /// Only pending reservations may be edited; others answer
    /// [`HotelServiceError::ReservationLocked`].
    pub async fn execute(
        &self,
        id: Uuid,
        user_id: Uuid,
        edit: StayEdit,
    ) -> Result<Reservation, HotelServiceError> {
        let current = self
            .repo
            .find_by_id(id)
            .await?
            .filter(|r| r.user_id == Some(user_id))
            .ok_or(HotelServiceError::ReservationNotFound)?;
        let stay = normalized_stay(edit.applied_to(&current.stay));
        stay.validate()?;
        require_room_type(&self.rooms, &stay.room_type).await?;

        self.repo
            .update_stay(id, user_id, &stay)
            .await?
            .ok_or(HotelServiceError::ReservationNotFound)
    }
}

pub struct DeleteOwnReservationUseCase<R: ReservationRepository> {
    pub repo: R,
}

impl<R: ReservationRepository> DeleteOwnReservationUseCase<R> {
    pub async fn execute(&self, id: Uuid, user_id: Uuid) -> Result<(), HotelServiceError> {
        // Someone else's reservation is indistinguishable from a missing one.
        if !self.repo.delete_for_user(id, user_id).await? {
            return Err(HotelServiceError::ReservationNotFound);
        }
        Ok(())
    }
}

// ── Reservation employee ─────────────────────────────────────────────────────

pub struct ListReservationsUseCase<R: ReservationRepository> {
    pub repo: R,
}

impl<R: ReservationRepository> ListReservationsUseCase<R> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<Reservation>, HotelServiceError> {
        self.repo.list_all(page).await
    }
}

pub struct ChangeReservationStatusUseCase<R: ReservationRepository> {
    pub repo: R,
}

impl<R: ReservationRepository> ChangeReservationStatusUseCase<R> {
    pub async fn execute(
        &self,
        id: Uuid,
        status: ReservationStatus,
        employee_id: Uuid,
    ) -> Result<StatusChange, HotelServiceError> {
        if !status.is_staff_assignable() {
            return Err(HotelServiceError::InvalidStatus);
        }
        let change = self
            .repo
            .change_status(id, status, employee_id)
            .await?
            .ok_or(HotelServiceError::ReservationNotFound)?;

        if change.previous != status {
            info!(
                reservation_id = %id,
                employee_id = %employee_id,
                from = %change.previous,
                to = %status,
                released_chamber = change.released_chamber.as_deref(),
                "reservation status changed"
            );
        }
        Ok(change)
    }
}

pub struct ListReservationHistoryUseCase<R: ReservationRepository> {
    pub repo: R,
}

impl<R: ReservationRepository> ListReservationHistoryUseCase<R> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<HistoryEntry>, HotelServiceError> {
        self.repo.list_history(page).await
    }
}
