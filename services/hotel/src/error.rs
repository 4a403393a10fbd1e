use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use hotelier_core::error::error_response;

/// Hotel service error variants.
#[derive(Debug, thiserror::Error)]
pub enum HotelServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("role cannot be assigned to a profile")]
    InvalidRole,
    #[error("unknown status")]
    InvalidStatus,
    #[error("access code already in use")]
    CodeTaken,
    #[error("room type already exists")]
    RoomTypeTaken,
    #[error("chamber number already exists")]
    ChamberTaken,
    #[error("only pending reservations can be edited")]
    ReservationLocked,
    #[error("profile not found")]
    ProfileNotFound,
    #[error("employee not found")]
    EmployeeNotFound,
    #[error("task not found")]
    TaskNotFound,
    #[error("stock item not found")]
    StockItemNotFound,
    #[error("room not found")]
    RoomNotFound,
    #[error("reservation not found")]
    ReservationNotFound,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl HotelServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION",
            Self::InvalidRole => "INVALID_ROLE",
            Self::InvalidStatus => "INVALID_STATUS",
            Self::CodeTaken => "CODE_TAKEN",
            Self::RoomTypeTaken => "ROOM_TYPE_TAKEN",
            Self::ChamberTaken => "CHAMBER_TAKEN",
            Self::ReservationLocked => "RESERVATION_LOCKED",
            Self::ProfileNotFound => "PROFILE_NOT_FOUND",
            Self::EmployeeNotFound => "EMPLOYEE_NOT_FOUND",
            Self::TaskNotFound => "TASK_NOT_FOUND",
            Self::StockItemNotFound => "STOCK_ITEM_NOT_FOUND",
            Self::RoomNotFound => "ROOM_NOT_FOUND",
            Self::ReservationNotFound => "RESERVATION_NOT_FOUND",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl IntoResponse for HotelServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) | Self::InvalidRole | Self::InvalidStatus => {
                StatusCode::BAD_REQUEST
            }
            Self::CodeTaken
            | Self::RoomTypeTaken
            | Self::ChamberTaken
            | Self::ReservationLocked => StatusCode::CONFLICT,
            Self::ProfileNotFound
            | Self::EmployeeNotFound
            | Self::TaskNotFound
            | Self::StockItemNotFound
            | Self::RoomNotFound
            | Self::ReservationNotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let internal = match &self {
            Self::Internal(e) => Some(e as &dyn std::fmt::Display),
            _ => None,
        };
        error_response(status, self.kind(), self.to_string(), internal)
    }
}
