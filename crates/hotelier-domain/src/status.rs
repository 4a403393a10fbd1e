//! Lifecycle states stored as text columns.
//!
//! Each enum serializes to the exact string persisted in its column, so
//! `as_str` / `FromStr` and serde always agree.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status: {0}")]
pub struct UnknownStatus(pub String);

macro_rules! text_status {
    ($name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownStatus;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    other => Err(UnknownStatus(other.to_owned())),
                }
            }
        }
    };
}

/// Reservation lifecycle.
///
/// `NotAssigned` is only produced by a booking that found no free chamber;
/// staff never set it by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
    NotAssigned,
}

text_status!(ReservationStatus {
    Pending => "pending",
    Confirmed => "confirmed",
    Cancelled => "cancelled",
    NotAssigned => "not_assigned",
});

impl ReservationStatus {
    /// Statuses a reservation employee may move a reservation into.
    pub fn is_staff_assignable(self) -> bool {
        !matches!(self, Self::NotAssigned)
    }
}

/// Occupancy of a physical room (chamber).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChamberStatus {
    Available,
    Reserved,
}

text_status!(ChamberStatus {
    Available => "available",
    Reserved => "reserved",
});

/// Progress of a task assigned by an administrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

text_status!(TaskStatus {
    Pending => "pending",
    InProgress => "in_progress",
    Completed => "completed",
});
