use crate::domain::a001_guest::GuestId;
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id! {
    /// Unique reservation identifier
    ReservationId
}

/// Reservation as returned by `GET /api/reservations?guest_id=...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDto {
    pub id: ReservationId,
    pub guest_id: GuestId,
    pub code: String,
    pub room_number: Option<String>,
    pub status: String,
    pub check_in_date: String,
    pub check_in_time: Option<String>,
    pub check_out_date: String,
    pub check_out_time: Option<String>,
    #[serde(default)]
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
}

/// Query string of the reservation list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReservationQuery {
    pub guest_id: Option<GuestId>,
    pub status: Option<String>,
}

/// Lifecycle status of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
    NoShow,
}

impl ReservationStatus {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "pending" => Some(Self::Pending),
            "confirmed" => Some(Self::Confirmed),
            "checked_in" => Some(Self::CheckedIn),
            "checked_out" => Some(Self::CheckedOut),
            "cancelled" | "canceled" => Some(Self::Cancelled),
            "no_show" => Some(Self::NoShow),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::CheckedIn => "checked_in",
            Self::CheckedOut => "checked_out",
            Self::Cancelled => "cancelled",
            Self::NoShow => "no_show",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pendiente",
            Self::Confirmed => "Confirmada",
            Self::CheckedIn => "En casa",
            Self::CheckedOut => "Salida realizada",
            Self::Cancelled => "Cancelada",
            Self::NoShow => "No presentado",
        }
    }

    /// Badge variant understood by the UI badge component.
    pub fn badge_variant(&self) -> &'static str {
        match self {
            Self::Pending => "warning",
            Self::Confirmed => "primary",
            Self::CheckedIn => "success",
            Self::CheckedOut => "neutral",
            Self::Cancelled | Self::NoShow => "error",
        }
    }
}
