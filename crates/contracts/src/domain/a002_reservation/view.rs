use super::aggregate::{ReservationDto, ReservationId, ReservationStatus};
use crate::shared::date_time::{combine_date_time, format_date_time, DateTimeError};
use crate::shared::inline_edit::EMPTY_PLACEHOLDER;
use chrono::NaiveDateTime;

/// Reservation summary shown on the guest page.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationView {
    pub id: ReservationId,
    pub code: String,
    pub room: String,
    /// `None` for a status code the frontend does not know yet.
    pub status: Option<ReservationStatus>,
    pub status_code: String,
    pub check_in: NaiveDateTime,
    pub check_out: NaiveDateTime,
    pub adults: u32,
    pub children: u32,
}

impl ReservationView {
    pub fn from_dto(dto: ReservationDto) -> Result<Self, DateTimeError> {
        let check_in = combine_date_time(&dto.check_in_date, dto.check_in_time.as_deref())?;
        let check_out = combine_date_time(&dto.check_out_date, dto.check_out_time.as_deref())?;
        Ok(Self {
            id: dto.id,
            code: dto.code,
            room: dto
                .room_number
                .filter(|r| !r.trim().is_empty())
                .unwrap_or_else(|| EMPTY_PLACEHOLDER.to_string()),
            status: ReservationStatus::from_code(&dto.status),
            status_code: dto.status,
            check_in,
            check_out,
            adults: dto.adults,
            children: dto.children,
        })
    }

    pub fn status_label(&self) -> String {
        self.status
            .map(|s| s.label().to_string())
            .unwrap_or_else(|| self.status_code.clone())
    }

    pub fn badge_variant(&self) -> &'static str {
        self.status.map(|s| s.badge_variant()).unwrap_or("neutral")
    }

    pub fn stay_label(&self) -> String {
        format!(
            "{} → {}",
            format_date_time(&self.check_in),
            format_date_time(&self.check_out)
        )
    }

    /// "2 adultos, 1 niño"
    pub fn occupancy_label(&self) -> String {
        let adults = match self.adults {
            1 => "1 adulto".to_string(),
            n => format!("{} adultos", n),
        };
        match self.children {
            0 => adults,
            1 => format!("{}, 1 niño", adults),
            n => format!("{}, {} niños", adults, n),
        }
    }
}
