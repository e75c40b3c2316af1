use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::pricing::PriceBreakdown;
use crate::range::DateRange;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("A booking needs at least one night")]
    NoNights,
    #[error("Price breakdown covers {breakdown} nights but the range covers {range}")]
    NightsMismatch { breakdown: u32, range: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Upcoming,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Upcoming => "upcoming",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

impl FromStr for BookingStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "upcoming" => Ok(BookingStatus::Upcoming),
            "completed" => Ok(BookingStatus::Completed),
            "cancelled" | "canceled" => Ok(BookingStatus::Cancelled),
            _ => Err(()),
        }
    }
}

/// A reservation as kept in local storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub id: String,
    pub property_id: u32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub total_price: u64,
    pub status: BookingStatus,
    pub booking_date: DateTime<Utc>,
}

impl BookingRecord {
    /// Builds an upcoming booking from a committed range and its breakdown.
    ///
    /// Refuses zero-night stays, and a breakdown computed for a different
    /// range than the one being booked.
    pub fn reserve(
        property_id: u32,
        range: DateRange,
        guests: u32,
        breakdown: &PriceBreakdown,
        booked_at: DateTime<Utc>,
    ) -> Result<Self, BookingError> {
        if !breakdown.is_bookable() || range.nights() == 0 {
            return Err(BookingError::NoNights);
        }
        if breakdown.nights != range.nights() {
            return Err(BookingError::NightsMismatch {
                breakdown: breakdown.nights,
                range: range.nights(),
            });
        }

        Ok(Self {
            id: format!("booking-{}", Uuid::new_v4()),
            property_id,
            check_in: range.start(),
            check_out: range.end(),
            guests: guests.max(1),
            total_price: breakdown.total,
            status: BookingStatus::Upcoming,
            booking_date: booked_at,
        })
    }

    pub fn nights(&self) -> u32 {
        DateRange::new(self.check_in, self.check_out).map_or(0, |range| range.nights())
    }

    pub fn cancel(&mut self) {
        self.status = BookingStatus::Cancelled;
    }

    /// Status as of `today`: an upcoming stay whose check-out day has passed
    /// reads as completed.
    pub fn effective_status(&self, today: NaiveDate) -> BookingStatus {
        match self.status {
            BookingStatus::Upcoming if self.check_out < today => BookingStatus::Completed,
            status => status,
        }
    }
}
