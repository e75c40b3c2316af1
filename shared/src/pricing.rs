//! Price breakdown for a stay.
//!
//! All amounts are whole currency units. Percentage fees are computed with
//! exact integer arithmetic and rounded half up, so a breakdown is the same
//! on every platform.

use serde::{Deserialize, Serialize};

use crate::range::DateRange;

/// Fee schedule applied on top of a property's nightly price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Guests included in the nightly price.
    pub base_guests: u32,
    /// Nightly surcharge per guest beyond `base_guests`.
    pub extra_guest_fee: u64,
    pub cleaning_fee_percent: u32,
    pub service_fee_percent: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_guests: 2,
            extra_guest_fee: 15,
            cleaning_fee_percent: 15,
            service_fee_percent: 17,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub nightly_rate: u64,
    pub additional_guests: u32,
    pub nights: u32,
    pub subtotal: u64,
    pub cleaning_fee: u64,
    pub service_fee: u64,
    pub total: u64,
}

impl PriceBreakdown {
    /// A reservation may only be recorded for at least one night.
    pub fn is_bookable(&self) -> bool {
        self.nights > 0
    }
}

impl PricingConfig {
    /// Computes the breakdown for `guests` staying over `range`.
    ///
    /// A guest count of zero is treated as one guest. Without a range, or
    /// with a same-day range, the stay has no nights and every derived
    /// amount is zero.
    pub fn breakdown(&self, base_price: u64, guests: u32, range: Option<&DateRange>) -> PriceBreakdown {
        let guests = guests.max(1);
        let additional_guests = guests.saturating_sub(self.base_guests);
        let nightly_rate = base_price
            .saturating_add(u64::from(additional_guests).saturating_mul(self.extra_guest_fee));

        let nights = range.map_or(0, DateRange::nights);
        let subtotal = nightly_rate.saturating_mul(u64::from(nights));
        let cleaning_fee = percent_of(subtotal, self.cleaning_fee_percent);
        let service_fee = percent_of(subtotal, self.service_fee_percent);

        PriceBreakdown {
            nightly_rate,
            additional_guests,
            nights,
            subtotal,
            cleaning_fee,
            service_fee,
            total: subtotal.saturating_add(cleaning_fee).saturating_add(service_fee),
        }
    }
}

/// Breakdown under the default fee schedule.
pub fn compute_breakdown(base_price: u64, guests: u32, range: Option<&DateRange>) -> PriceBreakdown {
    PricingConfig::default().breakdown(base_price, guests, range)
}

/// `amount * percent / 100`, rounded half up.
fn percent_of(amount: u64, percent: u32) -> u64 {
    amount.saturating_mul(u64::from(percent)).saturating_add(50) / 100
}
