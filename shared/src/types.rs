use serde::{Deserialize, Serialize};

// ============================================================================
// Catalog Types
// ============================================================================

/// Guests selectable in the reservation form never exceed this.
pub const MAX_SELECTABLE_GUESTS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Host {
    pub name: String,
    #[serde(default)]
    pub is_superhost: bool,
    pub hosting_since: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub response_time: Option<String>,
    #[serde(default)]
    pub response_rate: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: u32,
    pub title: String,
    pub location: String,
    #[serde(default)]
    pub description: String,
    /// Nightly price for up to the base number of guests.
    pub price: u64,
    pub rating: f32,
    pub reviews: u32,
    /// Maximum number of guests the property sleeps.
    pub guests: u32,
    pub bedrooms: u32,
    pub beds: u32,
    pub bathrooms: u32,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub category: Vec<String>,
    pub host: Host,
    /// Check-in time, e.g. "15:00".
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
}

impl Property {
    /// Guest counts offered in the reservation form.
    pub fn guest_options(&self) -> impl Iterator<Item = u32> {
        1..=self.guests.clamp(1, MAX_SELECTABLE_GUESTS)
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

// ============================================================================
// Tests
// ============================================================================
