//! Local persistence of bookings, favorites and recently viewed properties.
//!
//! Everything goes through [`KeyValueStore`], which stores JSON values under
//! string keys. The browser implementation wraps local storage; tests use
//! [`MemoryStore`].

use std::cell::RefCell;
use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::booking::BookingRecord;

pub const BOOKINGS_KEY: &str = "nexora-bookings";
pub const FAVORITES_KEY: &str = "nexora-favorites";
pub const RECENT_VIEWS_KEY: &str = "nexora-recent-views";

/// Recently viewed properties kept, most recent first.
pub const RECENT_VIEWS_LIMIT: usize = 10;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

pub trait KeyValueStore {
    /// Reads and decodes the value under `key`; `None` when absent.
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError>;

    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError>;

    fn remove(&self, key: &str);
}

/// In-memory store holding JSON-encoded values.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a raw string, bypassing encoding.
    #[cfg(test)]
    pub fn insert_raw(&self, key: &str, raw: impl Into<String>) {
        self.entries.borrow_mut().insert(key.to_string(), raw.into());
    }

    #[cfg(test)]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        self.entries
            .borrow()
            .get(key)
            .map(|raw| serde_json::from_str(raw))
            .transpose()
            .map_err(StorageError::from)
    }

    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        self.entries.borrow_mut().insert(key.to_string(), raw);
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Reads a list, treating a missing or corrupt entry as empty.
fn load_list<S: KeyValueStore, T: DeserializeOwned>(store: &S, key: &str) -> Vec<T> {
    match store.get::<Vec<T>>(key) {
        Ok(items) => items.unwrap_or_default(),
        Err(e) => {
            log::warn!("Discarding unreadable {}: {}", key, e);
            Vec::new()
        }
    }
}

// ============================================================================
// Bookings
// ============================================================================

pub struct BookingLedger<'a, S: KeyValueStore> {
    store: &'a S,
}

impl<'a, S: KeyValueStore> BookingLedger<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub fn all(&self) -> Vec<BookingRecord> {
        load_list(self.store, BOOKINGS_KEY)
    }

    pub fn record(&self, booking: BookingRecord) -> Result<(), StorageError> {
        let mut bookings = self.all();
        log::info!(
            "Recording booking {} for property {} ({} to {})",
            booking.id,
            booking.property_id,
            booking.check_in,
            booking.check_out
        );
        bookings.push(booking);
        self.store.set(BOOKINGS_KEY, &bookings)
    }

    /// Marks a booking cancelled. Returns `false` when no booking has `id`.
    pub fn cancel(&self, id: &str) -> Result<bool, StorageError> {
        let mut bookings = self.all();
        let Some(booking) = bookings.iter_mut().find(|booking| booking.id == id) else {
            return Ok(false);
        };
        booking.cancel();
        log::info!("Cancelled booking {}", id);
        self.store.set(BOOKINGS_KEY, &bookings)?;
        Ok(true)
    }
}

// ============================================================================
// Favorites
// ============================================================================

pub struct Favorites<'a, S: KeyValueStore> {
    store: &'a S,
}

impl<'a, S: KeyValueStore> Favorites<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub fn ids(&self) -> Vec<u32> {
        load_list(self.store, FAVORITES_KEY)
    }

    pub fn is_favorite(&self, property_id: u32) -> bool {
        self.ids().contains(&property_id)
    }

    /// Adds or removes a favorite. Returns whether it is now a favorite.
    pub fn toggle(&self, property_id: u32) -> Result<bool, StorageError> {
        let mut ids = self.ids();
        let now_favorite = if ids.contains(&property_id) {
            ids.retain(|id| *id != property_id);
            false
        } else {
            ids.push(property_id);
            true
        };
        self.store.set(FAVORITES_KEY, &ids)?;
        Ok(now_favorite)
    }
}

// ============================================================================
// Recent Views
// ============================================================================

pub struct RecentViews<'a, S: KeyValueStore> {
    store: &'a S,
}

impl<'a, S: KeyValueStore> RecentViews<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Property ids, most recently viewed first.
    pub fn ids(&self) -> Vec<u32> {
        load_list(self.store, RECENT_VIEWS_KEY)
    }

    pub fn add(&self, property_id: u32) -> Result<(), StorageError> {
        let mut ids = self.ids();
        ids.retain(|id| *id != property_id);
        ids.insert(0, property_id);
        ids.truncate(RECENT_VIEWS_LIMIT);
        self.store.set(RECENT_VIEWS_KEY, &ids)
    }

    pub fn clear(&self) {
        self.store.remove(RECENT_VIEWS_KEY);
    }
}
