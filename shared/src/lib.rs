pub mod booking;
pub mod calendar;
pub mod pricing;
pub mod range;
pub mod selection;
pub mod storage;
mod types;

pub use booking::{BookingError, BookingRecord, BookingStatus};
pub use calendar::MonthGrid;
pub use pricing::{compute_breakdown, PriceBreakdown, PricingConfig};
pub use range::{DateRange, RangeError};
pub use selection::{
    ClickOutcome, DateRangeSelector, DayStatus, MonthSlot, NavigationMode, SelectionState,
    VisibleMonths,
};
pub use storage::{
    BookingLedger, Favorites, KeyValueStore, MemoryStore, RecentViews, StorageError,
};
pub use types::*;
