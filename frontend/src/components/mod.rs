pub mod booking_calendar;
pub mod guest_select;
pub mod navbar;
pub mod price_summary;
pub mod property_card;
pub mod toast;
