pub mod bookings;
pub mod home;
pub mod property_detail;
