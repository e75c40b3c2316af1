pub mod timezone;

pub use timezone::{format_date, format_datetime, format_stay, today_in_tz};
