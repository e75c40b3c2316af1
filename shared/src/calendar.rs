//! Month grid generation for the booking calendar.
//!
//! A grid is laid out in Monday-first weeks: a run of blank cells pads the
//! days before the 1st, followed by one cell per day of the month.

use chrono::{Datelike, Duration, Months, NaiveDate};

/// Upper bound on the number of cells in a month grid (six full weeks).
pub const MAX_CELLS: usize = 42;

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

/// Shift a month pivot by `delta` months. The pivot is normalized to the
/// first of its month; out-of-range shifts leave it unchanged.
pub fn add_months(pivot: NaiveDate, delta: i32) -> NaiveDate {
    let start = month_start(pivot);
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        start.checked_add_months(months)
    } else {
        start.checked_sub_months(months)
    };
    shifted.unwrap_or(start)
}

/// Number of days in the month containing `pivot`.
pub fn days_in_month(pivot: NaiveDate) -> u32 {
    let start = month_start(pivot);
    start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// Blank cells before the 1st when weeks start on Monday.
pub fn leading_blanks(pivot: NaiveDate) -> u32 {
    month_start(pivot).weekday().num_days_from_monday()
}

/// Resolve a day number against a pivot month. Days that do not exist in
/// that month yield `None`.
pub fn date_in_month(day: u32, pivot: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(pivot.year(), pivot.month(), day)
}

/// The cells of one displayed month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pivot: NaiveDate,
    cells: Vec<Option<u32>>,
}

impl MonthGrid {
    pub fn new(pivot: NaiveDate) -> Self {
        let pivot = month_start(pivot);
        let blanks = leading_blanks(pivot) as usize;
        let days = days_in_month(pivot);

        let mut cells = Vec::with_capacity(blanks + days as usize);
        cells.extend(std::iter::repeat(None).take(blanks));
        cells.extend((1..=days).map(Some));

        Self { pivot, cells }
    }

    /// First day of the month this grid renders.
    pub fn pivot(&self) -> NaiveDate {
        self.pivot
    }

    pub fn cells(&self) -> &[Option<u32>] {
        &self.cells
    }

    pub fn leading_blanks(&self) -> usize {
        self.cells.iter().take_while(|cell| cell.is_none()).count()
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.pivot)
    }

    /// Cells grouped into Monday-first weeks; the last week may be short.
    pub fn weeks(&self) -> impl Iterator<Item = &[Option<u32>]> {
        self.cells.chunks(7)
    }
}
