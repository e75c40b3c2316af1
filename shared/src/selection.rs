//! Two-sided date range selection for the booking calendar.
//!
//! [`DateRangeSelector`] turns a stream of day clicks into a committed
//! [`DateRange`]. Clicks on padding cells, on days that do not exist in the
//! pivot month, or on days before `today` are ignored without changing
//! state. The first valid click starts a range; a later click on a day
//! after the start commits it; a click on the start day or an earlier day
//! restarts the range from there. Once committed, the next valid click
//! starts over.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{add_months, date_in_month, month_start, MonthGrid};
use crate::range::DateRange;

/// Start and end of the selection in progress.
///
/// An end is only ever present together with a start that is not after it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSelectionState")]
pub struct SelectionState {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl SelectionState {
    pub const fn empty() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// Builds a state from externally supplied dates. An end without a
    /// start, or an end before the start, is dropped.
    pub fn seeded(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        let end = match (start, end) {
            (Some(s), Some(e)) if e >= s => Some(e),
            _ => None,
        };
        Self { start, end }
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// The committed range, if both ends are set.
    pub fn range(&self) -> Option<DateRange> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => DateRange::new(start, end).ok(),
            _ => None,
        }
    }

    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.start == Some(date) || self.end == Some(date)
    }

    /// Open interval: the boundaries themselves are never in range.
    pub fn is_in_range(&self, date: NaiveDate) -> bool {
        self.range().is_some_and(|range| range.contains_strictly(date))
    }
}

#[derive(Deserialize)]
struct RawSelectionState {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl From<RawSelectionState> for SelectionState {
    fn from(raw: RawSelectionState) -> Self {
        Self::seeded(raw.start, raw.end)
    }
}

/// Which of the two visible months an action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthSlot {
    First,
    Second,
}

/// How the two visible months move when navigated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavigationMode {
    /// Each month is navigated on its own.
    #[default]
    Independent,
    /// One pivot drives both months; the second always follows the first.
    Linked,
}

/// The pivot months currently rendered, each normalized to the 1st.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleMonths {
    pub first: NaiveDate,
    pub second: NaiveDate,
}

impl VisibleMonths {
    /// The month containing `date` and the one after it.
    pub fn starting_at(date: NaiveDate) -> Self {
        let first = month_start(date);
        Self {
            first,
            second: add_months(first, 1),
        }
    }

    pub fn get(&self, slot: MonthSlot) -> NaiveDate {
        match slot {
            MonthSlot::First => self.first,
            MonthSlot::Second => self.second,
        }
    }
}

/// What a day click did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Blank cell, nonexistent day, or a day before today.
    Ignored,
    /// A new range was started at this date; any previous range is gone.
    Started(NaiveDate),
    /// The range was completed.
    Committed(DateRange),
}

/// Rendering classification of a calendar cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    Blank,
    Past,
    Selected,
    InRange,
    Today,
    Available,
}

impl DayStatus {
    pub fn is_clickable(&self) -> bool {
        !matches!(self, DayStatus::Blank | DayStatus::Past)
    }
}

type RangeCallback = Box<dyn FnMut(DateRange)>;

pub struct DateRangeSelector {
    state: SelectionState,
    today: NaiveDate,
    months: VisibleMonths,
    navigation: NavigationMode,
    on_range_selected: Option<RangeCallback>,
}

impl fmt::Debug for DateRangeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateRangeSelector")
            .field("state", &self.state)
            .field("today", &self.today)
            .field("months", &self.months)
            .field("navigation", &self.navigation)
            .field("has_callback", &self.on_range_selected.is_some())
            .finish()
    }
}

impl DateRangeSelector {
    /// Empty selection showing the month of `today` and the next one.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            state: SelectionState::empty(),
            today,
            months: VisibleMonths::starting_at(today),
            navigation: NavigationMode::default(),
            on_range_selected: None,
        }
    }

    pub fn with_navigation(mut self, navigation: NavigationMode) -> Self {
        self.navigation = navigation;
        if navigation == NavigationMode::Linked {
            self.months = VisibleMonths::starting_at(self.months.first);
        }
        self
    }

    /// Registers the listener notified once per committed range.
    pub fn with_on_range_selected(mut self, callback: impl FnMut(DateRange) + 'static) -> Self {
        self.on_range_selected = Some(Box::new(callback));
        self
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn months(&self) -> VisibleMonths {
        self.months
    }

    pub fn navigation(&self) -> NavigationMode {
        self.navigation
    }

    /// Reseeds the selection, e.g. when the picker is reopened with a
    /// previously committed range. With a start date the calendar jumps to
    /// its month.
    pub fn initialize(&mut self, initial_start: Option<NaiveDate>, initial_end: Option<NaiveDate>) {
        self.state = SelectionState::seeded(initial_start, initial_end);
        if let Some(start) = initial_start {
            self.months = VisibleMonths::starting_at(start);
        }
        log::debug!("Selection initialized: {:?}", self.state);
    }

    pub fn navigate(&mut self, month_delta: i32, which: MonthSlot) {
        match (self.navigation, which) {
            (NavigationMode::Independent, MonthSlot::First) => {
                self.months.first = add_months(self.months.first, month_delta);
            }
            (NavigationMode::Independent, MonthSlot::Second) => {
                self.months.second = add_months(self.months.second, month_delta);
            }
            (NavigationMode::Linked, _) => {
                self.months = VisibleMonths::starting_at(add_months(self.months.first, month_delta));
            }
        }
    }

    pub fn month_grid(&self, which: MonthSlot) -> MonthGrid {
        MonthGrid::new(self.months.get(which))
    }

    pub fn click_day(&mut self, day: Option<u32>, pivot: NaiveDate) -> ClickOutcome {
        let Some(date) = day.and_then(|d| date_in_month(d, pivot)) else {
            log::trace!("Ignoring click on blank cell {:?} of {}", day, pivot);
            return ClickOutcome::Ignored;
        };

        if date < self.today {
            log::trace!("Ignoring click on past date {}", date);
            return ClickOutcome::Ignored;
        }

        match (self.state.start, self.state.end) {
            (Some(start), None) if date > start => {
                let Ok(range) = DateRange::new(start, date) else {
                    return ClickOutcome::Ignored;
                };
                self.state.end = Some(date);
                log::debug!("Range committed: {} to {}", start, date);
                if let Some(callback) = self.on_range_selected.as_mut() {
                    callback(range);
                }
                ClickOutcome::Committed(range)
            }
            _ => {
                self.state = SelectionState {
                    start: Some(date),
                    end: None,
                };
                log::debug!("Range started at {}", date);
                ClickOutcome::Started(date)
            }
        }
    }

    pub fn is_past(&self, day: u32, pivot: NaiveDate) -> bool {
        date_in_month(day, pivot).is_some_and(|date| date < self.today)
    }

    pub fn is_selected(&self, day: u32, pivot: NaiveDate) -> bool {
        date_in_month(day, pivot).is_some_and(|date| self.state.is_selected(date))
    }

    pub fn is_in_range(&self, day: u32, pivot: NaiveDate) -> bool {
        date_in_month(day, pivot).is_some_and(|date| self.state.is_in_range(date))
    }

    pub fn is_today(&self, day: u32, pivot: NaiveDate) -> bool {
        date_in_month(day, pivot) == Some(self.today)
    }

    pub fn day_status(&self, day: Option<u32>, pivot: NaiveDate) -> DayStatus {
        let Some(date) = day.and_then(|d| date_in_month(d, pivot)) else {
            return DayStatus::Blank;
        };

        if date < self.today {
            DayStatus::Past
        } else if self.state.is_selected(date) {
            DayStatus::Selected
        } else if self.state.is_in_range(date) {
            DayStatus::InRange
        } else if date == self.today {
            DayStatus::Today
        } else {
            DayStatus::Available
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn june() -> NaiveDate {
        date(2024, 6, 1)
    }

    /// Selector with today fixed to 2024-06-10 and a recording callback.
    fn recording_selector() -> (DateRangeSelector, Rc<RefCell<Vec<DateRange>>>) {
        let fired = Rc::new(RefCell::new(Vec::new()));
        let sink = fired.clone();
        let selector = DateRangeSelector::new(date(2024, 6, 10))
            .with_on_range_selected(move |range| sink.borrow_mut().push(range));
        (selector, fired)
    }

    #[test]
    fn test_start_then_commit() {
        let (mut selector, fired) = recording_selector();

        assert_eq!(selector.click_day(Some(15), june()), ClickOutcome::Started(date(2024, 6, 15)));
        assert_eq!(selector.state(), SelectionState::seeded(Some(date(2024, 6, 15)), None));
        assert!(fired.borrow().is_empty());

        let expected = DateRange::new(date(2024, 6, 15), date(2024, 6, 20)).unwrap();
        assert_eq!(selector.click_day(Some(20), june()), ClickOutcome::Committed(expected));
        assert_eq!(selector.state().range(), Some(expected));
        assert_eq!(*fired.borrow(), vec![expected]);
    }

    #[test]
    fn test_click_before_committed_start_restarts() {
        let (mut selector, fired) = recording_selector();
        selector.click_day(Some(15), june());
        selector.click_day(Some(20), june());

        assert_eq!(selector.click_day(Some(10), june()), ClickOutcome::Started(date(2024, 6, 10)));
        assert_eq!(selector.state().start(), Some(date(2024, 6, 10)));
        assert_eq!(selector.state().end(), None);
        assert_eq!(fired.borrow().len(), 1);
    }

    #[test]
    fn test_earlier_click_abandons_open_range() {
        let (mut selector, fired) = recording_selector();
        selector.click_day(Some(20), june());

        assert_eq!(selector.click_day(Some(12), june()), ClickOutcome::Started(date(2024, 6, 12)));
        assert_eq!(selector.state(), SelectionState::seeded(Some(date(2024, 6, 12)), None));
        assert!(fired.borrow().is_empty());
    }

    #[test]
    fn test_same_day_click_restarts_instead_of_zero_nights() {
        let (mut selector, fired) = recording_selector();
        selector.click_day(Some(15), june());

        assert_eq!(selector.click_day(Some(15), june()), ClickOutcome::Started(date(2024, 6, 15)));
        assert_eq!(selector.state().end(), None);
        assert!(fired.borrow().is_empty());
    }

    #[test]
    fn test_any_click_after_commit_starts_new_range() {
        for day in [11, 16, 20, 25] {
            let (mut selector, _) = recording_selector();
            selector.click_day(Some(15), june());
            selector.click_day(Some(20), june());

            selector.click_day(Some(day), june());
            assert_eq!(selector.state(), SelectionState::seeded(Some(date(2024, 6, day)), None));
        }
    }

    #[test]
    fn test_callback_fires_once_per_completed_range() {
        let (mut selector, fired) = recording_selector();
        selector.click_day(Some(15), june());
        selector.click_day(Some(20), june());
        selector.click_day(Some(22), june());
        selector.click_day(Some(2), date(2024, 7, 1));

        assert_eq!(
            *fired.borrow(),
            vec![
                DateRange::new(date(2024, 6, 15), date(2024, 6, 20)).unwrap(),
                DateRange::new(date(2024, 6, 22), date(2024, 7, 2)).unwrap(),
            ]
        );
    }

    #[test]
    fn test_past_and_blank_clicks_never_change_state() {
        let starting_states = [
            SelectionState::empty(),
            SelectionState::seeded(Some(date(2024, 6, 15)), None),
            SelectionState::seeded(Some(date(2024, 6, 15)), Some(date(2024, 6, 20))),
        ];

        for seed in starting_states {
            let (mut selector, fired) = recording_selector();
            selector.initialize(seed.start(), seed.end());

            assert_eq!(selector.click_day(Some(9), june()), ClickOutcome::Ignored);
            assert_eq!(selector.click_day(Some(1), june()), ClickOutcome::Ignored);
            assert_eq!(selector.click_day(Some(28), date(2024, 5, 1)), ClickOutcome::Ignored);
            assert_eq!(selector.click_day(None, june()), ClickOutcome::Ignored);
            assert_eq!(selector.click_day(Some(31), june()), ClickOutcome::Ignored);

            assert_eq!(selector.state(), seed);
            assert!(fired.borrow().is_empty());
        }
    }

    #[test]
    fn test_today_is_clickable() {
        let (mut selector, _) = recording_selector();
        assert!(!selector.is_past(10, june()));
        assert!(selector.is_past(9, june()));
        assert_eq!(selector.click_day(Some(10), june()), ClickOutcome::Started(date(2024, 6, 10)));
    }

    #[test]
    fn test_end_never_precedes_start() {
        // Deterministic pseudo-random walk over future days
        let (mut selector, _) = recording_selector();
        let mut seed: u32 = 7;
        for _ in 0..500 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let day = 10 + (seed >> 16) % 21;
            selector.click_day(Some(day), june());

            let state = selector.state();
            if let Some(end) = state.end() {
                let start = state.start().unwrap();
                assert!(start <= end);
            }
        }
    }

    #[test]
    fn test_same_clicks_same_states() {
        let clicks = [Some(15), Some(3), None, Some(18), Some(12), Some(30), Some(11), Some(11)];
        let run = || {
            let mut selector = DateRangeSelector::new(date(2024, 6, 10));
            clicks
                .iter()
                .map(|day| {
                    selector.click_day(*day, june());
                    selector.state()
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_selected_and_in_range_are_exclusive() {
        let (mut selector, _) = recording_selector();
        selector.click_day(Some(15), june());
        selector.click_day(Some(20), june());

        for day in 1..=30 {
            assert!(!(selector.is_selected(day, june()) && selector.is_in_range(day, june())));
        }
        assert!(selector.is_selected(15, june()));
        assert!(selector.is_selected(20, june()));
        assert!(selector.is_in_range(16, june()));
        assert!(selector.is_in_range(19, june()));
        assert!(!selector.is_in_range(15, june()));
        assert!(!selector.is_in_range(21, june()));
    }

    #[test]
    fn test_nothing_in_range_until_committed() {
        let (mut selector, _) = recording_selector();
        selector.click_day(Some(15), june());
        assert!(selector.is_selected(15, june()));
        assert!((1..=30).all(|day| !selector.is_in_range(day, june())));
    }

    #[test]
    fn test_is_today() {
        let selector = DateRangeSelector::new(date(2024, 6, 10));
        assert!(selector.is_today(10, june()));
        assert!(!selector.is_today(10, date(2024, 7, 1)));
        assert!(!selector.is_today(11, june()));
    }

    #[test]
    fn test_day_status_priority() {
        let (mut selector, _) = recording_selector();
        selector.click_day(Some(10), june());
        selector.click_day(Some(14), june());

        assert_eq!(selector.day_status(None, june()), DayStatus::Blank);
        assert_eq!(selector.day_status(Some(9), june()), DayStatus::Past);
        // Today is also the check-in day
        assert_eq!(selector.day_status(Some(10), june()), DayStatus::Selected);
        assert_eq!(selector.day_status(Some(12), june()), DayStatus::InRange);
        assert_eq!(selector.day_status(Some(14), june()), DayStatus::Selected);
        assert_eq!(selector.day_status(Some(15), june()), DayStatus::Available);

        let fresh = DateRangeSelector::new(date(2024, 6, 10));
        assert_eq!(fresh.day_status(Some(10), june()), DayStatus::Today);
        assert!(!DayStatus::Past.is_clickable());
        assert!(DayStatus::Today.is_clickable());
    }

    #[test]
    fn test_initialize_jumps_to_start_month() {
        let mut selector = DateRangeSelector::new(date(2024, 6, 10));
        selector.initialize(Some(date(2024, 9, 14)), Some(date(2024, 9, 18)));

        assert_eq!(selector.months().first, date(2024, 9, 1));
        assert_eq!(selector.months().second, date(2024, 10, 1));
        assert_eq!(
            selector.state().range(),
            Some(DateRange::new(date(2024, 9, 14), date(2024, 9, 18)).unwrap())
        );
    }

    #[test]
    fn test_initialize_drops_inconsistent_end() {
        let mut selector = DateRangeSelector::new(date(2024, 6, 10));
        selector.initialize(None, Some(date(2024, 9, 18)));
        assert_eq!(selector.state(), SelectionState::empty());
        assert_eq!(selector.months().first, date(2024, 6, 1));

        selector.initialize(Some(date(2024, 9, 18)), Some(date(2024, 9, 14)));
        assert_eq!(selector.state(), SelectionState::seeded(Some(date(2024, 9, 18)), None));
    }

    #[test]
    fn test_independent_navigation() {
        let mut selector = DateRangeSelector::new(date(2024, 6, 10));
        selector.navigate(1, MonthSlot::First);
        assert_eq!(selector.months().first, date(2024, 7, 1));
        assert_eq!(selector.months().second, date(2024, 7, 1));

        selector.navigate(3, MonthSlot::Second);
        assert_eq!(selector.months().first, date(2024, 7, 1));
        assert_eq!(selector.months().second, date(2024, 10, 1));

        selector.navigate(-1, MonthSlot::First);
        assert_eq!(selector.months().first, date(2024, 6, 1));
        assert_eq!(selector.months().second, date(2024, 10, 1));
    }

    #[test]
    fn test_linked_navigation_keeps_second_month_adjacent() {
        let mut selector =
            DateRangeSelector::new(date(2024, 12, 10)).with_navigation(NavigationMode::Linked);
        selector.navigate(1, MonthSlot::First);
        assert_eq!(selector.months().first, date(2025, 1, 1));
        assert_eq!(selector.months().second, date(2025, 2, 1));

        selector.navigate(-2, MonthSlot::Second);
        assert_eq!(selector.months().first, date(2024, 11, 1));
        assert_eq!(selector.months().second, date(2024, 12, 1));
    }

    #[test]
    fn test_range_across_both_visible_months() {
        let (mut selector, fired) = recording_selector();
        let second = selector.months().second;
        assert_eq!(second, date(2024, 7, 1));

        selector.click_day(Some(28), selector.months().first);
        selector.click_day(Some(3), second);

        assert_eq!(
            *fired.borrow(),
            vec![DateRange::new(date(2024, 6, 28), date(2024, 7, 3)).unwrap()]
        );
        assert!(selector.is_in_range(1, second));
        assert!(selector.is_in_range(30, june()));
    }

    #[test]
    fn test_month_grid_follows_visible_months() {
        let mut selector = DateRangeSelector::new(date(2024, 6, 10));
        assert_eq!(selector.month_grid(MonthSlot::First).pivot(), date(2024, 6, 1));
        selector.navigate(1, MonthSlot::Second);
        assert_eq!(selector.month_grid(MonthSlot::Second).pivot(), date(2024, 8, 1));
    }

    #[test]
    fn test_deserialized_state_keeps_end_after_start() {
        let orphan_end: SelectionState =
            serde_json::from_str(r#"{"start":null,"end":"2024-06-20"}"#).unwrap();
        assert_eq!(orphan_end, SelectionState::empty());

        let inverted: SelectionState =
            serde_json::from_str(r#"{"start":"2024-06-20","end":"2024-06-15"}"#).unwrap();
        assert_eq!(inverted.start(), Some(date(2024, 6, 20)));
        assert_eq!(inverted.end(), None);

        let valid: SelectionState =
            serde_json::from_str(r#"{"start":"2024-06-15","end":"2024-06-20"}"#).unwrap();
        assert_eq!(
            valid.range(),
            Some(DateRange::new(date(2024, 6, 15), date(2024, 6, 20)).unwrap())
        );
    }
}
