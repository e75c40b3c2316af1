use chrono::{Datelike, NaiveDate};
use leptos::*;
use shared::{ClickOutcome, DateRange, DateRangeSelector, DayStatus, MonthSlot, NavigationMode};

use crate::i18n::use_i18n;

/// Two-month range picker. Reports each completed range through
/// `on_dates_select`; reseeds itself whenever the initial dates change.
#[component]
pub fn BookingCalendar(
    today: NaiveDate,
    #[prop(into)] on_dates_select: Callback<DateRange>,
    #[prop(optional, into)] initial_start: MaybeSignal<Option<NaiveDate>>,
    #[prop(optional, into)] initial_end: MaybeSignal<Option<NaiveDate>>,
    #[prop(optional)] navigation: NavigationMode,
) -> impl IntoView {
    let selector = create_rw_signal(DateRangeSelector::new(today).with_navigation(navigation));

    create_effect(move |_| {
        let start = initial_start.get();
        let end = initial_end.get();
        selector.update(|s| s.initialize(start, end));
    });

    let on_day_click = Callback::new(move |(day, pivot): (u32, NaiveDate)| {
        let outcome = selector.try_update(|s| s.click_day(Some(day), pivot));
        if let Some(ClickOutcome::Committed(range)) = outcome {
            on_dates_select.call(range);
        }
    });

    view! {
        <div class="booking-calendar">
            <MonthView selector=selector which=MonthSlot::First on_day_click=on_day_click />
            <MonthView selector=selector which=MonthSlot::Second on_day_click=on_day_click />
        </div>
    }
}

#[component]
fn MonthView(
    selector: RwSignal<DateRangeSelector>,
    which: MonthSlot,
    on_day_click: Callback<(u32, NaiveDate)>,
) -> impl IntoView {
    let i18n = use_i18n();
    let pivot = move || selector.with(|s| s.months().get(which));

    let title = {
        let i18n = i18n.clone();
        move || {
            let pivot = pivot();
            format!("{} {}", i18n.month_name(pivot.month0()), pivot.year())
        }
    };
    let weekday_labels = {
        let i18n = i18n.clone();
        move || {
            i18n.weekday_labels()
                .into_iter()
                .map(|label| view! { <div class="calendar-weekday">{label}</div> })
                .collect_view()
        }
    };

    let weeks = move || {
        let (pivot, weeks) = selector.with(|s| {
            let grid = s.month_grid(which);
            let weeks: Vec<Vec<_>> = grid
                .weeks()
                .map(|week| {
                    week.iter()
                        .map(|cell| (*cell, s.day_status(*cell, grid.pivot())))
                        .collect()
                })
                .collect();
            (grid.pivot(), weeks)
        });

        weeks
            .into_iter()
            .map(|week| {
                let cells = week
                    .into_iter()
                    .map(|(cell, status)| match cell {
                        None => view! { <div class="calendar-blank"></div> }.into_view(),
                        Some(day) => view! {
                            <button
                                type="button"
                                class=day_class(status)
                                disabled={!status.is_clickable()}
                                on:click=move |_| on_day_click.call((day, pivot))
                            >
                                {day}
                            </button>
                        }
                        .into_view(),
                    })
                    .collect_view();
                view! { <div class="calendar-week">{cells}</div> }
            })
            .collect_view()
    };

    view! {
        <div class="calendar-month">
            <div class="calendar-header">
                <button
                    type="button"
                    class="calendar-nav"
                    aria-label=i18n.t("calendar.previous")
                    on:click=move |_| selector.update(|s| s.navigate(-1, which))
                >
                    "‹"
                </button>
                <h3 class="calendar-title">{title}</h3>
                <button
                    type="button"
                    class="calendar-nav"
                    aria-label=i18n.t("calendar.next")
                    on:click=move |_| selector.update(|s| s.navigate(1, which))
                >
                    "›"
                </button>
            </div>
            <div class="calendar-weekdays">{weekday_labels}</div>
            <div class="calendar-grid">{weeks}</div>
        </div>
    }
}

fn day_class(status: DayStatus) -> &'static str {
    match status {
        DayStatus::Blank => "calendar-blank",
        DayStatus::Past => "calendar-day calendar-day-past",
        DayStatus::Selected => "calendar-day calendar-day-selected",
        DayStatus::InRange => "calendar-day calendar-day-in-range",
        DayStatus::Today => "calendar-day calendar-day-today",
        DayStatus::Available => "calendar-day",
    }
}
