use chrono::NaiveDate;
use leptos::*;
use leptos_router::use_query_map;
use shared::{BookingLedger, BookingRecord, BookingStatus};

use crate::catalog::use_catalog;
use crate::components::price_summary::format_price;
use crate::components::toast::{use_toasts, Toast};
use crate::config::Config;
use crate::i18n::use_i18n;
use crate::storage::BrowserStore;
use crate::utils::{format_datetime, format_stay, today_in_tz};

/// `None` shows every booking.
fn matches_filter(booking: &BookingRecord, filter: Option<BookingStatus>, today: NaiveDate) -> bool {
    filter.map_or(true, |status| booking.effective_status(today) == status)
}

/// Initial filter from a `?status=` query value; unknown values show all.
fn filter_from_query(value: Option<&str>) -> Option<BookingStatus> {
    value.and_then(|status| status.parse().ok())
}

fn status_key(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Upcoming => "status.upcoming",
        BookingStatus::Completed => "status.completed",
        BookingStatus::Cancelled => "status.cancelled",
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
pub fn BookingsPage() -> impl IntoView {
    let config = expect_context::<Config>();
    let catalog = use_catalog();
    let i18n = use_i18n();
    let toasts = use_toasts();

    let today = today_in_tz(&config.timezone);
    let timezone = store_value(config.timezone.clone());

    let bookings = create_rw_signal(BookingLedger::new(&BrowserStore).all());
    let query = use_query_map();
    let filter = create_rw_signal(
        query.with_untracked(|q| filter_from_query(q.get("status").map(String::as_str))),
    );

    let visible = create_memo(move |_| {
        let filter = filter.get();
        bookings.with(|all| {
            let mut list: Vec<BookingRecord> = all
                .iter()
                .filter(|booking| matches_filter(booking, filter, today))
                .cloned()
                .collect();
            list.sort_by(|a, b| b.booking_date.cmp(&a.booking_date));
            list
        })
    });

    let on_cancel = {
        let i18n = i18n.clone();
        Callback::new(move |id: String| {
            if !confirm(&i18n.t("cancel.booking.confirm")) {
                return;
            }
            let ledger = BookingLedger::new(&BrowserStore);
            match ledger.cancel(&id) {
                Ok(true) => {
                    bookings.set(ledger.all());
                    toasts.show(Toast::success(i18n.t("booking.cancelled")));
                }
                Ok(false) => log::warn!("Booking {} not found", id),
                Err(e) => toasts.show(Toast::error(e.to_string())),
            }
        })
    };

    let filter_buttons = [
        None,
        Some(BookingStatus::Upcoming),
        Some(BookingStatus::Completed),
        Some(BookingStatus::Cancelled),
    ]
    .into_iter()
    .map(|option| {
        let label = i18n.t(option.map_or("status.all", status_key));
        let class = move || {
            if filter.get() == option {
                "btn btn-primary"
            } else {
                "btn btn-outline"
            }
        };
        view! {
            <button
                type="button"
                class=class
                on:click=move |_| filter.set(option)
            >
                {label}
            </button>
        }
    })
    .collect_view();

    let list = {
        let i18n = i18n.clone();
        move || {
            let items = visible.get();
            if items.is_empty() {
                return view! {
                    <div class="empty-state">
                        <h2>{i18n.t("no.bookings")}</h2>
                        <p>{i18n.t("no.bookings.desc")}</p>
                        <a href="/" class="btn btn-primary">{i18n.t("explore.properties")}</a>
                    </div>
                }
                .into_view();
            }

            items
                .into_iter()
                .map(|booking| {
                    let status = booking.effective_status(today);
                    let title = catalog
                        .get(booking.property_id)
                        .map(|property| property.title)
                        .unwrap_or_else(|| format!("#{}", booking.property_id));
                    let booked_on = timezone.with_value(|tz| format_datetime(booking.booking_date, tz));
                    let id = booking.id.clone();

                    view! {
                        <div class="card booking-card">
                            <div class="booking-card-header">
                                <a href=format!("/properties/{}", booking.property_id)>{title}</a>
                                <span class=format!("badge badge-{}", status.as_str())>
                                    {i18n.t(status_key(status))}
                                </span>
                            </div>
                            <p>{format_stay(booking.check_in, booking.check_out)}</p>
                            <p>{i18n.guests_label(booking.guests)}" · "{format_price(booking.total_price)}</p>
                            <p class="booking-meta">{format!("{} {}", i18n.t("booked.on"), booked_on)}</p>
                            {(status == BookingStatus::Upcoming).then(|| view! {
                                <button
                                    type="button"
                                    class="btn btn-outline"
                                    on:click=move |_| on_cancel.call(id.clone())
                                >
                                    {i18n.t("cancel.booking")}
                                </button>
                            })}
                        </div>
                    }
                })
                .collect_view()
        }
    };

    view! {
        <div class="dashboard-header">
            <h1 class="dashboard-title">{i18n.t("my.bookings")}</h1>
        </div>
        <div class="booking-filters">{filter_buttons}</div>
        <div class="booking-list">{list}</div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn booking(check_out: NaiveDate, status: BookingStatus) -> BookingRecord {
        BookingRecord {
            id: "booking-1".to_string(),
            property_id: 0,
            check_in: date(2024, 6, 10),
            check_out,
            guests: 2,
            total_price: 396,
            status,
            booking_date: Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_no_filter_matches_everything() {
        let today = date(2024, 6, 1);
        assert!(matches_filter(&booking(date(2024, 6, 12), BookingStatus::Upcoming), None, today));
        assert!(matches_filter(&booking(date(2024, 6, 12), BookingStatus::Cancelled), None, today));
    }

    #[test]
    fn test_filter_uses_effective_status() {
        let past_stay = booking(date(2024, 6, 12), BookingStatus::Upcoming);
        let today = date(2024, 7, 1);

        assert!(matches_filter(&past_stay, Some(BookingStatus::Completed), today));
        assert!(!matches_filter(&past_stay, Some(BookingStatus::Upcoming), today));
    }

    #[test]
    fn test_cancelled_stays_cancelled() {
        let cancelled = booking(date(2024, 6, 12), BookingStatus::Cancelled);
        let today = date(2024, 7, 1);

        assert!(matches_filter(&cancelled, Some(BookingStatus::Cancelled), today));
        assert!(!matches_filter(&cancelled, Some(BookingStatus::Completed), today));
    }

    #[test]
    fn test_filter_from_query() {
        assert_eq!(filter_from_query(Some("upcoming")), Some(BookingStatus::Upcoming));
        assert_eq!(filter_from_query(Some("Canceled")), Some(BookingStatus::Cancelled));
        assert_eq!(filter_from_query(Some("pending")), None);
        assert_eq!(filter_from_query(None), None);
    }

    #[test]
    fn test_status_keys() {
        assert_eq!(status_key(BookingStatus::Upcoming), "status.upcoming");
        assert_eq!(status_key(BookingStatus::Cancelled), "status.cancelled");
    }
}
