use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use leptos::*;
use leptos_router::*;
use shared::{BookingLedger, BookingRecord, DateRange, Favorites, Property, RecentViews};

use crate::catalog::use_catalog;
use crate::components::booking_calendar::BookingCalendar;
use crate::components::guest_select::GuestSelect;
use crate::components::price_summary::{format_price, PriceSummary};
use crate::components::toast::{use_toasts, Toast};
use crate::config::Config;
use crate::i18n::use_i18n;
use crate::storage::BrowserStore;
use crate::utils::{format_stay, today_in_tz};

#[component]
pub fn PropertyDetailPage() -> impl IntoView {
    let params = use_params_map();
    let catalog = use_catalog();
    let i18n = use_i18n();

    let property = create_memo(move |_| {
        params
            .with(|p| p.get("id").and_then(|id| id.parse::<u32>().ok()))
            .and_then(|id| catalog.get(id))
    });

    move || match property.get() {
        Some(property) => view! { <PropertyDetail property=property /> }.into_view(),
        None => view! {
            <div class="empty-state">
                <h2>{i18n.t("property.not.found")}</h2>
                <p>{i18n.t("property.not.exist")}</p>
                <a href="/" class="btn btn-primary">{i18n.t("go.home")}</a>
            </div>
        }
        .into_view(),
    }
}

#[component]
fn PropertyDetail(property: Property) -> impl IntoView {
    let config = expect_context::<Config>();
    let i18n = use_i18n();
    let toasts = use_toasts();

    let property_id = property.id;
    let base_price = property.price;
    let pricing = config.pricing;
    let today = today_in_tz(&config.timezone);

    if let Err(e) = RecentViews::new(&BrowserStore).add(property_id) {
        log::warn!("Could not record recent view: {}", e);
    }

    let guests = create_rw_signal(1u32);
    let selected_range = create_rw_signal(Option::<DateRange>::None);
    let show_calendar = create_rw_signal(false);
    let is_reserving = create_rw_signal(false);
    let is_favorite = create_rw_signal(Favorites::new(&BrowserStore).is_favorite(property_id));

    // Recomputed whenever guests or dates change
    let breakdown = create_memo(move |_| {
        pricing.breakdown(base_price, guests.get(), selected_range.get().as_ref())
    });

    let on_dates_select = Callback::new(move |range: DateRange| {
        selected_range.set(Some(range));
        show_calendar.set(false);
    });

    let on_favorite_toggle = {
        let i18n = i18n.clone();
        move |_| match Favorites::new(&BrowserStore).toggle(property_id) {
            Ok(true) => {
                is_favorite.set(true);
                toasts.show(Toast::success(i18n.t("added.to.favorites")));
            }
            Ok(false) => {
                is_favorite.set(false);
                toasts.show(Toast::info(i18n.t("removed.from.favorites")));
            }
            Err(e) => toasts.show(Toast::error(e.to_string())),
        }
    };

    let on_reserve = {
        let i18n = i18n.clone();
        let delay_ms = config.reserve_delay_ms;
        move |_| {
            let current = breakdown.get();
            let Some(range) = selected_range.get().filter(|_| current.is_bookable()) else {
                toasts.show(Toast::warning(i18n.t("select.dates.first")));
                return;
            };

            is_reserving.set(true);
            let guest_count = guests.get();
            let i18n = i18n.clone();

            wasm_bindgen_futures::spawn_local(async move {
                // Simulated round trip before the booking is recorded
                TimeoutFuture::new(delay_ms).await;

                let result = BookingRecord::reserve(property_id, range, guest_count, &current, Utc::now())
                    .map_err(|e| e.to_string())
                    .and_then(|booking| {
                        BookingLedger::new(&BrowserStore)
                            .record(booking)
                            .map_err(|e| e.to_string())
                    });

                match result {
                    Ok(()) => {
                        toasts.show(Toast::success(format!(
                            "{} {}",
                            i18n.t("reservation.successful"),
                            format_stay(range.start(), range.end())
                        )));
                        selected_range.set(None);
                        guests.set(1);
                    }
                    Err(e) => {
                        log::error!("Reservation failed: {}", e);
                        toasts.show(Toast::error(i18n.t("reservation.failed")));
                    }
                }
                is_reserving.set(false);
            });
        }
    };

    let dates_label = {
        let i18n = i18n.clone();
        move || match selected_range.get() {
            Some(range) => format_stay(range.start(), range.end()),
            None => i18n.t("select.dates"),
        }
    };

    let favorite_label = {
        let i18n = i18n.clone();
        move || {
            if is_favorite.get() {
                format!("♥ {}", i18n.t("remove.from.favorites"))
            } else {
                format!("♡ {}", i18n.t("add.to.favorites"))
            }
        }
    };

    let extra_guest_note = {
        let i18n = i18n.clone();
        move || {
            let b = breakdown.get();
            (b.additional_guests > 0).then(|| {
                format!(
                    "{}: {} + {} × {}",
                    i18n.t("base"),
                    format_price(base_price),
                    format_price(pricing.extra_guest_fee),
                    i18n.guests_label(b.additional_guests)
                )
            })
        }
    };

    let reserve_label = {
        let i18n = i18n.clone();
        move || {
            if is_reserving.get() {
                i18n.t("reserving")
            } else {
                i18n.t("reserve")
            }
        }
    };

    let summary = format!(
        "{} {} · {} {} · {} {} · {} {}",
        property.guests,
        i18n.t("guests.plural"),
        property.bedrooms,
        i18n.t("bedrooms"),
        property.beds,
        i18n.t("beds"),
        property.bathrooms,
        i18n.t("bathrooms"),
    );

    let amenities = property
        .amenities
        .iter()
        .map(|amenity| view! { <li>{amenity.clone()}</li> })
        .collect_view();

    let check_times = match (property.check_in.clone(), property.check_out.clone()) {
        (None, None) => None,
        (check_in, check_out) => Some(view! {
            <div class="check-times">
                {check_in.map(|t| view! { <p><strong>{i18n.t("check.in")}": "</strong>{t}</p> })}
                {check_out.map(|t| view! { <p><strong>{i18n.t("check.out")}": "</strong>{t}</p> })}
            </div>
        }),
    };

    let guest_options: Vec<u32> = property.guest_options().collect();
    let host_line = format!("{} {}", i18n.t("hosted.by"), property.host.name);
    let superhost = property.host.is_superhost.then(|| i18n.t("superhost"));
    let rating_line = format!("★ {:.2} · {} {}", property.rating, property.reviews, i18n.t("reviews"));

    view! {
        <div class="property-detail">
            <div class="dashboard-header">
                <div>
                    <h1 class="dashboard-title">{property.title.clone()}</h1>
                    <p class="property-meta">{rating_line}" · "{property.location.clone()}</p>
                </div>
                <button type="button" class="btn btn-outline" on:click=on_favorite_toggle>
                    {favorite_label}
                </button>
            </div>

            <div class="property-gallery">
                {property.images.iter().take(5).map(|src| view! {
                    <img src=src.clone() alt=property.title.clone() loading="lazy" />
                }).collect_view()}
            </div>

            <div class="property-layout">
                <div class="property-info">
                    <h2>
                        {host_line}
                        {superhost.map(|label| view! { <span class="badge">{label}</span> })}
                    </h2>
                    <p class="property-summary">{summary}</p>
                    <p class="property-description">{property.description.clone()}</p>
                    <h3>{i18n.t("amenities")}</h3>
                    <ul class="amenities">{amenities}</ul>
                    {check_times}
                </div>

                <div class="card reservation-card">
                    <div class="reservation-price">
                        <strong>{format_price(base_price)}</strong>
                        {format!(" / {}", i18n.t("night"))}
                        <div class="reservation-note">{extra_guest_note}</div>
                    </div>

                    <button
                        type="button"
                        class="form-input reservation-dates"
                        aria-expanded=move || show_calendar.get().to_string()
                        on:click=move |_| show_calendar.update(|open| *open = !*open)
                    >
                        {dates_label}
                    </button>

                    <Show when=move || show_calendar.get() fallback=|| ()>
                        <BookingCalendar
                            today=today
                            on_dates_select=on_dates_select
                            initial_start=Signal::derive(move || selected_range.get().map(|r| r.start()))
                            initial_end=Signal::derive(move || selected_range.get().map(|r| r.end()))
                        />
                    </Show>

                    <div class="form-group">
                        <label class="form-label" for="guest-count">{i18n.t("guests")}</label>
                        <GuestSelect
                            value=guests
                            options=guest_options.clone()
                            id="guest-count"
                            disabled=Signal::derive(move || is_reserving.get())
                        />
                    </div>

                    <button
                        type="button"
                        class="btn btn-primary reservation-submit"
                        disabled=move || is_reserving.get() || !breakdown.get().is_bookable()
                        on:click=on_reserve
                    >
                        {reserve_label}
                    </button>

                    <Show when=move || breakdown.get().is_bookable() fallback=|| ()>
                        <PriceSummary breakdown=breakdown />
                    </Show>
                </div>
            </div>
        </div>
    }
}
