use leptos::*;
use shared::PriceBreakdown;

use crate::i18n::use_i18n;

pub fn format_price(amount: u64) -> String {
    format!("${}", amount)
}

/// Itemized cost of the selected stay.
#[component]
pub fn PriceSummary(#[prop(into)] breakdown: Signal<PriceBreakdown>) -> impl IntoView {
    let i18n = use_i18n();

    let nights_line = {
        let i18n = i18n.clone();
        move || {
            let b = breakdown.get();
            let unit = if b.nights == 1 { i18n.t("night") } else { i18n.t("nights") };
            format!("{} × {} {}", format_price(b.nightly_rate), b.nights, unit)
        }
    };

    view! {
        <div class="price-summary">
            <div class="price-row">
                <span>{nights_line}</span>
                <span>{move || format_price(breakdown.get().subtotal)}</span>
            </div>
            <div class="price-row">
                <span>{i18n.t("cleaning.fee")}</span>
                <span>{move || format_price(breakdown.get().cleaning_fee)}</span>
            </div>
            <div class="price-row">
                <span>{i18n.t("service.fee")}</span>
                <span>{move || format_price(breakdown.get().service_fee)}</span>
            </div>
            <div class="price-row price-total">
                <strong>{i18n.t("total")}</strong>
                <strong>{move || format_price(breakdown.get().total)}</strong>
            </div>
        </div>
    }
}
