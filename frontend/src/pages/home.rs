use leptos::*;
use shared::RecentViews;

use crate::catalog::use_catalog;
use crate::components::property_card::PropertyCard;
use crate::i18n::use_i18n;
use crate::storage::BrowserStore;

#[component]
pub fn HomePage() -> impl IntoView {
    let i18n = use_i18n();
    let catalog = use_catalog();

    let recent: Vec<_> = RecentViews::new(&BrowserStore)
        .ids()
        .into_iter()
        .filter_map(|id| catalog.get(id))
        .collect();

    let cards = catalog
        .all()
        .iter()
        .cloned()
        .map(|property| view! { <PropertyCard property=property /> })
        .collect_view();

    let recent_section = (!recent.is_empty()).then(|| {
        view! {
            <h2 class="section-title">{i18n.t("recently.viewed")}</h2>
            <ul class="recent-views">
                {recent.iter().map(|property| {
                    let href = format!("/properties/{}", property.id);
                    view! { <li><a href=href>{property.title.clone()}</a></li> }
                }).collect_view()}
            </ul>
        }
    });

    view! {
        <div class="dashboard-header">
            <h1 class="dashboard-title">{i18n.t("home.title")}</h1>
        </div>

        <div class="property-grid">{cards}</div>

        {recent_section}
    }
}
