use leptos::*;
use shared::Property;

use crate::components::price_summary::format_price;
use crate::i18n::use_i18n;

/// Catalog entry linking to the property page.
#[component]
pub fn PropertyCard(property: Property) -> impl IntoView {
    let i18n = use_i18n();
    let href = format!("/properties/{}", property.id);
    let image = property.cover_image().map(str::to_string);

    view! {
        <a href=href class="property-card">
            {image.map(|src| view! {
                <img class="property-card-image" src=src alt=property.title.clone() loading="lazy" />
            })}
            <div class="property-card-body">
                <div class="property-card-header">
                    <h3 class="property-card-title">{property.location.clone()}</h3>
                    <span class="property-card-rating">{format!("★ {:.2}", property.rating)}</span>
                </div>
                <p class="property-card-subtitle">{property.title.clone()}</p>
                <p class="property-card-price">
                    <strong>{format_price(property.price)}</strong>
                    {format!(" / {}", i18n.t("per.night"))}
                </p>
            </div>
        </a>
    }
}
