use leptos::*;

use crate::i18n::{supported_languages, use_i18n};

#[component]
pub fn Navbar() -> impl IntoView {
    let i18n = use_i18n();

    let home_label = {
        let i18n = i18n.clone();
        move || i18n.t("nav.home")
    };
    let bookings_label = {
        let i18n = i18n.clone();
        move || i18n.t("nav.bookings")
    };
    let on_language_change = {
        let i18n = i18n.clone();
        move |event: ev::Event| i18n.set_language(&event_target_value(&event))
    };

    let language_options = supported_languages()
        .into_iter()
        .map(|(code, name)| {
            let i18n = i18n.clone();
            view! {
                <option value=code selected=move || i18n.current_language() == code>
                    {name}
                </option>
            }
        })
        .collect_view();

    view! {
        <nav class="navbar">
            <div class="container navbar-content">
                <a href="/" class="navbar-brand">{i18n.t("app.name")}</a>
                <div class="navbar-links">
                    <a href="/">{home_label}</a>
                    <a href="/bookings">{bookings_label}</a>
                    <select class="form-select navbar-language" on:change=on_language_change>
                        {language_options}
                    </select>
                </div>
            </div>
        </nav>
    }
}
