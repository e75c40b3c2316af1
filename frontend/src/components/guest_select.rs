use leptos::*;

use crate::i18n::use_i18n;

/// Guest count dropdown.
#[component]
pub fn GuestSelect(
    #[prop(into)] value: RwSignal<u32>,
    options: Vec<u32>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <select
            class="form-select"
            id=id
            aria-label=i18n.t("guests")
            disabled=disabled
            on:change=move |ev| {
                if let Ok(count) = event_target_value(&ev).parse::<u32>() {
                    value.set(count);
                }
            }
        >
            {options.into_iter().map(|count| {
                let label = i18n.guests_label(count);
                view! {
                    <option
                        value=count.to_string()
                        selected=move || value.get() == count
                    >
                        {label}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
