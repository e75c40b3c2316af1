use leptos::*;
use leptos_router::*;

use crate::catalog::provide_catalog;
use crate::components::navbar::Navbar;
use crate::components::toast::{provide_toasts, ToastHost};
use crate::config::Config;
use crate::i18n::provide_i18n;
use crate::pages::{bookings::BookingsPage, home::HomePage, property_detail::PropertyDetailPage};

#[component]
pub fn App(config: Config) -> impl IntoView {
    provide_context(config);
    // Default language; the navbar switches it at runtime
    provide_i18n("en".to_string());
    provide_catalog();
    let toasts = provide_toasts();

    view! {
        <Router>
            <Navbar />
            <main class="container">
                <Routes>
                    <Route path="/" view=HomePage />
                    <Route path="/properties/:id" view=PropertyDetailPage />
                    <Route path="/bookings" view=BookingsPage />
                </Routes>
            </main>
            <ToastHost toasts=toasts />
        </Router>
    }
}
