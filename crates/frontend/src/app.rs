use crate::domain::a001_booking::context::BookingContext;
use crate::routes::routes::AppRoutes;
use crate::shared::config::provide_app_config;
use crate::shared::i18n::LocaleProvider;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Configuration first: the providers below read it.
    provide_app_config();

    // Bookings are shared by the client and admin dashboards.
    provide_context(BookingContext::seeded());

    view! {
        <ThemeProvider>
            <LocaleProvider>
                <AppRoutes />
            </LocaleProvider>
        </ThemeProvider>
    }
}
