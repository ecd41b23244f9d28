use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::a001_booking::ui::admin_dashboard::AdminDashboard;
use crate::domain::a001_booking::ui::booking_form::BookingPage;
use crate::domain::a001_booking::ui::client_dashboard::ClientDashboard;
use crate::layout::Shell;
use crate::system::pages::home::HomePage;
use crate::system::pages::not_found::NotFound;

/// Paths mirror `contracts::shared::navigation::AppRoute`.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/book") view=BookingPage />
                    <Route path=path!("/dashboard") view=ClientDashboard />
                    <Route path=path!("/admin") view=AdminDashboard />
                </Routes>
            </Shell>
        </Router>
    }
}
