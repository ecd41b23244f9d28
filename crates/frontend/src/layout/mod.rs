pub mod footer;
pub mod navbar;

use leptos::prelude::*;

use crate::shared::theme::ThemeToggle;
use footer::Footer;
use navbar::Navbar;

/// Page chrome around the routed content.
///
/// ```text
/// +------------------------------------------+
/// |                 Navbar                   |
/// +------------------------------------------+
/// |                 content                  |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
/// plus the floating theme toggle.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Navbar />
            <main class="app-main">
                {children()}
            </main>
            <Footer />
            <ThemeToggle />
        </div>
    }
}
