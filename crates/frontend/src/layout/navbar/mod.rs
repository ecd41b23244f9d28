//! Top navigation bar: brand, route links, locale switch and the mobile menu.

use contracts::shared::navigation::AppRoute;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::shared::i18n::{use_locale, LocaleToggle};
use crate::shared::icons::icon;

#[component]
pub fn Navbar() -> impl IntoView {
    let locale = use_locale();
    let location = use_location();
    let menu_open = RwSignal::new(false);

    let current = Memo::new(move |_| AppRoute::from_path(&location.pathname.get()));
    let link_class = move |route: AppRoute| {
        if current.get() == Some(route) {
            "navbar__link navbar__link--active"
        } else {
            "navbar__link"
        }
    };

    let links = move || {
        AppRoute::all()
            .into_iter()
            .map(|route| {
                view! {
                    <li on:click=move |_| menu_open.set(false)>
                        <A href=route.path() exact=true attr:class=move || link_class(route)>
                            {move || locale.t(route.label_key())}
                        </A>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <div class="navbar__brand">
                    <img class="navbar__logo" src="/assets/logo.jpg" alt="HagaGandi Logo" />
                    <span class="navbar__title">"HagaGandi"</span>
                </div>

                <ul class="navbar__links">{links()}</ul>

                <div class="navbar__actions">
                    <LocaleToggle />
                    <button
                        class="navbar__menu-toggle"
                        aria-label=move || locale.t("toggleMenu")
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { icon("close") } else { icon("menu") }}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <ul class="navbar__mobile">{links()}</ul>
            </Show>
        </nav>
    }
}
