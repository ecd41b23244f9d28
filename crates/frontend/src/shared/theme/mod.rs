//! Theme management for the application.
//!
//! Resolution rules live in `contracts::shared::theme::ThemeState`; this module
//! wires them to localStorage, the document root and the OS color scheme.

use contracts::shared::theme::{Theme, ThemeState};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, MediaQueryList};

use crate::shared::config::use_app_config;
use crate::shared::i18n::use_locale;
use crate::shared::icons::icon;
use crate::shared::storage::LocalStorageStore;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

fn dark_scheme_query() -> Option<MediaQueryList> {
    window()?.match_media(DARK_SCHEME_QUERY).ok()?
}

/// Apply the theme class to `<html>` and the data attribute to `<body>`.
fn apply_theme(theme: Theme) {
    let document = match window().and_then(|w| w.document()) {
        Some(doc) => doc,
        None => return,
    };

    if let Some(root) = document.document_element() {
        let classes = root.class_list();
        let _ = classes.remove_2(Theme::Light.as_str(), Theme::Dark.as_str());
        let _ = classes.add_1(theme.as_str());
    }

    if let Some(body) = document.body() {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal.
    pub theme: RwSignal<Theme>,
    state: StoredValue<ThemeState<LocalStorageStore>, LocalStorage>,
}

impl ThemeContext {
    /// Set the theme explicitly and persist it.
    pub fn set_theme(&self, theme: Theme) {
        self.state.update_value(|state| state.set(theme));
        self.show(theme);
    }

    /// Get the current theme.
    pub fn get_theme(&self) -> Theme {
        self.theme.get()
    }

    /// Flip between light and dark and persist the choice.
    pub fn toggle(&self) {
        if let Some(theme) = self.state.try_update_value(|state| state.toggle()) {
            self.show(theme);
        }
    }

    fn on_os_change(&self, prefers_dark: bool) {
        let applied = self
            .state
            .try_update_value(|state| state.on_os_change(prefers_dark))
            .flatten();
        if let Some(theme) = applied {
            log::debug!("following OS color scheme: {}", theme.as_str());
            self.show(theme);
        }
    }

    fn show(&self, theme: Theme) {
        self.theme.set(theme);
        apply_theme(theme);
    }
}

/// Subscribe to OS color-scheme changes for the lifetime of the owner.
fn watch_os_scheme(ctx: ThemeContext) {
    let Some(query) = dark_scheme_query() else {
        return;
    };

    let source = query.clone();
    let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
        ctx.on_os_change(source.matches());
    });
    if query
        .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("could not subscribe to {}", DARK_SCHEME_QUERY);
        return;
    }

    let subscription = StoredValue::new_local(Some((query, listener)));
    on_cleanup(move || {
        if let Some((query, listener)) = subscription.try_update_value(|s| s.take()).flatten() {
            let _ = query
                .remove_event_listener_with_callback("change", listener.as_ref().unchecked_ref());
        }
    });
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let config = use_app_config();
    let os_prefers_dark = dark_scheme_query().map(|q| q.matches());
    let state = ThemeState::new(
        LocalStorageStore,
        config.preferences.theme_storage_key,
        os_prefers_dark,
    );
    let initial_theme = state.theme();
    apply_theme(initial_theme);

    let context = ThemeContext {
        theme: RwSignal::new(initial_theme),
        state: StoredValue::new_local(state),
    };
    provide_context(context);
    watch_os_scheme(context);

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Floating light/dark toggle.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();
    let locale = use_locale();

    view! {
        <button
            class=move || format!("theme-toggle theme-toggle--{}", ctx.theme.get().as_str())
            title=move || locale.t("toggleTheme")
            aria-label=move || locale.t("toggleTheme")
            on:click=move |_| ctx.toggle()
        >
            {move || if ctx.theme.get().is_dark() { icon("sun") } else { icon("moon") }}
        </button>
    }
}
