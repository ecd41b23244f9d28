//! Locale context and text lookup helpers for views.

use contracts::shared::i18n::{translate, translate_with, Locale};
use leptos::prelude::*;

use crate::shared::config::use_app_config;

/// Active locale. Session scoped: every reload starts from the configured default.
#[derive(Clone, Copy)]
pub struct LocaleContext {
    pub locale: RwSignal<Locale>,
}

impl LocaleContext {
    pub fn toggle(&self) {
        self.locale.update(|locale| *locale = locale.toggled());
        log::info!("locale switched to {}", self.locale.get_untracked().code());
    }

    /// Localized text for `key`; reactive when called inside a view closure.
    pub fn t(&self, key: &str) -> String {
        translate(self.locale.get(), key).to_string()
    }

    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        translate_with(self.locale.get(), key, args)
    }

    /// Lookup without subscribing, for event handlers.
    pub fn t_untracked(&self, key: &str) -> String {
        translate(self.locale.get_untracked(), key).to_string()
    }
}

#[component]
pub fn LocaleProvider(children: Children) -> impl IntoView {
    let config = use_app_config();
    provide_context(LocaleContext {
        locale: RwSignal::new(config.preferences.default_locale),
    });
    children()
}

pub fn use_locale() -> LocaleContext {
    use_context::<LocaleContext>().expect("LocaleContext not found. Wrap your app with LocaleProvider.")
}

/// Reactive text node for a fixed key: `{tr("navHome")}`
pub fn tr(key: &'static str) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    let ctx = use_locale();
    move || ctx.t(key)
}

/// Switches to the other locale; the label names the locale it switches to.
#[component]
pub fn LocaleToggle() -> impl IntoView {
    let ctx = use_locale();

    view! {
        <button
            class="button button--ghost locale-toggle"
            title=move || ctx.locale.get().toggled().display_name()
            on:click=move |_| ctx.toggle()
        >
            {move || ctx.locale.get().toggled().code().to_uppercase()}
        </button>
    }
}
