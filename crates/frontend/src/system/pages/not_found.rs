use leptos::prelude::*;

use crate::shared::i18n::tr;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="page not-found">
            <h1 class="page__title">"404"</h1>
            <p>{tr("notFound")}</p>
            <a href="/" class="button button--primary">{tr("navHome")}</a>
        </div>
    }
}
