use contracts::domain::a001_booking::BookingStatus;
use leptos::prelude::*;

use crate::shared::i18n::use_locale;

/// Badge with a variant: "primary", "success", "warning", "error", "neutral" (default)
#[component]
pub fn Badge(
    #[prop(optional, into)] variant: MaybeProp<String>,
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    view! {
        <span class=move || format!("badge {} {}", variant_class(), class.get().unwrap_or_default())>
            {children()}
        </span>
    }
}

/// Localized booking status, colored by lifecycle stage
#[component]
pub fn StatusBadge(#[prop(into)] status: Signal<BookingStatus>) -> impl IntoView {
    let locale = use_locale();

    view! {
        <Badge
            variant=Signal::derive(move || status.get().badge_variant().to_string())
            class=Signal::derive(move || format!("badge--status-{}", status.get().code()))
        >
            {move || locale.t(status.get().label_key())}
        </Badge>
    }
}
