use leptos::prelude::*;

/// Horizontal completion bar with the percentage beside it
#[component]
pub fn ProgressBar(#[prop(into)] percent: Signal<u8>) -> impl IntoView {
    let width = move || format!("width: {}%", percent.get().min(100));

    view! {
        <div class="progress">
            <div
                class="progress__track"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=move || percent.get().to_string()
            >
                <div class="progress__fill" style=width></div>
            </div>
            <span class="progress__label">{move || format!("{}%", percent.get())}</span>
        </div>
    }
}
