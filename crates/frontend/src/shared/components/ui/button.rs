use leptos::prelude::*;

/// Button with a variant ("primary", "secondary", "success", "ghost") and a size ("md", "sm")
#[component]
pub fn Button(
    #[prop(optional, into)] variant: MaybeProp<String>,
    #[prop(optional, into)] size: MaybeProp<String>,
    #[prop(optional, into)] class: MaybeProp<String>,
    /// "button" unless given; forms pass "submit"
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional, into)] title: MaybeProp<String>,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        "success" => "button--success",
        "ghost" => "button--ghost",
        _ => "button--primary",
    };
    let size_class = move || match size.get().as_deref() {
        Some("sm") => "button--small",
        _ => "",
    };

    view! {
        <button
            type=move || button_type.get().unwrap_or_else(|| "button".to_string())
            class=move || {
                format!(
                    "button {} {} {}",
                    variant_class(),
                    size_class(),
                    class.get().unwrap_or_default(),
                )
            }
            title=move || title.get()
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
