use leptos::prelude::*;

/// Checkbox with a trailing label; a checked box strikes the label through
#[component]
pub fn Checkbox(
    #[prop(into)] label: Signal<String>,
    #[prop(into)] checked: Signal<bool>,
    #[prop(optional)] on_change: Option<Callback<bool>>,
    #[prop(optional)] disabled: bool,
    #[prop(optional, into)] id: MaybeProp<String>,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    let checkbox_id = move || id.get().unwrap_or_default();
    let wrapper_class = move || {
        let mut classes = vec!["form__checkbox-wrapper".to_string()];
        if disabled {
            classes.push("form__checkbox-wrapper--disabled".to_string());
        }
        if checked.get() {
            classes.push("form__checkbox-wrapper--checked".to_string());
        }
        classes.extend(class.get());
        classes.join(" ")
    };

    view! {
        <div class=wrapper_class>
            <input
                id=checkbox_id
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                disabled=disabled
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <label class="form__checkbox-label" for=checkbox_id>
                {label}
            </label>
        </div>
    }
}
