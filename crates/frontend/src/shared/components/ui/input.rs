use leptos::prelude::*;

/// Labelled input. `value` is written as a DOM property so clearing the
/// signal also clears what the user typed.
#[component]
pub fn Input(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    /// "text" (default), "email", "tel", "date", ...
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Lower bound for date inputs
    #[prop(optional, into)]
    min: MaybeProp<String>,
    #[prop(optional)] disabled: bool,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] id: MaybeProp<String>,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                class=move || format!("form__input {}", class.get().unwrap_or_default())
                type=move || input_type.get().unwrap_or_else(|| "text".to_string())
                prop:value=move || value.get()
                placeholder=move || placeholder.get()
                min=move || min.get()
                disabled=disabled
                required=required
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
