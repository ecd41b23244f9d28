use leptos::prelude::*;

/// Labelled select over `(value, label)` pairs, with an optional empty
/// placeholder option shown while nothing is chosen
#[component]
pub fn Select(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional)] disabled: bool,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] id: MaybeProp<String>,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                class=move || format!("form__select {}", class.get().unwrap_or_default())
                disabled=disabled
                required=required
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                {move || placeholder.get().map(|text| view! {
                    <option value="" disabled=true selected=move || value.get().is_empty()>
                        {text}
                    </option>
                })}
                <For
                    each=move || options.get()
                    key=|(val, label)| (val.clone(), label.clone())
                    children=move |(val, label)| {
                        let current = val.clone();
                        view! {
                            <option value=val selected=move || value.get() == current>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
