use contracts::enums::ServiceType;
use leptos::prelude::*;

use super::view_model::BookingFormViewModel;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::date_utils;
use crate::shared::i18n::{tr, use_locale};
use crate::shared::icons::icon;

#[component]
pub fn BookingPage() -> impl IntoView {
    let vm = BookingFormViewModel::new();
    let locale = use_locale();

    let service_options = Signal::derive(move || {
        ServiceType::all()
            .into_iter()
            .map(|s| (s.code().to_string(), locale.t(s.label_key())))
            .collect::<Vec<_>>()
    });
    let slot_options = vm.slot_options();
    let min_date = date_utils::input_value(date_utils::today());
    let loading = move || vm.phase.get().is_loading();

    view! {
        <div class="page booking-page">
            <header class="page__header">
                <h1 class="page__title">{tr("bookingTitle")}</h1>
                <p class="page__subtitle">{tr("bookingSubtitle")}</p>
            </header>

            <form
                class="form booking-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.submit_command();
                }
            >
                <Input
                    id="booking-name"
                    value=Signal::derive(move || vm.form.get().name)
                    placeholder=Signal::derive(tr("bookingName"))
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.name = v))
                />
                <Input
                    id="booking-email"
                    input_type="email"
                    value=Signal::derive(move || vm.form.get().email)
                    placeholder=Signal::derive(tr("bookingEmail"))
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.email = v))
                />
                <Input
                    id="booking-phone"
                    input_type="tel"
                    value=Signal::derive(move || vm.form.get().phone)
                    placeholder=Signal::derive(tr("bookingPhone"))
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.phone = v))
                />
                <Input
                    id="booking-car"
                    value=Signal::derive(move || vm.form.get().car_model)
                    placeholder=Signal::derive(tr("bookingCar"))
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.car_model = v))
                />
                <Select
                    id="booking-service"
                    value=Signal::derive(move || vm.service_value())
                    options=service_options
                    placeholder=Signal::derive(tr("bookingService"))
                    on_change=Callback::new(move |v: String| vm.set_service(v))
                />
                <div class="form__row">
                    <Input
                        id="booking-date"
                        input_type="date"
                        label=Signal::derive(tr("bookingDate"))
                        min=min_date
                        value=Signal::derive(move || vm.date_value())
                        on_input=Callback::new(move |v: String| vm.set_date(v))
                    />
                    <Select
                        id="booking-time"
                        label=Signal::derive(tr("bookingTime"))
                        value=Signal::derive(move || vm.time_value())
                        options=slot_options
                        placeholder=Signal::derive(tr("bookingTime"))
                        on_change=Callback::new(move |v: String| vm.set_time(v))
                    />
                </div>

                <Button button_type="submit" class="booking-form__submit" disabled=Signal::derive(loading)>
                    {move || if loading() {
                        view! { {icon("spinner")} <span>{locale.t("bookingProcessing")}</span> }.into_any()
                    } else {
                        view! { <span>{locale.t("bookingSubmit")}</span> }.into_any()
                    }}
                </Button>
            </form>

            <Show when=move || vm.phase.get().is_submitted()>
                <div class="modal-overlay">
                    <div class="modal booking-confirmation" role="status">
                        <div class="booking-confirmation__icon">{icon("check")}</div>
                        <h2>{tr("bookingConfirmedTitle")}</h2>
                        <p>{tr("bookingConfirmedText")}</p>
                    </div>
                </div>
            </Show>
        </div>
    }
}
