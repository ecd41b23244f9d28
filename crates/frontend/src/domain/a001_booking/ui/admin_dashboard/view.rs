use contracts::domain::a001_booking::BookingId;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

use super::view_model::AdminDashboardViewModel;
use crate::domain::a001_booking::ui::task_list::TaskList;
use crate::shared::components::ui::{Button, Input, ProgressBar, Select, StatusBadge};
use crate::shared::i18n::{tr, use_locale};
use crate::shared::icons::icon;

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let vm = AdminDashboardViewModel::new();
    let locale = use_locale();

    let booking = Memo::new(move |_| vm.selected_booking());
    let selected_value = Signal::derive(move || {
        vm.selected
            .get()
            .map(|id: BookingId| id.as_string())
            .unwrap_or_default()
    });
    let percent = Signal::derive(move || {
        booking.with(|b| b.as_ref().map(|b| b.completion_percentage()).unwrap_or(0))
    });

    view! {
        <div class="page admin-dashboard">
            <header class="page__header">
                <h1 class="page__title">{tr("dashboardTitle")}</h1>
                <p class="page__subtitle">{tr("dashboardSubtitle")}</p>
            </header>

            <Select
                id="admin-booking"
                label=Signal::derive(tr("selectBooking"))
                value=selected_value
                options=Signal::derive(move || vm.booking_options())
                on_change=Callback::new(move |v: String| vm.select(v))
            />

            {move || booking.get().map(|b| {
                let heading = locale.t_with(
                    "clientCar",
                    &[("client", b.client_name.as_str()), ("car", b.vehicle_description.as_str())],
                );
                view! {
                    <section class="card">
                        <div class="card__header">
                            <h2 class="card__title">{icon("wrench")} {heading}</h2>
                            <StatusBadge status=b.status />
                        </div>
                        <ProgressBar percent=percent />
                    </section>
                }
            })}

            <section class="card">
                <TaskList booking_id=vm.selected />

                <form
                    class="form form--inline"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        vm.add_task_command();
                    }
                >
                    <Input
                        id="admin-new-task"
                        value=vm.new_task
                        placeholder=Signal::derive(tr("addTask"))
                        on_input=Callback::new(move |v: String| vm.new_task.set(v))
                    />
                    <Button button_type="submit" variant="secondary">
                        {tr("addTaskButton")}
                    </Button>
                </form>
            </section>

            <div class="actions">
                <Button on_click=Callback::new(move |_: leptos::ev::MouseEvent| vm.send_progress_command())>
                    {icon("send")}
                    <span>{tr("sendProgress")}</span>
                </Button>
                <Button
                    variant="success"
                    on_click=Callback::new(move |_: leptos::ev::MouseEvent| vm.mark_complete_command())
                >
                    {icon("check")}
                    <span>{tr("markComplete")}</span>
                </Button>
            </div>
        </div>
    }
}
