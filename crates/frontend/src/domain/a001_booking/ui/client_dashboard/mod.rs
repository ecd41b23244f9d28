//! Client view of their current booking: progress, checklist and summary.

use contracts::domain::a001_booking::{Booking, StatusSimulator};
use contracts::shared::flows::flash;
use leptos::prelude::*;

use crate::domain::a001_booking::context::use_bookings;
use crate::domain::a001_booking::ui::task_list::TaskList;
use crate::shared::components::ui::{Button, ProgressBar, StatusBadge};
use crate::shared::config::use_app_config;
use crate::shared::date_utils::{format_date, format_time};
use crate::shared::i18n::{tr, use_locale};
use crate::shared::icons::icon;
use crate::shared::timers::{BrowserScheduler, TimerSlot};

fn first_name(client_name: &str) -> &str {
    client_name.split_whitespace().next().unwrap_or(client_name)
}

#[component]
pub fn ClientDashboard() -> impl IntoView {
    let config = use_app_config();
    let bookings = use_bookings();
    let locale = use_locale();

    // The signed-in client is the first booking in the registry.
    let booking_id = bookings.first_id();
    let booking = Memo::new(move |_| booking_id.and_then(|id| bookings.booking(id)));

    let check_in = TimerSlot::new();
    if let Some(id) = booking_id {
        let simulator = StatusSimulator::new(config.timings.check_in_delay());
        check_in.set(simulator.start(&BrowserScheduler, bookings, id));
    }

    let request_sent = RwSignal::new(false);
    let ack_timer = TimerSlot::new();
    let ack_visible_for = config.timings.request_ack();
    let request_update = Callback::new(move |_: leptos::ev::MouseEvent| {
        ack_timer.set(flash(&BrowserScheduler, ack_visible_for, move |visible| {
            request_sent.set(visible)
        }));
    });

    let percent = Signal::derive(move || {
        booking.with(|b| b.as_ref().map(Booking::completion_percentage).unwrap_or(0))
    });

    view! {
        <div class="page client-dashboard">
            <Show
                when=move || booking.with(Option::is_some)
                fallback=move || view! { <p class="empty-state">{tr("noBookings")}</p> }
            >
                <header class="page__header">
                    <h1 class="page__title">
                        {tr("welcomeBack")} " "
                        <span class="accent">
                            {move || booking.with(|b| {
                                b.as_ref().map(|b| first_name(&b.client_name).to_string()).unwrap_or_default()
                            })}
                        </span>
                    </h1>
                    <p class="page__subtitle">{tr("clientSubtitle")}</p>
                </header>

                <section class="card">
                    <h2 class="card__title">{tr("currentProgress")}</h2>
                    <ProgressBar percent=percent />
                    <TaskList booking_id=Signal::derive(move || booking_id) />
                    <p class="card__meta">
                        {move || booking.with(|b| {
                            b.as_ref()
                                .map(|b| format!(
                                    "{}: {} · {}: {}",
                                    locale.t("taskComplete"),
                                    b.completed_count(),
                                    locale.t("taskPending"),
                                    b.pending_count(),
                                ))
                                .unwrap_or_default()
                        })}
                    </p>
                </section>

                <div class="actions">
                    <Button on_click=request_update>
                        {icon("send")}
                        <span>{tr("requestProgress")}</span>
                    </Button>
                </div>
                <Show when=move || request_sent.get()>
                    <div class="notice notice--success" role="status">{tr("requestSent")}</div>
                </Show>

                <section class="card booking-summary">
                    <h2 class="card__title">{tr("bookingSummary")}</h2>
                    {move || booking.get().map(|b| {
                        let status = b.status;
                        view! {
                            <dl class="booking-summary__grid">
                                <dt>{tr("summaryDate")}</dt>
                                <dd>{format_date(&b.scheduled_at)}</dd>
                                <dt>{tr("summaryTime")}</dt>
                                <dd>{format_time(&b.scheduled_at)}</dd>
                                <dt>{tr("summaryService")}</dt>
                                <dd>{locale.t(b.service_type.label_key())}</dd>
                                <dt>{tr("summaryStatus")}</dt>
                                <dd><StatusBadge status=status /></dd>
                            </dl>
                        }
                    })}
                </section>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_name() {
        assert_eq!(first_name("Athman Ibrahim"), "Athman");
        assert_eq!(first_name("  Linda  Kamau"), "Linda");
        assert_eq!(first_name(""), "");
    }
}
