use std::cell::Cell;
use std::rc::Rc;

use chrono::NaiveDate;
use contracts::domain::a001_booking::request::{format_slot, parse_slot, slot_value, time_slots};
use contracts::domain::a001_booking::{BookingId, BookingRequest};
use contracts::enums::ServiceType;
use contracts::shared::flows::{SubmissionFlow, SubmitPhase};
use contracts::shared::scheduler::Scheduler;
use leptos::prelude::*;

use crate::domain::a001_booking::context::{use_bookings, BookingContext};
use crate::shared::config::use_app_config;
use crate::shared::date_utils;
use crate::shared::timers::{BrowserScheduler, TimerSlot};

/// ViewModel for the booking form
#[derive(Clone, Copy)]
pub struct BookingFormViewModel {
    pub form: RwSignal<BookingRequest>,
    pub phase: RwSignal<SubmitPhase>,
    slot_interval: u32,
    flow: SubmissionFlow,
    timer: TimerSlot,
    bookings: BookingContext,
}

impl BookingFormViewModel {
    pub fn new() -> Self {
        let config = use_app_config();
        Self {
            form: RwSignal::new(BookingRequest::default()),
            phase: RwSignal::new(SubmitPhase::Idle),
            slot_interval: config.booking.slot_interval_minutes,
            flow: SubmissionFlow::new(
                config.timings.submit_delay(),
                config.timings.success_visible(),
            ),
            timer: TimerSlot::new(),
            bookings: use_bookings(),
        }
    }

    /// `(value, label)` pairs for the time select
    pub fn slot_options(&self) -> Vec<(String, String)> {
        time_slots(self.slot_interval)
            .into_iter()
            .map(|slot| (slot_value(slot), format_slot(slot)))
            .collect()
    }

    pub fn set_service(&self, code: String) {
        self.form
            .update(|f| f.service_type = ServiceType::from_code(&code));
    }

    pub fn set_date(&self, value: String) {
        self.form.update(|f| f.date = date_utils::parse_input(&value));
    }

    pub fn set_time(&self, value: String) {
        self.form.update(|f| f.time = parse_slot(&value));
    }

    pub fn date_value(&self) -> String {
        self.form
            .with(|f| f.date.map(date_utils::input_value).unwrap_or_default())
    }

    pub fn time_value(&self) -> String {
        self.form.with(|f| f.time.map(slot_value).unwrap_or_default())
    }

    pub fn service_value(&self) -> String {
        self.form.with(|f| {
            f.service_type
                .map(|s| s.code().to_string())
                .unwrap_or_default()
        })
    }

    /// Validate and run the simulated submission. Invalid input is dropped
    /// without feedback; a confirmed request becomes an upcoming booking.
    pub fn submit_command(&self) {
        self.submit_with(&BrowserScheduler, date_utils::today());
    }

    pub fn submit_with<S>(&self, scheduler: &S, today: NaiveDate)
    where
        S: Scheduler + Clone + 'static,
    {
        if self.phase.get_untracked().is_loading() {
            return;
        }

        let request = self.form.get_untracked();
        let valid = match request.validate(today) {
            Ok(valid) => valid,
            Err(e) => {
                log::warn!("booking request rejected: {}", e);
                return;
            }
        };

        let pending = Rc::new(Cell::new(Some(valid)));
        let phase = self.phase;
        let form = self.form;
        let bookings = self.bookings;
        let handle = self.flow.start(scheduler, move |next| {
            phase.set(next);
            if next.is_submitted() {
                if let Some(valid) = pending.take() {
                    bookings.add_booking(valid.into_booking(BookingId::new_v4()));
                    form.set(BookingRequest::default());
                }
            }
        });
        self.timer.set(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_booking::BookingStatus;
    use contracts::shared::config::AppConfig;
    use contracts::shared::scheduler::ManualScheduler;
    use std::time::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 14).unwrap()
    }

    fn filled() -> BookingRequest {
        BookingRequest {
            name: "Grace Wanjiru".to_string(),
            email: "grace@example.com".to_string(),
            phone: "+254 700 000 000".to_string(),
            car_model: "Mazda Demio 2015".to_string(),
            service_type: Some(ServiceType::Diagnostics),
            date: Some(NaiveDate::from_ymd_opt(2025, 10, 20).unwrap()),
            time: parse_slot("09:30"),
        }
    }

    fn with_form<F: FnOnce(BookingFormViewModel, BookingContext)>(f: F) {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(AppConfig::default());
            let bookings = BookingContext::seeded();
            provide_context(bookings);
            f(BookingFormViewModel::new(), bookings);
        });
    }

    fn booking_count(bookings: BookingContext) -> usize {
        bookings.bookings.with_untracked(|r| r.bookings().len())
    }

    #[test]
    fn test_confirmed_request_adds_one_booking() {
        with_form(|vm, bookings| {
            let sched = ManualScheduler::new();
            let before = booking_count(bookings);
            vm.form.set(filled());

            vm.submit_with(&sched, today());
            assert_eq!(vm.phase.get_untracked(), SubmitPhase::Loading);
            assert_eq!(booking_count(bookings), before);

            sched.advance(Duration::from_millis(2500));
            assert_eq!(vm.phase.get_untracked(), SubmitPhase::Submitted);
            assert_eq!(booking_count(bookings), before + 1);
            assert_eq!(vm.form.get_untracked(), BookingRequest::default());

            sched.advance(Duration::from_millis(3000));
            assert_eq!(vm.phase.get_untracked(), SubmitPhase::Idle);
            assert_eq!(booking_count(bookings), before + 1);

            let added = bookings
                .bookings
                .with_untracked(|r| r.bookings().last().cloned())
                .unwrap();
            assert_eq!(added.client_name, "Grace Wanjiru");
            assert_eq!(added.status, BookingStatus::Upcoming);
            assert!(added.tasks.is_empty());
        });
    }

    #[test]
    fn test_submit_while_loading_is_ignored() {
        with_form(|vm, bookings| {
            let sched = ManualScheduler::new();
            let before = booking_count(bookings);
            vm.form.set(filled());

            vm.submit_with(&sched, today());
            vm.submit_with(&sched, today());
            sched.advance(Duration::from_secs(10));
            assert_eq!(booking_count(bookings), before + 1);
        });
    }

    #[test]
    fn test_invalid_request_never_starts() {
        with_form(|vm, bookings| {
            let sched = ManualScheduler::new();
            let before = booking_count(bookings);
            vm.form.set(BookingRequest {
                name: "   ".to_string(),
                ..filled()
            });

            vm.submit_with(&sched, today());
            assert_eq!(vm.phase.get_untracked(), SubmitPhase::Idle);
            assert_eq!(sched.pending_count(), 0);
            assert_eq!(booking_count(bookings), before);
        });
    }
}
