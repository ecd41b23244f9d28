use contracts::domain::a001_booking::{Booking, BookingId};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use web_sys::window;

use crate::domain::a001_booking::context::{use_bookings, BookingContext};
use crate::shared::i18n::{use_locale, LocaleContext};

/// Browser alert standing in for a notification to the client
fn notify(message: &str) {
    if let Some(w) = window() {
        let _ = w.alert_with_message(message);
    }
}

/// ViewModel for the admin dashboard
#[derive(Clone, Copy)]
pub struct AdminDashboardViewModel {
    pub selected: RwSignal<Option<BookingId>>,
    pub new_task: RwSignal<String>,
    bookings: BookingContext,
    locale: LocaleContext,
}

impl AdminDashboardViewModel {
    pub fn new() -> Self {
        let bookings = use_bookings();
        Self {
            selected: RwSignal::new(bookings.first_id()),
            new_task: RwSignal::new(String::new()),
            bookings,
            locale: use_locale(),
        }
    }

    pub fn selected_booking(&self) -> Option<Booking> {
        self.selected.get().and_then(|id| self.bookings.booking(id))
    }

    /// Labels for the booking selector
    pub fn booking_options(&self) -> Vec<(String, String)> {
        let locale = self.locale;
        self.bookings.bookings.with(|registry| {
            registry
                .bookings()
                .iter()
                .map(|b| {
                    let label = format!(
                        "{} — {} ({})",
                        b.client_name,
                        locale.t(b.service_type.label_key()),
                        locale.t(b.status.label_key()),
                    );
                    (b.id.as_string(), label)
                })
                .collect()
        })
    }

    pub fn select(&self, value: String) {
        let id = self
            .bookings
            .bookings
            .with_untracked(|registry| registry.find_by_str(&value).map(|b| b.id));
        if id.is_none() {
            log::debug!("unknown booking selected: {}", value);
        }
        self.selected.set(id);
    }

    pub fn add_task_command(&self) {
        let Some(id) = self.selected.get_untracked() else {
            return;
        };
        let description = self.new_task.get_untracked();
        if self.bookings.add_task(id, &description).is_some() {
            self.new_task.set(String::new());
        }
    }

    pub fn send_progress_command(&self) {
        if let Some(booking) = self.selected_untracked() {
            notify(&format!(
                "{} {}",
                self.locale.t_untracked("progressUpdate"),
                booking.client_name
            ));
        }
    }

    /// Completes the booking whatever the state of its tasks.
    pub fn mark_complete_command(&self) {
        let Some(booking) = self.selected_untracked() else {
            return;
        };
        self.bookings.mark_complete(booking.id);
        notify(&format!(
            "{} {}",
            self.locale.t_untracked("completionAlert"),
            booking.client_name
        ));
    }

    fn selected_untracked(&self) -> Option<Booking> {
        let id = self.selected.get_untracked()?;
        self.bookings
            .bookings
            .with_untracked(|registry| registry.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::i18n::Locale;

    fn with_dashboard<F: FnOnce(AdminDashboardViewModel, BookingContext)>(f: F) {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(LocaleContext {
                locale: RwSignal::new(Locale::En),
            });
            let bookings = BookingContext::seeded();
            provide_context(bookings);
            f(AdminDashboardViewModel::new(), bookings);
        });
    }

    fn task_count(vm: AdminDashboardViewModel) -> usize {
        vm.selected_untracked().map(|b| b.tasks.len()).unwrap_or(0)
    }

    #[test]
    fn test_add_task_clears_input_on_success() {
        with_dashboard(|vm, _| {
            let before = task_count(vm);
            vm.new_task.set("  Wheel alignment ".to_string());
            vm.add_task_command();

            assert_eq!(task_count(vm), before + 1);
            assert_eq!(vm.new_task.get_untracked(), "");
            let added = vm.selected_untracked().and_then(|b| b.tasks.last().cloned());
            assert_eq!(added.map(|t| t.description), Some("Wheel alignment".to_string()));
        });
    }

    #[test]
    fn test_blank_task_keeps_input_and_list() {
        with_dashboard(|vm, _| {
            let before = task_count(vm);
            vm.new_task.set("   ".to_string());
            vm.add_task_command();

            assert_eq!(task_count(vm), before);
            assert_eq!(vm.new_task.get_untracked(), "   ");
        });
    }

    #[test]
    fn test_select_switches_booking() {
        with_dashboard(|vm, bookings| {
            let second = bookings
                .bookings
                .with_untracked(|r| r.bookings()[1].id);
            vm.select(second.as_string());
            assert_eq!(vm.selected.get_untracked(), Some(second));

            vm.select("not-a-booking".to_string());
            assert_eq!(vm.selected.get_untracked(), None);
        });
    }
}
