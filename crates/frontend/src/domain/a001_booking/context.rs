use contracts::domain::a001_booking::{
    seed, Booking, BookingId, BookingRegistry, BookingStore, TaskId,
};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

/// In-memory bookings shared by the booking form and both dashboards.
#[derive(Clone, Copy)]
pub struct BookingContext {
    pub bookings: RwSignal<BookingRegistry>,
}

impl BookingContext {
    pub fn seeded() -> Self {
        Self {
            bookings: RwSignal::new(seed::demo_bookings()),
        }
    }

    /// Snapshot of one booking; reactive when read inside a view
    pub fn booking(&self, id: BookingId) -> Option<Booking> {
        self.bookings.with(|registry| registry.get(id).cloned())
    }

    /// First booking at call time; not tracked
    pub fn first_id(&self) -> Option<BookingId> {
        self.bookings.with_untracked(|registry| registry.first_id())
    }

    pub fn toggle_task(&self, booking_id: BookingId, task_id: TaskId) {
        self.bookings
            .update(|registry| registry.toggle_task(booking_id, task_id));
    }

    pub fn add_task(&self, booking_id: BookingId, description: &str) -> Option<TaskId> {
        self.bookings
            .try_update(|registry| registry.add_task(booking_id, description))
            .flatten()
    }

    pub fn mark_complete(&self, booking_id: BookingId) {
        self.bookings
            .update(|registry| registry.mark_complete(booking_id));
    }

    pub fn add_booking(&self, booking: Booking) {
        log::info!(
            "new booking {} for {}",
            booking.id.as_string(),
            booking.client_name
        );
        self.bookings.update(|registry| registry.upsert(booking));
    }
}

impl BookingStore for BookingContext {
    fn with_booking_mut(&self, id: BookingId, f: &mut dyn FnMut(&mut Booking)) -> bool {
        self.bookings
            .try_update(|registry| match registry.get_mut(id) {
                Some(booking) => {
                    f(booking);
                    true
                }
                None => false,
            })
            .unwrap_or(false)
    }
}

pub fn use_bookings() -> BookingContext {
    use_context::<BookingContext>().expect("BookingContext not found. Provide it in App.")
}
