use std::time::Duration;

use super::aggregate::{BookingId, BookingStatus};
use super::registry::BookingStore;
use crate::domain::common::AggregateId;
use crate::shared::scheduler::{Scheduler, TaskHandle};

/// Stand-in for a technician checking the car in: moves an upcoming
/// booking to active once, after a fixed delay.
#[derive(Debug, Clone, Copy)]
pub struct StatusSimulator {
    delay: Duration,
}

impl StatusSimulator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule the check-in. Dropping the returned handle cancels it.
    pub fn start<S, B>(&self, scheduler: &S, store: B, booking_id: BookingId) -> TaskHandle
    where
        S: Scheduler + ?Sized,
        B: BookingStore,
    {
        scheduler.schedule(
            self.delay,
            Box::new(move || {
                let found = store.with_booking_mut(booking_id, &mut |booking| {
                    if booking.status == BookingStatus::Upcoming {
                        let _ = booking.advance_status(BookingStatus::Active);
                    }
                });
                if !found {
                    log::debug!("check-in skipped, booking {} is gone", booking_id.as_string());
                }
            }),
        )
    }
}
