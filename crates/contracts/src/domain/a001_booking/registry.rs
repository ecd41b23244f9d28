use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::aggregate::{Booking, BookingId, TaskId};
use super::error::BookingError;
use crate::domain::common::AggregateId;

/// Authoritative in-memory list of bookings.
///
/// The plain operations are forgiving: unknown ids and blank input are
/// no-ops. The `try_*` forms report why nothing happened.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingRegistry {
    bookings: Vec<Booking>,
}

impl BookingRegistry {
    pub fn new(bookings: Vec<Booking>) -> Self {
        Self { bookings }
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    pub fn first_id(&self) -> Option<BookingId> {
        self.bookings.first().map(|b| b.id)
    }

    pub fn get(&self, id: BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: BookingId) -> Option<&mut Booking> {
        self.bookings.iter_mut().find(|b| b.id == id)
    }

    /// Add a booking, replacing any booking with the same id
    pub fn upsert(&mut self, booking: Booking) {
        match self.get_mut(booking.id) {
            Some(existing) => *existing = booking,
            None => self.bookings.push(booking),
        }
    }

    fn booking_mut(&mut self, id: BookingId) -> Result<&mut Booking, BookingError> {
        self.get_mut(id).ok_or(BookingError::UnknownBooking(id))
    }

    pub fn try_toggle_task(
        &mut self,
        booking_id: BookingId,
        task_id: TaskId,
    ) -> Result<bool, BookingError> {
        self.booking_mut(booking_id)?.toggle_task(task_id)
    }

    pub fn try_add_task(
        &mut self,
        booking_id: BookingId,
        description: &str,
    ) -> Result<TaskId, BookingError> {
        self.booking_mut(booking_id)?.add_task(description)
    }

    pub fn try_mark_complete(&mut self, booking_id: BookingId) -> Result<(), BookingError> {
        self.booking_mut(booking_id)?.mark_complete();
        Ok(())
    }

    pub fn toggle_task(&mut self, booking_id: BookingId, task_id: TaskId) {
        if let Err(e) = self.try_toggle_task(booking_id, task_id) {
            log::debug!("toggle_task ignored: {}", e);
        }
    }

    pub fn add_task(&mut self, booking_id: BookingId, description: &str) -> Option<TaskId> {
        self.try_add_task(booking_id, description)
            .map_err(|e| log::debug!("add_task ignored: {}", e))
            .ok()
    }

    pub fn mark_complete(&mut self, booking_id: BookingId) {
        if let Err(e) = self.try_mark_complete(booking_id) {
            log::debug!("mark_complete ignored: {}", e);
        }
    }

    /// `None` when the booking is unknown
    pub fn completion_percentage(&self, booking_id: BookingId) -> Option<u8> {
        self.get(booking_id).map(Booking::completion_percentage)
    }

    /// Lookup by the string form used in `<select>` values
    pub fn find_by_str(&self, id: &str) -> Option<&Booking> {
        BookingId::from_string(id).ok().and_then(|id| self.get(id))
    }
}

/// Shared, mutable access to bookings for code that runs later (timers).
pub trait BookingStore: Clone + 'static {
    /// Run `f` against the booking. Returns `false` when it does not exist.
    fn with_booking_mut(&self, id: BookingId, f: &mut dyn FnMut(&mut Booking)) -> bool;
}

impl BookingStore for Rc<RefCell<BookingRegistry>> {
    fn with_booking_mut(&self, id: BookingId, f: &mut dyn FnMut(&mut Booking)) -> bool {
        match self.borrow_mut().get_mut(id) {
            Some(booking) => {
                f(booking);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_booking::aggregate::BookingStatus;
    use crate::domain::a001_booking::seed;

    fn single() -> (BookingRegistry, BookingId) {
        let booking = seed::athman_booking(BookingId::new_v4());
        let id = booking.id;
        (BookingRegistry::new(vec![booking]), id)
    }

    #[test]
    fn test_unknown_ids_are_no_ops() {
        let (mut reg, id) = single();
        let before = reg.clone();

        reg.toggle_task(BookingId::new_v4(), TaskId(1));
        reg.toggle_task(id, TaskId(404));
        reg.mark_complete(BookingId::new_v4());
        assert_eq!(reg.add_task(BookingId::new_v4(), "Oil change"), None);

        assert_eq!(reg, before);
    }

    #[test]
    fn test_strict_forms_report_errors() {
        let (mut reg, id) = single();
        let ghost = BookingId::new_v4();
        assert_eq!(
            reg.try_toggle_task(ghost, TaskId(1)),
            Err(BookingError::UnknownBooking(ghost))
        );
        assert_eq!(reg.try_add_task(id, " "), Err(BookingError::EmptyDescription));
        assert_eq!(reg.try_mark_complete(ghost), Err(BookingError::UnknownBooking(ghost)));
    }

    #[test]
    fn test_blank_add_keeps_length() {
        let (mut reg, id) = single();
        assert_eq!(reg.add_task(id, ""), None);
        assert_eq!(reg.add_task(id, "   "), None);
        assert_eq!(reg.get(id).unwrap().tasks.len(), 4);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let (mut reg, id) = single();
        assert_eq!(reg.completion_percentage(id), Some(25));

        reg.toggle_task(id, TaskId(2));
        assert_eq!(reg.completion_percentage(id), Some(50));

        assert!(reg.add_task(id, "Wheel balancing").is_some());
        assert_eq!(reg.get(id).unwrap().tasks.len(), 5);
        assert_eq!(reg.completion_percentage(id), Some(40));

        reg.mark_complete(id);
        assert_eq!(reg.get(id).unwrap().status, BookingStatus::Complete);
        assert_eq!(reg.completion_percentage(id), Some(40));
    }

    #[test]
    fn test_find_by_str() {
        let (reg, id) = single();
        assert!(reg.find_by_str(&id.as_string()).is_some());
        assert!(reg.find_by_str("garbage").is_none());
    }

    #[test]
    fn test_upsert_replaces_same_id() {
        let (mut reg, id) = single();
        let mut copy = reg.get(id).unwrap().clone();
        copy.client_name = "Someone Else".into();
        reg.upsert(copy);
        assert_eq!(reg.bookings().len(), 1);
        assert_eq!(reg.get(id).unwrap().client_name, "Someone Else");
    }

    #[test]
    fn test_rc_store_reports_missing_booking() {
        let (reg, id) = single();
        let store = Rc::new(RefCell::new(reg));
        assert!(store.with_booking_mut(id, &mut |b| b.mark_complete()));
        assert!(!store.with_booking_mut(BookingId::new_v4(), &mut |_| {}));
        assert_eq!(store.borrow().get(id).unwrap().status, BookingStatus::Complete);
    }
}
