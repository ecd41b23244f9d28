//! Demo bookings the application starts with. There is no intake service,
//! so this is the whole data set until the booking form adds to it.

use chrono::{NaiveDate, NaiveDateTime};

use super::aggregate::{Booking, BookingId};
use super::registry::BookingRegistry;
use crate::enums::ServiceType;

fn at(y: i32, m: u32, d: u32, hh: u32, mm: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(hh, mm, 0))
        .unwrap_or_default()
}

/// The client shown on the client dashboard
pub fn athman_booking(id: BookingId) -> Booking {
    Booking::new(
        id,
        "Athman Ibrahim",
        "Toyota Premio 2018",
        ServiceType::Repairs,
        at(2025, 10, 15, 10, 30),
    )
    .with_task("Engine diagnostics", true)
    .with_task("Oil change", false)
    .with_task("Brake replacement", false)
    .with_task("Interior cleaning", false)
}

pub fn linda_booking(id: BookingId) -> Booking {
    Booking::new(
        id,
        "Linda Kamau",
        "Subaru Forester 2016",
        ServiceType::Maintenance,
        at(2025, 10, 16, 9, 0),
    )
    .with_task("Oil and filter change", true)
    .with_task("Tyre rotation", false)
    .with_task("Brake fluid check", false)
}

pub fn demo_bookings() -> BookingRegistry {
    BookingRegistry::new(vec![
        athman_booking(BookingId::new_v4()),
        linda_booking(BookingId::new_v4()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_booking::aggregate::BookingStatus;

    #[test]
    fn test_demo_data_shape() {
        let reg = demo_bookings();
        assert_eq!(reg.bookings().len(), 2);

        let first = &reg.bookings()[0];
        assert_eq!(first.client_name, "Athman Ibrahim");
        assert_eq!(first.status, BookingStatus::Upcoming);
        assert_eq!(first.tasks.len(), 4);
        assert_eq!(first.completion_percentage(), 25);
        assert_eq!(first.scheduled_at.format("%Y-%m-%d %H:%M").to_string(), "2025-10-15 10:30");
    }
}
