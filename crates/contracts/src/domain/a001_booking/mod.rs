pub mod aggregate;
pub mod error;
pub mod registry;
pub mod request;
pub mod seed;
pub mod simulator;

pub use aggregate::{Booking, BookingId, BookingStatus, RepairTask, TaskId};
pub use error::BookingError;
pub use registry::{BookingRegistry, BookingStore};
pub use request::{BookingRequest, FormError, FormField, ValidBooking};
pub use simulator::StatusSimulator;
