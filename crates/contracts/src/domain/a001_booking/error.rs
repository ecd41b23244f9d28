use thiserror::Error;

use super::aggregate::{BookingId, BookingStatus, TaskId};

/// Failures of the strict booking operations.
///
/// The UI-facing operations swallow these and behave as no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("unknown booking {0:?}")]
    UnknownBooking(BookingId),

    #[error("booking {booking:?} has no task {task:?}")]
    UnknownTask { booking: BookingId, task: TaskId },

    #[error("task description is empty")]
    EmptyDescription,

    #[error("status cannot move from {from:?} back to {to:?}")]
    StatusRegression {
        from: BookingStatus,
        to: BookingStatus,
    },
}
