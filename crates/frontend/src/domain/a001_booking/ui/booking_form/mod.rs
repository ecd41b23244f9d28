//! Booking request form.
//!
//! - view_model.rs: form state, validation and the simulated submission
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::BookingPage;
pub use view_model::BookingFormViewModel;
