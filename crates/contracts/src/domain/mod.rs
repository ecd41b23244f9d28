pub mod a001_booking;
pub mod common;
