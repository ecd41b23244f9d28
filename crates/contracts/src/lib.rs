//! Domain types and platform-independent state logic for the garage
//! booking front-end.
//!
//! Everything here compiles natively as well as to wasm, so the booking
//! model, timers, theme resolution and text lookup are unit-tested without
//! a browser. The `frontend` crate wires browser collaborators into these
//! types.

pub mod domain;
pub mod enums;
pub mod shared;
