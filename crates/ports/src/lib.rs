//! Tempus Ports
//!
//! Port definitions (traits) for the tempus clock library.
//! These define the boundary between time-dependent code and time sources.

mod clock;

pub use clock::{Clock, SharedClock};
