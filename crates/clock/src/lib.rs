//! Tempus Clock Implementations
//!
//! Provides injectable time sources for production and testing:
//!
//! ## Clock Hierarchy
//!
//! ```text
//! SystemClock (wall-clock truth)
//!     │
//!     ├── LaggedClock (offset: ±d from its source)
//!     │       │
//!     │       └── LaggedClock (offsets stack, re-read per query)
//!     │
//!     └── FixedClock (one frozen reading)
//!
//! ManualClock (moves only when told)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use chrono::Duration;
//! use tempus_clock::{ops, FixedClock, SharedClock, SystemClock};
//!
//! // Freeze a test at a known instant
//! let epoch: SharedClock = Arc::new(FixedClock::default());
//!
//! // Derive manipulated views without touching the source
//! let later = ops::advance(epoch.clone(), Duration::hours(12));
//! let earlier = ops::revert(epoch.clone(), Duration::hours(12));
//!
//! // Freeze real time, then let it flow again from where it stopped
//! let frozen = ops::pause(&SystemClock::new());
//! let flowing = ops::resume(frozen.as_ref());
//! ```

mod fixed;
mod lagged;
mod manual;
mod system;

pub mod ops;

pub use fixed::FixedClock;
pub use lagged::LaggedClock;
pub use manual::ManualClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use tempus_ports::{Clock, SharedClock};
