//! Derived time-manipulation operations
//!
//! Pure functions composing the clock variants. Each call produces a new
//! clock; no operation mutates its input.

use std::sync::Arc;

use chrono::Duration;
use tempus_core::Timestamp;
use tempus_ports::{Clock, SharedClock};

use crate::{FixedClock, LaggedClock, SystemClock};

/// Create a clock advanced by the given duration from the given clock
///
/// Every query to the result reads `source.now() + delta` at that moment,
/// not a value captured at construction.
pub fn advance(source: SharedClock, delta: Duration) -> SharedClock {
    Arc::new(LaggedClock::new(source, delta))
}

/// Shorthand for [`advance`] with the duration negated
pub fn revert(source: SharedClock, delta: Duration) -> SharedClock {
    advance(source, -delta)
}

/// Create a clock that appears to have travelled to the given time
///
/// The offset is computed once, from the source's reading at the moment of
/// the call; afterwards the result advances at the source's own rate. Later
/// queries never re-derive the offset.
pub fn travel(source: SharedClock, target: Timestamp) -> SharedClock {
    let delta = target - source.now();
    advance(source, delta)
}

/// Freeze the given clock's current reading into a fixed clock
///
/// The source keeps flowing; the returned clock does not.
pub fn pause(source: &dyn Clock) -> SharedClock {
    Arc::new(FixedClock::new(source.now()))
}

/// Create a real-time clock starting from the given clock's current reading
///
/// Equivalent to travelling the system clock to `source.now()`: the result
/// advances at wall-clock rate from wherever `source` stood.
pub fn resume(source: &dyn Clock) -> SharedClock {
    travel(Arc::new(SystemClock::new()), source.now())
}
