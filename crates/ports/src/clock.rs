use std::sync::Arc;

use tempus_core::Timestamp;

/// Port for time abstraction
///
/// This allows time-dependent code to use different time sources:
/// - Real system time for production
/// - Offset or frozen time for testing
/// - Manually driven time for deterministic tests
pub trait Clock: Send + Sync {
    /// Get the current time according to this clock
    ///
    /// Total and infallible: every clock answers every query.
    fn now(&self) -> Timestamp;

    /// Get the clock's name/identifier for debugging
    fn name(&self) -> &str {
        "Clock"
    }
}

/// Shared handle to a clock
///
/// One source clock may back any number of derived clocks at the same time,
/// so derivation works on a shared handle rather than an owned value.
pub type SharedClock = Arc<dyn Clock>;
