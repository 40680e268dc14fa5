use chrono::Utc;
use tempus_core::Timestamp;
use tempus_ports::Clock;

/// Real system clock for production use
///
/// This simply returns the current wall-clock time, unmodified.
/// Stateless, so it is safe to query from any number of threads
/// without coordination.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}
