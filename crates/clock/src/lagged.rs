use chrono::Duration;
use tempus_core::Timestamp;
use tempus_ports::{Clock, SharedClock};

/// Clock offset from another clock by a fixed duration
///
/// Every query re-reads the source and adds the offset, so the result
/// follows the source's flow rather than snapshotting it. The offset may
/// be negative to read behind the source.
pub struct LaggedClock {
    /// Source clock the offset applies to (shared, never exclusive)
    source: SharedClock,
    /// Offset from the source (positive = ahead, negative = behind)
    delta: Duration,
}

impl LaggedClock {
    /// Create a new lagged clock over the given source
    ///
    /// # Arguments
    /// * `source` - Handle to the source clock; may back other clocks too
    /// * `delta` - Offset from the source (positive = ahead, negative = behind)
    pub fn new(source: SharedClock, delta: Duration) -> Self {
        Self { source, delta }
    }

    /// Get the current offset
    pub fn delta(&self) -> Duration {
        self.delta
    }

    /// Get a handle to the underlying source clock
    pub fn source(&self) -> &SharedClock {
        &self.source
    }
}

impl Clock for LaggedClock {
    fn now(&self) -> Timestamp {
        self.source.now() + self.delta
    }

    fn name(&self) -> &str {
        "LaggedClock"
    }
}
