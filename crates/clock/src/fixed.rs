use tempus_core::Timestamp;
use tempus_ports::Clock;

/// Clock frozen at a single point in time
///
/// `now` returns the held timestamp on every query, no matter how much real
/// time passes. Use this where a test needs a time that never moves.
pub struct FixedClock {
    t: Timestamp,
}

impl FixedClock {
    /// Create a fixed clock reading the given time
    ///
    /// Any representable timestamp is accepted, including the zero value.
    pub fn new(t: Timestamp) -> Self {
        Self { t }
    }
}

/// A default fixed clock reads the zero timestamp (Unix epoch).
impl Default for FixedClock {
    fn default() -> Self {
        Self::new(Timestamp::default())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.t
    }

    fn name(&self) -> &str {
        "FixedClock"
    }
}
