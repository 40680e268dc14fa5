use std::sync::Arc;

use chrono::{Duration, Utc};
use log::debug;
use parking_lot::Mutex;
use tempus_core::Timestamp;
use tempus_ports::Clock;

/// Manually driven clock for deterministic tests
///
/// The reading moves only through explicit [`advance`](Self::advance) and
/// [`set_time`](Self::set_time) calls; no wall-clock time is consulted
/// after construction. Share the `Arc` with the code under test and drive
/// time from the test body.
pub struct ManualClock {
    /// Current reading
    current: Mutex<Timestamp>,
}

impl ManualClock {
    /// Create a new manual clock
    ///
    /// # Arguments
    /// * `initial` - Optional starting time. If None, uses current wall time.
    pub fn new(initial: Option<Timestamp>) -> Arc<Self> {
        let start = initial.unwrap_or_else(Utc::now);

        Arc::new(Self {
            current: Mutex::new(start),
        })
    }

    /// Advance the reading by the given duration
    pub fn advance(&self, delta: Duration) {
        let mut current = self.current.lock();
        *current += delta;
        debug!("manual clock advanced by {} to {}", delta, *current);
    }

    /// Explicitly set the reading
    ///
    /// Warning: This can cause time discontinuities. Use with caution.
    pub fn set_time(&self, time: Timestamp) {
        let mut current = self.current.lock();
        *current = time;
        debug!("manual clock set to {}", *current);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.current.lock()
    }

    fn name(&self) -> &str {
        "ManualClock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::thread;

    #[test]
    fn test_manual_clock_holds_still() {
        let t = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let clock = ManualClock::new(Some(t));

        let time1 = clock.now();
        thread::sleep(std::time::Duration::from_millis(10));
        let time2 = clock.now();

        assert_eq!(time1, time2);
        assert_eq!(time1, t);
    }

    #[test]
    fn test_manual_clock_advances_exactly() {
        let t = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let clock = ManualClock::new(Some(t));

        clock.advance(Duration::seconds(5));
        assert_eq!(clock.now(), t + Duration::seconds(5));

        // Negative deltas move the reading backwards.
        clock.advance(Duration::seconds(-10));
        assert_eq!(clock.now(), t - Duration::seconds(5));
    }

    #[test]
    fn test_manual_clock_set_time_jumps() {
        let t = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let past = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        let clock = ManualClock::new(Some(t));

        clock.set_time(past);
        assert_eq!(clock.now(), past);
    }

    #[test]
    fn test_manual_clock_defaults_to_wall_time() {
        let clock = ManualClock::new(None);
        let diff = clock.now() - Utc::now();
        assert!(diff.abs() <= Duration::milliseconds(500));
    }
}
