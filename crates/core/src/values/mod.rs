use chrono::{DateTime, Utc};

/// Point in time, in UTC
///
/// The zero value (`Timestamp::default()`) is the Unix epoch.
pub type Timestamp = DateTime<Utc>;
