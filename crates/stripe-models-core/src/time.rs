//! Unix timestamps and periods.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Seconds since the Unix epoch, the way the API sends every point in time.
pub type Timestamp = i64;

/// Convert a timestamp into a UTC datetime.
///
/// Returns `None` for values chrono cannot represent.
#[must_use]
pub fn to_datetime(timestamp: Timestamp) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(timestamp, 0)
}

/// Convert a UTC datetime into a timestamp, dropping sub-second precision.
#[must_use]
pub fn from_datetime(datetime: DateTime<Utc>) -> Timestamp {
    datetime.timestamp()
}

/// A half-open span of time between two timestamps.
#[skip_serializing_none]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Period {
    /// The end of the period, which must be greater than or equal to the start.
    pub end: Option<Timestamp>,
    /// The start of the period.
    pub start: Option<Timestamp>,
}

impl Period {
    /// Create a period from its bounds.
    #[must_use]
    pub const fn new(start: Timestamp, end: Timestamp) -> Self {
        Self {
            end: Some(end),
            start: Some(start),
        }
    }

    /// Length of the period when both bounds are known.
    #[must_use]
    pub fn duration(&self) -> Option<chrono::Duration> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(chrono::Duration::seconds(end - start)),
            _ => None,
        }
    }

    /// Whether `timestamp` falls inside the period.
    #[must_use]
    pub fn contains(&self, timestamp: Timestamp) -> bool {
        self.start.map_or(true, |start| timestamp >= start)
            && self.end.map_or(true, |end| timestamp < end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datetime_round_trip() {
        let dt = to_datetime(1_700_000_000).unwrap();
        assert_eq!(dt.to_rfc3339(), "2023-11-14T22:13:20+00:00");
        assert_eq!(from_datetime(dt), 1_700_000_000);
    }

    #[test]
    fn period_bounds() {
        let period = Period::new(100, 200);
        assert_eq!(period.duration(), Some(chrono::Duration::seconds(100)));
        assert!(period.contains(100));
        assert!(!period.contains(200));
        assert_eq!(Period::default().duration(), None);
    }
}
