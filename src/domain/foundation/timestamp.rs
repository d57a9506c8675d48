//! Timestamp value object for immutable points in time.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Immutable point in time, always UTC, millisecond precision.
///
/// Serialized as epoch milliseconds, the unit used by votings and receipts
/// on the wire between holder nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(#[serde(with = "chrono::serde::ts_milliseconds")] DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from epoch milliseconds.
    pub fn from_millis(millis: i64) -> Result<Self, ValidationError> {
        Utc.timestamp_millis_opt(millis)
            .single()
            .map(Self)
            .ok_or_else(|| ValidationError::invalid_format("timestamp", format!("{} is out of range", millis)))
    }

    /// Creates a timestamp at UTC midnight of the given date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::default()).and_utc())
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the timestamp as epoch milliseconds.
    pub fn as_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Returns the UTC calendar date of this timestamp.
    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
    }

    /// Returns this timestamp truncated to UTC midnight.
    pub fn start_of_day(&self) -> Self {
        Self::from_date(self.date())
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339_opts(chrono::SecondsFormat::Millis, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    // 2016-03-01T12:34:56.789Z
    const MILLIS: i64 = 1_456_835_696_789;

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn timestamp_from_millis_roundtrips() {
        let ts = Timestamp::from_millis(MILLIS).unwrap();
        assert_eq!(ts.as_millis(), MILLIS);
        assert_eq!(ts.as_datetime().year(), 2016);
        assert_eq!(ts.as_datetime().month(), 3);
        assert_eq!(ts.as_datetime().day(), 1);
    }

    #[test]
    fn timestamp_from_millis_rejects_out_of_range() {
        assert!(Timestamp::from_millis(i64::MAX).is_err());
    }

    #[test]
    fn start_of_day_discards_time_of_day() {
        let ts = Timestamp::from_millis(MILLIS).unwrap().start_of_day();
        assert_eq!(ts.as_datetime().hour(), 0);
        assert_eq!(ts.as_datetime().minute(), 0);
        assert_eq!(ts.as_datetime().nanosecond(), 0);
        assert_eq!(ts.as_millis(), 1_456_790_400_000);
    }

    #[test]
    fn timestamp_serializes_as_epoch_millis() {
        let ts = Timestamp::from_millis(MILLIS).unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, MILLIS.to_string());
    }

    #[test]
    fn timestamp_deserializes_from_epoch_millis() {
        let ts: Timestamp = serde_json::from_str("1456835696789").unwrap();
        assert_eq!(ts.as_millis(), MILLIS);
    }

    #[test]
    fn timestamp_displays_as_rfc3339() {
        let ts = Timestamp::from_millis(MILLIS).unwrap();
        assert_eq!(ts.to_string(), "2016-03-01T12:34:56.789Z");
    }

    #[test]
    fn timestamp_ordering_works() {
        let ts1 = Timestamp::from_millis(1000).unwrap();
        let ts2 = Timestamp::from_millis(2000).unwrap();
        assert!(ts1 < ts2);
        assert!(ts1.is_before(&ts2));
        assert!(!ts2.is_before(&ts1));
    }
}
