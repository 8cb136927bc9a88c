//! # Tick Timestamps
//!
//! A `TickTimestamp` counts 100-nanosecond ticks since
//! `0001-01-01T00:00:00` (tick 0). It is an opaque tick count, not a zoned
//! time: no offset is ever applied, and calendar rendering treats the value
//! as a naive proleptic-Gregorian date-time.
//!
//! This is the convention some stores (MySQL row-version emulations among
//! them) use when a row version doubles as a modification time.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use vtypes_core::RowVersionError;

/// Number of ticks in one second.
pub const TICKS_PER_SECOND: i64 = 10_000_000;

/// Nanoseconds per tick.
const NANOS_PER_TICK: i64 = 100;

/// Seconds between tick 0 (`0001-01-01`) and the Unix epoch.
const SECONDS_TO_UNIX_EPOCH: i64 = 62_135_596_800;

/// `yyyy-MM-dd HH:mm:ss`
const SQL_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A signed count of 100ns ticks since `0001-01-01T00:00:00`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TickTimestamp(i64);

impl TickTimestamp {
    /// Tick 0, `0001-01-01T00:00:00`.
    pub const EPOCH: Self = Self(0);

    /// Wrap a raw tick count.
    pub const fn from_ticks(ticks: i64) -> Self {
        Self(ticks)
    }

    /// The raw tick count.
    pub const fn ticks(&self) -> i64 {
        self.0
    }

    /// Tick count of a naive date-time. Sub-tick precision is truncated.
    ///
    /// Returns `None` if the date-time is too far from tick 0 to fit in
    /// an `i64` tick count.
    pub fn from_naive_datetime(dt: NaiveDateTime) -> Option<Self> {
        let utc = dt.and_utc();
        let secs = utc.timestamp().checked_add(SECONDS_TO_UNIX_EPOCH)?;
        let sub_ticks = i64::from(utc.timestamp_subsec_nanos()) / NANOS_PER_TICK;
        secs.checked_mul(TICKS_PER_SECOND)?
            .checked_add(sub_ticks)
            .map(Self)
    }

    /// The naive date-time this tick count denotes.
    ///
    /// Returns `None` when the date lies outside chrono's supported range.
    pub fn to_naive_datetime(&self) -> Option<NaiveDateTime> {
        let secs = self.0.div_euclid(TICKS_PER_SECOND) - SECONDS_TO_UNIX_EPOCH;
        let nanos = (self.0.rem_euclid(TICKS_PER_SECOND) * NANOS_PER_TICK) as u32;
        DateTime::from_timestamp(secs, nanos).map(|dt| dt.naive_utc())
    }

    /// Render as `yyyy-MM-dd HH:mm:ss`.
    ///
    /// # Errors
    ///
    /// Returns [`RowVersionError::TimestampOutOfRange`] if the tick count
    /// has no calendar representation.
    pub fn to_sql_datetime(&self) -> Result<String, RowVersionError> {
        self.to_naive_datetime()
            .map(|dt| dt.format(SQL_DATETIME_FORMAT).to_string())
            .ok_or(RowVersionError::TimestampOutOfRange(self.0))
    }
}

impl std::fmt::Display for TickTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_naive_datetime() {
            Some(dt) => write!(f, "{}", dt.format(SQL_DATETIME_FORMAT)),
            None => write!(f, "ticks:{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn naive(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_epoch_renders_year_one() {
        assert_eq!(TickTimestamp::EPOCH.to_sql_datetime().unwrap(), "0001-01-01 00:00:00");
    }

    #[test]
    fn test_unix_epoch_ticks() {
        let ts = TickTimestamp::from_naive_datetime(naive(1970, 1, 1, 0, 0, 0)).unwrap();
        assert_eq!(ts.ticks(), 621_355_968_000_000_000);
    }

    #[test]
    fn test_known_date_roundtrip() {
        let dt = naive(2018, 1, 1, 0, 0, 0);
        let ts = TickTimestamp::from_naive_datetime(dt).unwrap();
        assert_eq!(ts.ticks(), 636_503_616_000_000_000);
        assert_eq!(ts.to_naive_datetime(), Some(dt));
        assert_eq!(ts.to_sql_datetime().unwrap(), "2018-01-01 00:00:00");
    }

    #[test]
    fn test_sub_second_ticks_truncate_in_sql_format() {
        let ts = TickTimestamp::from_ticks(636_503_616_000_000_000 + 12_345_678);
        assert_eq!(ts.to_sql_datetime().unwrap(), "2018-01-01 00:00:01");
    }

    #[test]
    fn test_negative_ticks_precede_year_one() {
        let ts = TickTimestamp::from_ticks(-TICKS_PER_SECOND);
        let dt = ts.to_naive_datetime().unwrap();
        assert_eq!(TickTimestamp::from_naive_datetime(dt), Some(ts));
    }

    #[test]
    fn test_extreme_ticks_render() {
        assert!(TickTimestamp::from_ticks(i64::MAX).to_sql_datetime().is_ok());
        assert!(TickTimestamp::from_ticks(i64::MIN).to_sql_datetime().is_ok());
    }

    #[test]
    fn test_display_matches_sql_format() {
        let ts = TickTimestamp::from_ticks(636_503_616_000_000_000);
        assert_eq!(ts.to_string(), "2018-01-01 00:00:00");
    }
}
