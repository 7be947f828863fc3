//! Calendar epochs and their offset from J2000.0 (2000-01-01 12:00 UTC).

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use solar_core::constants::SECONDS_PER_DAY;

use crate::EphemerisError;

/// `NaiveDate::num_days_from_ce` of 2000-01-01.
const J2000_DAYS_FROM_CE: i32 = 730_120;
/// J2000.0 falls at noon.
const J2000_NOON_OFFSET_S: i64 = 43_200;

const DATE_FORMATS: &[&str] = &["%d%m%y", "%d/%m/%y", "%Y-%m-%d"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// A UTC calendar instant. Leap seconds are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Epoch(NaiveDateTime);

impl Epoch {
    /// Parse `ddmmyy`, `dd/mm/yy`, `YYYY-MM-DD`, or `YYYY-MM-DDTHH:MM:SS`.
    ///
    /// Two-digit years map 00–68 to 2000–2068 and 69–99 to 1969–1999.
    pub fn parse(text: &str) -> Result<Self, EphemerisError> {
        let trimmed = text.trim();
        for format in DATETIME_FORMATS {
            if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Ok(Self(datetime));
            }
        }
        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
                return Ok(Self(date.and_time(Default::default())));
            }
        }
        Err(EphemerisError::InvalidEpoch {
            epoch: text.to_string(),
        })
    }

    /// Midnight UTC on the given calendar day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, EphemerisError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(|date| Self(date.and_time(Default::default())))
            .ok_or_else(|| EphemerisError::InvalidEpoch {
                epoch: format!("{year:04}-{month:02}-{day:02}"),
            })
    }

    /// Seconds elapsed since J2000.0 (negative before it).
    pub fn seconds_since_j2000(&self) -> f64 {
        let days = i64::from(self.0.date().num_days_from_ce() - J2000_DAYS_FROM_CE);
        let seconds = i64::from(self.0.time().num_seconds_from_midnight());
        let whole = days * 86_400 + seconds - J2000_NOON_OFFSET_S;
        whole as f64 + f64::from(self.0.time().nanosecond()) * 1e-9
    }

    /// Days elapsed since J2000.0 (negative before it).
    pub fn days_since_j2000(&self) -> f64 {
        self.seconds_since_j2000() / SECONDS_PER_DAY
    }

    /// Shift by a (possibly fractional) number of days, at millisecond resolution.
    pub fn add_days(&self, days: f64) -> Result<Self, EphemerisError> {
        let out_of_range = || EphemerisError::EpochOutOfRange {
            from: self.to_string(),
            days,
        };
        let millis = (days * SECONDS_PER_DAY * 1_000.0).round();
        if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
            return Err(out_of_range());
        }
        TimeDelta::try_milliseconds(millis as i64)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Self)
            .ok_or_else(out_of_range)
    }

    /// Days from `self` to `later`.
    pub fn days_until(&self, later: &Epoch) -> f64 {
        (later.seconds_since_j2000() - self.seconds_since_j2000()) / SECONDS_PER_DAY
    }

    /// Compact `ddmmyy` rendering.
    pub fn format_compact(&self) -> String {
        self.0.format("%d%m%y").to_string()
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.time() == Default::default() {
            write!(f, "{}", self.0.format("%Y-%m-%d"))
        } else {
            write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S"))
        }
    }
}

impl FromStr for Epoch {
    type Err = EphemerisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_formats_agree() {
        let iso = Epoch::parse("2026-02-01").unwrap();
        assert_eq!(Epoch::parse("010226").unwrap(), iso);
        assert_eq!(Epoch::parse("01/02/26").unwrap(), iso);
        assert_eq!(Epoch::parse("2026-02-01T00:00:00").unwrap(), iso);
        assert_eq!(iso.format_compact(), "010226");
        assert_eq!(iso.to_string(), "2026-02-01");
    }

    #[test]
    fn j2000_offsets() {
        let noon = Epoch::parse("2000-01-01T12:00:00").unwrap();
        assert_eq!(noon.seconds_since_j2000(), 0.0);
        let midnight = Epoch::from_ymd(2000, 1, 1).unwrap();
        assert_eq!(midnight.days_since_j2000(), -0.5);
        let later = Epoch::from_ymd(2000, 1, 2).unwrap();
        assert_eq!(later.days_since_j2000(), 0.5);
    }

    #[test]
    fn adding_days_crosses_month_boundaries() {
        let launch = Epoch::from_ymd(2026, 2, 1).unwrap();
        let arrival = launch.add_days(200.0).unwrap();
        assert_eq!(arrival, Epoch::from_ymd(2026, 8, 20).unwrap());
        assert_eq!(launch.days_until(&arrival), 200.0);
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(
            Epoch::parse("next tuesday"),
            Err(EphemerisError::InvalidEpoch {
                epoch: "next tuesday".to_string()
            })
        );
        assert!(Epoch::parse("320126").is_err());
        assert!(Epoch::from_ymd(2026, 2, 30).is_err());
    }
}
