//! # Release Support Windows
//!
//! Models a release's declared support windows: the end-of-maintenance date
//! after which bug fixes stop, and the end-of-life date after which security
//! fixes stop. A support date names a month and year and is treated as an
//! inclusive deadline of 23:59:59 on the last day of that month.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Error raised when a support-date constant cannot be parsed
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseSupportDateError {
  /// The string was not in `MM/YYYY` form
  #[error("invalid support date `{0}`: expected MM/YYYY")]
  Malformed(String),

  /// The month component was outside 1-12
  #[error("invalid support date: month must be between 1 and 12, got {0}")]
  MonthOutOfRange(u32),

  /// The year component was outside 1-9999
  #[error("invalid support date: year must be between 1 and 9999, got {0}")]
  YearOutOfRange(i32),
}

/// The last day of a named month, as an inclusive deadline (23:59:59)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportDate {
  month: u32,
  year: i32,
}

impl SupportDate {
  /// Create a support date, validating the month and year components
  ///
  /// The year is bounded to four digits, matching the `MM/YYYY` constant
  /// form and keeping the deadline well inside chrono's calendar range.
  pub fn new(month: u32, year: i32) -> Result<Self, ParseSupportDateError> {
    if !(1..=12).contains(&month) {
      return Err(ParseSupportDateError::MonthOutOfRange(month));
    }
    if !(1..=9999).contains(&year) {
      return Err(ParseSupportDateError::YearOutOfRange(year));
    }
    Ok(Self { month, year })
  }

  /// The month component (1-12)
  pub fn month(&self) -> u32 {
    self.month
  }

  /// The year component
  pub fn year(&self) -> i32 {
    self.year
  }

  /// Number of days in this date's month, accounting for leap years
  pub fn last_day(&self) -> u32 {
    match self.month {
      1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
      4 | 6 | 9 | 11 => 30,
      _ => {
        if is_leap_year(self.year) {
          29
        } else {
          28
        }
      }
    }
  }

  /// The deadline instant: 23:59:59 on the last day of this month
  pub fn deadline(&self) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(self.year, self.month, self.last_day())
      .and_then(|day| day.and_hms_opt(23, 59, 59))
      .expect("month and year are validated on construction")
  }

  /// True iff `now` is strictly after 23:59:59 on the last day of the month
  pub fn is_expired(&self, now: NaiveDateTime) -> bool {
    now > self.deadline()
  }

  /// Whole-day difference between `now` and the deadline
  ///
  /// Positive while the deadline is in the future, zero on the deadline day
  /// itself, negative once it has passed. Callers format this as
  /// "in N days" / "N days ago".
  pub fn days_remaining(&self, now: NaiveDateTime) -> i64 {
    (self.deadline().date() - now.date()).num_days()
  }
}

impl fmt::Display for SupportDate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:02}/{}", self.month, self.year)
  }
}

impl FromStr for SupportDate {
  type Err = ParseSupportDateError;

  /// Parse a `MM/YYYY` support-date constant
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let (month, year) = s
      .split_once('/')
      .ok_or_else(|| ParseSupportDateError::Malformed(s.to_string()))?;
    let month = month
      .trim()
      .parse::<u32>()
      .map_err(|_err| ParseSupportDateError::Malformed(s.to_string()))?;
    let year = year
      .trim()
      .parse::<i32>()
      .map_err(|_err| ParseSupportDateError::Malformed(s.to_string()))?;
    Self::new(month, year)
  }
}

/// Gregorian leap-year rule
pub fn is_leap_year(year: i32) -> bool {
  (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Static metadata describing the running release
///
/// Everything here is supplied by the binary crate from compile-time
/// constants; the support-window calculations take `now` as an explicit
/// parameter so callers (and tests) control the clock.
#[derive(Debug, Clone)]
pub struct Release {
  /// Product name as shown in the about table
  pub name: String,
  /// Semver version string
  pub version: String,
  /// Whether this release line receives long-term support
  pub long_term_support: bool,
  /// Last month in which bug fixes are provided
  pub end_of_maintenance: SupportDate,
  /// Last month in which security fixes are provided
  pub end_of_life: SupportDate,
}

impl Release {
  /// True while the release is still within its maintenance window
  pub fn is_maintained(&self, now: NaiveDateTime) -> bool {
    !self.end_of_maintenance.is_expired(now)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
      .and_then(|d| d.and_hms_opt(hour, min, sec))
      .expect("valid test timestamp")
  }

  #[test]
  fn test_parse_support_date() {
    let date: SupportDate = "06/2026".parse().expect("valid date");
    assert_eq!(date.month(), 6);
    assert_eq!(date.year(), 2026);
    assert_eq!(date.to_string(), "06/2026");
  }

  #[test]
  fn test_parse_rejects_malformed_input() {
    assert!(matches!(
      "2026-06".parse::<SupportDate>(),
      Err(ParseSupportDateError::Malformed(_))
    ));
    assert!(matches!(
      "junk/2026".parse::<SupportDate>(),
      Err(ParseSupportDateError::Malformed(_))
    ));
    assert!(matches!(
      "13/2026".parse::<SupportDate>(),
      Err(ParseSupportDateError::MonthOutOfRange(13))
    ));
    assert!(matches!(
      "0/2026".parse::<SupportDate>(),
      Err(ParseSupportDateError::MonthOutOfRange(0))
    ));
  }

  #[test]
  fn test_rejects_years_outside_calendar_range() {
    // A five-digit year parses as an integer but is not a valid constant
    assert!(matches!(
      "06/999999".parse::<SupportDate>(),
      Err(ParseSupportDateError::YearOutOfRange(999_999))
    ));
    assert!(matches!(
      SupportDate::new(6, 0),
      Err(ParseSupportDateError::YearOutOfRange(0))
    ));
    assert!(matches!(
      SupportDate::new(6, -44),
      Err(ParseSupportDateError::YearOutOfRange(-44))
    ));

    // The bounds themselves are usable
    assert!(SupportDate::new(12, 9999).expect("valid date").is_expired(
      NaiveDate::from_ymd_opt(9999, 12, 31)
        .and_then(|d| d.and_hms_opt(23, 59, 59))
        .map(|deadline| deadline + chrono::Duration::seconds(1))
        .expect("valid test timestamp")
    ));
  }

  #[test]
  fn test_last_day_of_month() {
    let jan = SupportDate::new(1, 2025).expect("valid date");
    let apr = SupportDate::new(4, 2025).expect("valid date");
    assert_eq!(jan.last_day(), 31);
    assert_eq!(apr.last_day(), 30);
  }

  #[test]
  fn test_leap_year_february() {
    let feb_leap = SupportDate::new(2, 2024).expect("valid date");
    let feb_plain = SupportDate::new(2, 2025).expect("valid date");
    let feb_century = SupportDate::new(2, 2100).expect("valid date");
    let feb_quadricentennial = SupportDate::new(2, 2000).expect("valid date");

    assert_eq!(feb_leap.last_day(), 29);
    assert_eq!(feb_plain.last_day(), 28);
    assert_eq!(feb_century.last_day(), 28);
    assert_eq!(feb_quadricentennial.last_day(), 29);
  }

  #[test]
  fn test_expiry_boundary() {
    let date = SupportDate::new(6, 2026).expect("valid date");

    // Not expired up to and including the deadline instant itself
    assert!(!date.is_expired(at(2026, 6, 30, 23, 59, 58)));
    assert!(!date.is_expired(at(2026, 6, 30, 23, 59, 59)));

    // Expired from the first instant of the following day
    assert!(date.is_expired(at(2026, 7, 1, 0, 0, 0)));
  }

  #[test]
  fn test_leap_year_expiry_boundary() {
    let feb = SupportDate::new(2, 2024).expect("valid date");

    assert!(!feb.is_expired(at(2024, 2, 29, 23, 59, 59)));
    assert!(feb.is_expired(at(2024, 3, 1, 0, 0, 0)));
  }

  #[test]
  fn test_days_remaining() {
    let date = SupportDate::new(6, 2026).expect("valid date");

    // Zero on the deadline day, regardless of the time of day
    assert_eq!(date.days_remaining(at(2026, 6, 30, 0, 0, 0)), 0);
    assert_eq!(date.days_remaining(at(2026, 6, 30, 23, 0, 0)), 0);

    // Positive before, negative after
    assert_eq!(date.days_remaining(at(2026, 6, 29, 12, 0, 0)), 1);
    assert_eq!(date.days_remaining(at(2026, 6, 1, 0, 0, 0)), 29);
    assert_eq!(date.days_remaining(at(2026, 7, 1, 8, 0, 0)), -1);
  }

  #[test]
  fn test_days_remaining_decreases_monotonically() {
    let date = SupportDate::new(2, 2025).expect("valid date");

    let mut previous = date.days_remaining(at(2025, 2, 1, 12, 0, 0));
    for day in 2..=28 {
      let remaining = date.days_remaining(at(2025, 2, day, 12, 0, 0));
      assert!(remaining < previous, "remaining days should shrink each day");
      previous = remaining;
    }
    assert_eq!(previous, 0);
  }

  #[test]
  fn test_release_is_maintained() {
    let release = Release {
      name: "plinth".to_string(),
      version: "0.6.0".to_string(),
      long_term_support: false,
      end_of_maintenance: SupportDate::new(6, 2026).expect("valid date"),
      end_of_life: SupportDate::new(6, 2028).expect("valid date"),
    };

    assert!(release.is_maintained(at(2026, 6, 30, 23, 59, 59)));
    assert!(!release.is_maintained(at(2026, 7, 1, 0, 0, 0)));
  }
}
