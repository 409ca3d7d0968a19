//! Clock-time and calendar-date values shared by every operation.
//!
//! Both types are thin wrappers over chrono's naive types. Parsing is
//! strict about separators and digit counts; chrono decides whether the
//! numbers form a real time or day.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Serialize, Serializer};

use crate::error::FormatError;

/// Minutes in one nominal day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Two-digit years are read as 2000 + YY.
const CENTURY_BASE: i32 = 2000;

// ── ClockTime ───────────────────────────────────────────────────────────────

/// A 24-hour wall-clock time with minute precision, parsed from `HH:MM`.
///
/// The hour may be written with one or two digits (`9:05`, `09:05`, and the
/// common break notation `1:00`). The minute always takes two digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Build a clock time, or `None` if `hour > 23` or `minute > 59`.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    pub fn minute(self) -> u32 {
        self.0.minute()
    }

    /// Minutes elapsed since midnight (0..1440).
    pub fn minute_of_day(self) -> i64 {
        i64::from(self.0.num_seconds_from_midnight() / 60)
    }

    /// Read the value as a length of time rather than a point in the day.
    ///
    /// Used for break allowances: `1:30` means ninety minutes.
    pub fn as_minutes(self) -> i64 {
        self.minute_of_day()
    }
}

impl FromStr for ClockTime {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid =
            || FormatError::InvalidTime(format!("'{s}': please enter the time in HH:MM format"));

        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        let hour = parse_digits(hour, 1, 2).ok_or_else(invalid)?;
        let minute = parse_digits(minute, 2, 2).ok_or_else(invalid)?;

        Self::new(hour, minute).ok_or_else(invalid)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ── CalendarDate ────────────────────────────────────────────────────────────

/// A calendar day in the 2000s, parsed from `YY/MM/DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from a two-digit year, or `None` if the day does not exist.
    pub fn new(yy: u32, month: u32, day: u32) -> Option<Self> {
        if yy > 99 {
            return None;
        }
        let year = CENTURY_BASE + i32::try_from(yy).ok()?;
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Full four-digit year.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// The same month and day one year later, or `None` for 29 February
    /// landing in a common year.
    pub fn next_year(self) -> Option<Self> {
        self.0.with_year(self.0.year() + 1).map(Self)
    }

    /// Whole days from `self` to `other` (negative if `other` is earlier).
    pub fn days_until(self, other: Self) -> i64 {
        (other.0 - self.0).num_days()
    }
}

impl FromStr for CalendarDate {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('/');
        let (Some(yy), Some(mm), Some(dd), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(FormatError::InvalidDate(format!(
                "'{s}': please enter the date in YY/MM/DD format"
            )));
        };

        let field = |part: &str| {
            parse_digits(part, 2, 2).ok_or_else(|| {
                FormatError::InvalidDate(format!("'{s}': please enter the date in YY/MM/DD format"))
            })
        };
        let (yy, mm, dd) = (field(yy)?, field(mm)?, field(dd)?);

        Self::new(yy, mm, dd)
            .ok_or_else(|| FormatError::InvalidDate(format!("'{s}': no such calendar day")))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%y/%m/%d"))
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ── Internal helpers ────────────────────────────────────────────────────────

/// Parse an all-ASCII-digit field whose length lies in `min..=max`.
fn parse_digits(part: &str, min: usize, max: usize) -> Option<u32> {
    if part.len() < min || part.len() > max || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

// ── Tests ───────────────────────────────────────────────────────────────────
