//! Elapsed time between clock times and elapsed days between dates.
//!
//! # Functions
//!
//! - [`time_duration`] — Gross and break-deducted minutes between two `HH:MM` times
//! - [`date_duration`] — Whole days between two `YY/MM/DD` dates
//!
//! Both apply a wraparound rule instead of reporting a negative span: an end
//! time earlier than the start is read as falling on the next day, and an end
//! date earlier than the start is read as falling in the next year.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::clock::{CalendarDate, ClockTime, MINUTES_PER_DAY};
use crate::error::{FormatError, Result};

// ── MinuteSpan ──────────────────────────────────────────────────────────────

/// A signed count of minutes with its hours/minutes decomposition.
///
/// Decomposition uses floor division, so `minutes` is always in `0..60` and
/// a negative span borrows from `hours`: -30 minutes is `hours = -1,
/// minutes = 30`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MinuteSpan {
    pub hours: i64,
    pub minutes: i64,
    pub total_minutes: i64,
}

impl MinuteSpan {
    pub fn from_minutes(total_minutes: i64) -> Self {
        Self {
            hours: total_minutes.div_euclid(60),
            minutes: total_minutes.rem_euclid(60),
            total_minutes,
        }
    }

    /// Human-readable form, e.g. `"8 hours, 15 minutes"` or `"-30 minutes"`.
    pub fn human_readable(&self) -> String {
        let abs = self.total_minutes.unsigned_abs();
        let (hours, minutes) = (abs / 60, abs % 60);

        let mut parts = Vec::new();
        if hours > 0 {
            parts.push(format!("{} hour{}", hours, if hours == 1 { "" } else { "s" }));
        }
        if minutes > 0 || parts.is_empty() {
            parts.push(format!(
                "{} minute{}",
                minutes,
                if minutes == 1 { "" } else { "s" }
            ));
        }

        let sign = if self.total_minutes < 0 { "-" } else { "" };
        format!("{sign}{}", parts.join(", "))
    }
}

/// `HH:MM (N minutes)`, the layout the duration readout has always used.
///
/// Negative spans print a sign before the absolute value (`-00:30`), not the
/// floored fields.
impl fmt::Display for MinuteSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.total_minutes.unsigned_abs();
        let sign = if self.total_minutes < 0 { "-" } else { "" };
        write!(
            f,
            "{sign}{:02}:{:02} ({} minutes)",
            abs / 60,
            abs % 60,
            self.total_minutes
        )
    }
}

// ── time_duration ───────────────────────────────────────────────────────────

/// Gross and net working time for one shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DurationResult {
    /// Time between start and end, never negative.
    pub total: MinuteSpan,
    /// `total` minus the break. Negative when the break is longer than the shift.
    pub net: MinuteSpan,
}

/// Compute the duration of a shift from `HH:MM` strings.
///
/// `brk` is itself written as `HH:MM` and read as a length (`1:00` is an
/// hour off).
///
/// # Errors
///
/// Returns [`FormatError::InvalidTime`] if any of the three strings is not a
/// valid `HH:MM` time.
///
/// # Examples
///
/// ```
/// use shift_engine::duration::time_duration;
///
/// let result = time_duration("22:00", "06:00", "0:30").unwrap();
/// assert_eq!(result.total.total_minutes, 480);
/// assert_eq!(result.net.hours, 7);
/// assert_eq!(result.net.minutes, 30);
/// ```
pub fn time_duration(start: &str, end: &str, brk: &str) -> Result<DurationResult> {
    let start: ClockTime = start.parse()?;
    let end: ClockTime = end.parse()?;
    let brk: ClockTime = brk.parse()?;
    Ok(time_duration_between(start, end, brk))
}

/// Typed form of [`time_duration`] for callers holding parsed values.
pub fn time_duration_between(start: ClockTime, end: ClockTime, brk: ClockTime) -> DurationResult {
    let total = shift_minutes(start, end);
    DurationResult {
        total: MinuteSpan::from_minutes(total),
        net: MinuteSpan::from_minutes(total - brk.as_minutes()),
    }
}

/// Minutes from `start` to `end`, rolling `end` into the next day when it is
/// strictly earlier than `start`.
pub(crate) fn shift_minutes(start: ClockTime, end: ClockTime) -> i64 {
    let mut end_minute = end.minute_of_day();
    if end_minute < start.minute_of_day() {
        debug!(%start, %end, "end precedes start; treating end as next day");
        end_minute += MINUTES_PER_DAY;
    }
    end_minute - start.minute_of_day()
}

// ── date_duration ───────────────────────────────────────────────────────────

/// Compute whole days between two `YY/MM/DD` dates.
///
/// The start day is excluded and the end day included, so the same date
/// twice gives 0. When `end` is earlier than `start` it is moved one year
/// forward first, once.
///
/// # Errors
///
/// Returns [`FormatError::InvalidDate`] if either string is malformed or names
/// a day that does not exist, and [`FormatError::DateRange`] if the end date
/// cannot be moved into the following year (29 February) or is still before
/// the start after moving.
///
/// # Examples
///
/// ```
/// use shift_engine::duration::date_duration;
///
/// assert_eq!(date_duration("24/12/20", "25/01/05").unwrap(), 16);
/// assert_eq!(date_duration("24/12/20", "24/01/05").unwrap(), 16);
/// ```
pub fn date_duration(start: &str, end: &str) -> Result<i64> {
    let start: CalendarDate = start.parse()?;
    let end: CalendarDate = end.parse()?;
    date_duration_between(start, end)
}

/// Typed form of [`date_duration`].
///
/// # Errors
///
/// Returns [`FormatError::DateRange`] under the same conditions as
/// [`date_duration`].
pub fn date_duration_between(start: CalendarDate, end: CalendarDate) -> Result<i64> {
    if end >= start {
        return Ok(start.days_until(end));
    }

    debug!(%start, %end, "end precedes start; moving end into the following year");
    let shifted = end.next_year().ok_or_else(|| {
        FormatError::DateRange(format!("'{end}' has no counterpart in the following year"))
    })?;

    if shifted < start {
        return Err(FormatError::DateRange(format!(
            "'{end}' is more than a year before '{start}'"
        )));
    }
    Ok(start.days_until(shifted))
}

// ── Tests ───────────────────────────────────────────────────────────────────
