//! # shift-engine
//!
//! Deterministic arithmetic for shift planning.
//!
//! Every operation is a pure function over string fields: no clock access,
//! no shared state, and the same inputs always give the same outputs.
//!
//! ## Modules
//!
//! - [`clock`] — `HH:MM` clock times and `YY/MM/DD` calendar dates
//! - [`duration`] — Overnight-aware time spans and year-wrapping date spans
//! - [`pomodoro`] — Splitting a working window into 30-minute units
//! - [`error`] — Error types

pub mod clock;
pub mod duration;
pub mod error;
pub mod pomodoro;

pub use clock::{CalendarDate, ClockTime};
pub use duration::{
    date_duration, date_duration_between, time_duration, time_duration_between, DurationResult,
    MinuteSpan,
};
pub use error::FormatError;
pub use pomodoro::{
    pomodoro_plan, PlanField, PlanInputs, PomodoroPlan, DEFAULT_EFFICIENCY_RATIO,
    DEFAULT_GTD_UNITS, DEFAULT_MAIN_RATIO, POMODORO_MINUTES,
};
