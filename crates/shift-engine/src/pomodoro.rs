//! Pomodoro allocation for a working window.
//!
//! A shift's working minutes (after the break) are scaled by an efficiency
//! ratio, cut into 30-minute units, and split three ways: a fixed number of
//! GTD units for miscellaneous tasks, a share of what is left for the main
//! project, and whatever remains.
//!
//! Time fields are validated strictly. The ratio and count fields are not:
//! input that does not parse is replaced by the documented default and a
//! warning is logged. Existing callers rely on that leniency.

use serde::Serialize;
use tracing::warn;

use crate::clock::ClockTime;
use crate::duration::shift_minutes;
use crate::error::Result;

/// Length of one pomodoro unit.
pub const POMODORO_MINUTES: i64 = 30;

/// Share of working minutes assumed productive when none is given.
pub const DEFAULT_EFFICIENCY_RATIO: f64 = 0.85;

/// Share of post-GTD minutes given to the main project when none is given.
pub const DEFAULT_MAIN_RATIO: f64 = 0.65;

/// GTD units reserved when none is given.
pub const DEFAULT_GTD_UNITS: u32 = 1;

/// A plan input that can fall back to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanField {
    GtdUnits,
    EfficiencyRatio,
    MainRatio,
}

impl PlanField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GtdUnits => "gtd_units",
            Self::EfficiencyRatio => "efficiency_ratio",
            Self::MainRatio => "main_ratio",
        }
    }
}

/// Fully parsed inputs for a plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanInputs {
    pub start: ClockTime,
    pub end: ClockTime,
    pub brk: ClockTime,
    pub gtd_units: u32,
    pub efficiency_ratio: f64,
    pub main_ratio: f64,
}

/// The unit breakdown for one working window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PomodoroPlan {
    /// Shift length minus break. May be negative.
    pub work_minutes: i64,
    /// `floor(work_minutes * efficiency_ratio)`.
    pub efficient_minutes: i64,
    /// Whole units that fit in `efficient_minutes`.
    pub total_units: i64,
    pub gtd_units: i64,
    pub main_units: i64,
    /// `total_units - gtd_units - main_units`. Not clamped; negative when the
    /// GTD reservation exceeds what the window holds.
    pub remaining_units: i64,
    /// Ratio actually used.
    pub efficiency_ratio: f64,
    /// Ratio actually used.
    pub main_ratio: f64,
    /// Fields whose input was replaced by a default.
    pub defaulted: Vec<PlanField>,
}

impl PlanInputs {
    /// Compute the plan. Arithmetic saturates at the `i64` bounds.
    pub fn plan(&self) -> PomodoroPlan {
        let work_minutes = shift_minutes(self.start, self.end) - self.brk.as_minutes();
        let efficient_minutes = scale_floor(work_minutes, self.efficiency_ratio);
        let total_units = efficient_minutes.div_euclid(POMODORO_MINUTES);

        let gtd_units = i64::from(self.gtd_units);
        let gtd_minutes = gtd_units * POMODORO_MINUTES;
        let after_gtd = efficient_minutes.saturating_sub(gtd_minutes).max(0);

        let main_minutes = scale_floor(after_gtd, self.main_ratio);
        let main_units = main_minutes.div_euclid(POMODORO_MINUTES);

        PomodoroPlan {
            work_minutes,
            efficient_minutes,
            total_units,
            gtd_units,
            main_units,
            remaining_units: total_units.saturating_sub(gtd_units).saturating_sub(main_units),
            efficiency_ratio: self.efficiency_ratio,
            main_ratio: self.main_ratio,
            defaulted: Vec::new(),
        }
    }
}

/// Plan a working window from raw field strings.
///
/// # Arguments
///
/// * `start`, `end` — `HH:MM` times; an end before the start wraps overnight
/// * `brk` — break length as `HH:MM`
/// * `gtd` — GTD units to reserve (non-negative integer, default 1)
/// * `efficiency` — productive share of work minutes (default 0.85)
/// * `main` — main-project share of post-GTD minutes (default 0.65)
///
/// # Errors
///
/// Returns [`FormatError::InvalidTime`](crate::FormatError::InvalidTime) if a
/// time field is invalid. The other fields never fail.
///
/// # Examples
///
/// ```
/// use shift_engine::pomodoro::pomodoro_plan;
///
/// let plan = pomodoro_plan("09:00", "17:00", "1:00", "1", "0.85", "0.65").unwrap();
/// assert_eq!(plan.efficient_minutes, 357);
/// assert_eq!(plan.total_units, 11);
/// assert_eq!(plan.main_units, 7);
/// assert_eq!(plan.remaining_units, 3);
/// ```
pub fn pomodoro_plan(
    start: &str,
    end: &str,
    brk: &str,
    gtd: &str,
    efficiency: &str,
    main: &str,
) -> Result<PomodoroPlan> {
    let mut defaulted = Vec::new();

    let inputs = PlanInputs {
        start: start.parse()?,
        end: end.parse()?,
        brk: brk.parse()?,
        gtd_units: count_or_default(gtd, &mut defaulted),
        efficiency_ratio: ratio_or_default(
            PlanField::EfficiencyRatio,
            efficiency,
            DEFAULT_EFFICIENCY_RATIO,
            &mut defaulted,
        ),
        main_ratio: ratio_or_default(
            PlanField::MainRatio,
            main,
            DEFAULT_MAIN_RATIO,
            &mut defaulted,
        ),
    };

    let mut plan = inputs.plan();
    plan.defaulted = defaulted;
    Ok(plan)
}

// ── Internal helpers ────────────────────────────────────────────────────────

/// `floor(minutes * ratio)`, saturating on overflow.
fn scale_floor(minutes: i64, ratio: f64) -> i64 {
    (minutes as f64 * ratio).floor() as i64
}

fn count_or_default(input: &str, defaulted: &mut Vec<PlanField>) -> u32 {
    match input.trim().parse::<u32>() {
        Ok(n) => n,
        Err(_) => {
            warn!(
                field = PlanField::GtdUnits.as_str(),
                input,
                default = DEFAULT_GTD_UNITS,
                "unparsable count; using default"
            );
            defaulted.push(PlanField::GtdUnits);
            DEFAULT_GTD_UNITS
        }
    }
}

/// Non-finite values count as unparsable.
fn ratio_or_default(
    field: PlanField,
    input: &str,
    default: f64,
    defaulted: &mut Vec<PlanField>,
) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(r) if r.is_finite() => r,
        _ => {
            warn!(
                field = field.as_str(),
                input,
                default,
                "unparsable ratio; using default"
            );
            defaulted.push(field);
            default
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatError;

    fn standard_day() -> PomodoroPlan {
        pomodoro_plan("09:00", "17:00", "1:00", "1", "0.85", "0.65").unwrap()
    }

    #[test]
    fn test_plan_standard_day() {
        let plan = standard_day();
        assert_eq!(plan.work_minutes, 420);
        assert_eq!(plan.efficient_minutes, 357);
        assert_eq!(plan.total_units, 11);
        assert_eq!(plan.gtd_units, 1);
        // floor((357 - 30) * 0.65) = 212 → 7 units
        assert_eq!(plan.main_units, 7);
        assert_eq!(plan.remaining_units, 3);
        assert!(plan.defaulted.is_empty());
    }

    #[test]
    fn test_plan_overnight_window() {
        let plan = pomodoro_plan("22:00", "06:00", "1:00", "1", "0.85", "0.65").unwrap();
        assert_eq!(plan, standard_day());
    }

    #[test]
    fn test_plan_bad_efficiency_matches_default() {
        let plan = pomodoro_plan("09:00", "17:00", "1:00", "1", "lots", "0.65").unwrap();
        assert_eq!(plan.efficient_minutes, 357);
        assert_eq!(plan.defaulted, vec![PlanField::EfficiencyRatio]);
        assert_eq!(
            PomodoroPlan {
                defaulted: Vec::new(),
                ..plan
            },
            standard_day()
        );
    }

    #[test]
    fn test_plan_all_soft_fields_default() {
        let plan = pomodoro_plan("09:00", "17:00", "1:00", "", "", "").unwrap();
        assert_eq!(plan.gtd_units, 1);
        assert_eq!(plan.efficiency_ratio, DEFAULT_EFFICIENCY_RATIO);
        assert_eq!(plan.main_ratio, DEFAULT_MAIN_RATIO);
        assert_eq!(
            plan.defaulted,
            vec![
                PlanField::GtdUnits,
                PlanField::EfficiencyRatio,
                PlanField::MainRatio
            ]
        );
        assert_eq!(plan.remaining_units, 3);
    }

    #[test]
    fn test_plan_negative_or_fractional_count_defaults() {
        for gtd in ["-2", "1.5", "two"] {
            let plan = pomodoro_plan("09:00", "17:00", "1:00", gtd, "0.85", "0.65").unwrap();
            assert_eq!(plan.gtd_units, 1, "gtd = {gtd:?}");
            assert_eq!(plan.defaulted, vec![PlanField::GtdUnits]);
        }
    }

    #[test]
    fn test_plan_non_finite_ratio_defaults() {
        let plan = pomodoro_plan("09:00", "17:00", "1:00", "1", "NaN", "inf").unwrap();
        assert_eq!(plan.efficiency_ratio, DEFAULT_EFFICIENCY_RATIO);
        assert_eq!(plan.main_ratio, DEFAULT_MAIN_RATIO);
    }

    #[test]
    fn test_plan_trims_soft_fields() {
        let plan = pomodoro_plan("09:00", "17:00", "1:00", " 1 ", " 0.85", "0.65 ").unwrap();
        assert!(plan.defaulted.is_empty());
        assert_eq!(plan.remaining_units, 3);
    }

    #[test]
    fn test_plan_gtd_exceeding_window_goes_negative() {
        // 60 efficient minutes = 2 units, 5 reserved
        let plan = pomodoro_plan("09:00", "10:00", "0:00", "5", "1.0", "0.65").unwrap();
        assert_eq!(plan.total_units, 2);
        assert_eq!(plan.main_units, 0);
        assert_eq!(plan.remaining_units, -3);
    }

    #[test]
    fn test_plan_break_longer_than_window() {
        let plan = pomodoro_plan("09:00", "09:30", "1:00", "0", "1.0", "0.5").unwrap();
        assert_eq!(plan.work_minutes, -30);
        assert_eq!(plan.efficient_minutes, -30);
        assert_eq!(plan.total_units, -1);
        assert_eq!(plan.main_units, 0);
        assert_eq!(plan.remaining_units, -1);
    }

    #[test]
    fn test_plan_huge_ratio_saturates() {
        let plan = pomodoro_plan("09:00", "17:00", "0:00", "1", "-1e300", "1e300").unwrap();
        assert_eq!(plan.efficient_minutes, i64::MIN);
        assert_eq!(plan.main_units, 0);
    }

    #[test]
    fn test_plan_time_fields_fail_hard() {
        assert!(matches!(
            pomodoro_plan("09:00", "17:00", "1h", "1", "0.85", "0.65"),
            Err(FormatError::InvalidTime(_))
        ));
        assert!(pomodoro_plan("9", "17:00", "1:00", "1", "0.85", "0.65").is_err());
    }

    #[test]
    fn test_typed_inputs_match_string_entry() {
        let inputs = PlanInputs {
            start: ClockTime::new(9, 0).unwrap(),
            end: ClockTime::new(17, 0).unwrap(),
            brk: ClockTime::new(1, 0).unwrap(),
            gtd_units: 1,
            efficiency_ratio: 0.85,
            main_ratio: 0.65,
        };
        assert_eq!(inputs.plan(), standard_day());
    }
}
