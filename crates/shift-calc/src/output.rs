//! Rendering engine results as text or JSON.

use serde::Serialize;
use shift_engine::{CalendarDate, DurationResult, PomodoroPlan};

use crate::cli::OutputFormat;

#[derive(Debug, Serialize)]
struct DateReport {
    start: CalendarDate,
    end: CalendarDate,
    days: i64,
}

pub fn render_time(result: &DurationResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "Duration: {}\nAfter break: {}\nNet working time: {}",
            result.total,
            result.net,
            result.net.human_readable()
        )),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
    }
}

pub fn render_date(
    start: CalendarDate,
    end: CalendarDate,
    days: i64,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "Duration: {days} day{}",
            if days == 1 { "" } else { "s" }
        )),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&DateReport { start, end, days })?),
    }
}

pub fn render_plan(plan: &PomodoroPlan, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => {
            let mut lines = vec![
                format!("Efficient minutes: {}", plan.efficient_minutes),
                format!("Total pomos: {}", plan.total_units),
                format!("GTD pomos: {}", plan.gtd_units),
                format!("Main project pomos: {}", plan.main_units),
                format!("Remaining pomos: {}", plan.remaining_units),
            ];
            if !plan.defaulted.is_empty() {
                let fields: Vec<&str> = plan.defaulted.iter().map(|f| f.as_str()).collect();
                lines.push(format!("Defaults used for: {}", fields.join(", ")));
            }
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(plan)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shift_engine::{pomodoro_plan, time_duration};

    #[test]
    fn test_time_text_matches_readout() {
        let result = time_duration("09:00", "17:00", "1:00").unwrap();
        let text = render_time(&result, OutputFormat::Text).unwrap();
        assert_eq!(
            text,
            "Duration: 08:00 (480 minutes)\n\
             After break: 07:00 (420 minutes)\n\
             Net working time: 7 hours"
        );
    }

    #[test]
    fn test_time_text_negative_net() {
        let result = time_duration("09:00", "09:30", "1:00").unwrap();
        let text = render_time(&result, OutputFormat::Text).unwrap();
        assert!(
            text.contains("After break: -00:30 (-30 minutes)"),
            "got: {text}"
        );
        assert!(text.ends_with("Net working time: -30 minutes"), "got: {text}");
    }

    #[test]
    fn test_date_text_pluralizes() {
        let start: CalendarDate = "25/01/01".parse().unwrap();
        let end: CalendarDate = "25/01/02".parse().unwrap();
        assert_eq!(
            render_date(start, end, 1, OutputFormat::Text).unwrap(),
            "Duration: 1 day"
        );
        assert_eq!(
            render_date(start, end, 16, OutputFormat::Text).unwrap(),
            "Duration: 16 days"
        );
    }

    #[test]
    fn test_date_json_uses_canonical_dates() {
        let start: CalendarDate = "24/12/20".parse().unwrap();
        let end: CalendarDate = "25/01/05".parse().unwrap();
        let json = render_date(start, end, 16, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["start"], "24/12/20");
        assert_eq!(value["end"], "25/01/05");
        assert_eq!(value["days"], 16);
    }

    #[test]
    fn test_plan_text_lists_defaults() {
        let plan = pomodoro_plan("09:00", "17:00", "1:00", "x", "0.85", "0.65").unwrap();
        let text = render_plan(&plan, OutputFormat::Text).unwrap();
        assert!(text.contains("Remaining pomos: 3"), "got: {text}");
        assert!(text.ends_with("Defaults used for: gtd_units"), "got: {text}");
    }

    #[test]
    fn test_plan_json_has_counts() {
        let plan = pomodoro_plan("09:00", "17:00", "1:00", "1", "0.85", "0.65").unwrap();
        let json = render_plan(&plan, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_units"], 11);
        assert_eq!(value["main_units"], 7);
        assert_eq!(value["defaulted"], serde_json::json!([]));
    }
}
