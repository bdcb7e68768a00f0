//! Work summary value object

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::work_timer::StopPeriod;

/// Placeholder shown when a start or end marker is absent
pub const MISSING_TIME: &str = "—";

/// Format an instant as local `HH:MM`
pub fn format_time_of_day(instant: DateTime<Local>) -> String {
    instant.format("%H:%M").to_string()
}

/// Format milliseconds as `HH:MM:SS`. Negative input renders as zero.
pub fn format_hms(ms: i64) -> String {
    let total_secs = ms.max(0) / 1000;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Figures captured when work finishes, handed to the bill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkSummary {
    pub total_minutes: f64,
    pub total_hours: f64,
    pub start_time: String,
    pub end_time: String,
    pub stop_periods: Vec<StopPeriod>,
}

impl WorkSummary {
    pub fn new(
        total_minutes: f64,
        start: Option<DateTime<Local>>,
        end: Option<DateTime<Local>>,
        stop_periods: Vec<StopPeriod>,
    ) -> Self {
        Self {
            total_minutes,
            total_hours: total_minutes / 60.0,
            start_time: start
                .map(format_time_of_day)
                .unwrap_or_else(|| MISSING_TIME.to_string()),
            end_time: end
                .map(format_time_of_day)
                .unwrap_or_else(|| MISSING_TIME.to_string()),
            stop_periods,
        }
    }

    /// Total active time as `HH:MM:SS`
    pub fn total_display(&self) -> String {
        format_hms((self.total_minutes * 60_000.0).round() as i64)
    }
}
