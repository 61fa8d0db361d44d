//! Duration helpers: hours between instants and their display form.

use chrono::{DateTime, TimeZone};

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Hours from `start` to `end`, negative when `end` comes first.
pub fn hours_between<Tz: TimeZone>(start: &DateTime<Tz>, end: &DateTime<Tz>) -> f64 {
    end.clone().signed_duration_since(start).as_seconds_f64() / SECONDS_PER_HOUR
}

/// `8.00`
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}
