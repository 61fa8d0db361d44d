use crate::core::calculator::hours::day_hours;
use crate::core::timesheet::Timesheet;
use crate::errors::AppResult;
use crate::models::Session;
use crate::utils::date::{WEEK_DAYS, day_label, days_ending};
use crate::utils::format_hours;
use chrono::{NaiveDate, TimeZone};

/// Sessions and total hours of one calendar day.
#[derive(Debug, Clone)]
pub struct DaySummary {
    pub day: NaiveDate,
    pub sessions: Vec<Session>,
    pub hours: f64,
}

impl DaySummary {
    /// `Mon Jan 1: 8.00 hours`
    pub fn total_line(&self) -> String {
        format!("{}: {} hours", day_label(self.day), format_hours(self.hours))
    }
}

pub struct SummaryLogic;

impl SummaryLogic {
    pub fn day<Tz: TimeZone>(sheet: &Timesheet<Tz>, day: NaiveDate) -> AppResult<DaySummary> {
        let sessions = sheet.day_sessions(day)?;
        let hours = day_hours(&sessions, day, sheet.timezone());
        Ok(DaySummary {
            day,
            sessions,
            hours,
        })
    }

    /// The seven days ending with `last_day`, oldest first.
    pub fn week<Tz: TimeZone>(sheet: &Timesheet<Tz>, last_day: NaiveDate) -> AppResult<Vec<DaySummary>> {
        days_ending(last_day, WEEK_DAYS)
            .into_iter()
            .map(|day| Self::day(sheet, day))
            .collect()
    }
}
