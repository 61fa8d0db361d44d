use crate::core::timesheet::{DEFAULT_TAIL, Timesheet};
use crate::errors::AppResult;
use crate::models::PunchEvent;
use crate::utils::format_hours;
use chrono::TimeZone;

/// Whether the user is on the clock right now.
#[derive(Debug, Clone)]
pub enum Status {
    ClockedIn { since: PunchEvent, hours: f64 },
    ClockedOut { recent: Vec<PunchEvent> },
}

impl Status {
    pub fn current<Tz: TimeZone>(sheet: &Timesheet<Tz>) -> AppResult<Self> {
        let recent = sheet.tail_entries(DEFAULT_TAIL)?;

        match recent.last() {
            Some(last) if last.is_in() => Ok(Status::ClockedIn {
                hours: sheet.running_time(last),
                since: last.clone(),
            }),
            _ => Ok(Status::ClockedOut { recent }),
        }
    }

    /// `Clocked in. 1.25 hours` or `Clocked out.`
    pub fn headline(&self) -> String {
        match self {
            Status::ClockedIn { hours, .. } => format!("Clocked in. {} hours", format_hours(*hours)),
            Status::ClockedOut { .. } => "Clocked out.".to_string(),
        }
    }
}
