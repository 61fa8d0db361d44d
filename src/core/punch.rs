use crate::core::calculator::hours;
use crate::core::timesheet::Timesheet;
use crate::errors::{AppError, AppResult};
use crate::models::{PunchEvent, PunchKind};
use chrono::TimeZone;

/// What a successful punch wrote, and for an `out` how long the session ran.
#[derive(Debug, Clone)]
pub struct PunchReceipt {
    pub event: PunchEvent,
    pub logged_hours: Option<f64>,
}

/// Business rules for the `in` and `out` commands.
pub struct PunchLogic;

impl PunchLogic {
    /// Refuse a punch that would repeat the current state.
    pub fn check_state(cmd: PunchKind, last: Option<&PunchEvent>) -> AppResult<()> {
        match (cmd, last.map(|ev| ev.kind)) {
            (PunchKind::In, Some(PunchKind::In)) => Err(AppError::AlreadyClockedIn),
            (PunchKind::Out, Some(PunchKind::Out)) => Err(AppError::AlreadyClockedOut),
            (PunchKind::Out, None) => Err(AppError::NotClockedIn),
            _ => Ok(()),
        }
    }

    /// Append a punch stamped now. For an `out` following a clock-in the
    /// receipt carries the hours since that clock-in.
    pub fn record_punch<Tz: TimeZone>(
        sheet: &Timesheet<Tz>,
        cmd: PunchKind,
        last: Option<&PunchEvent>,
    ) -> AppResult<PunchReceipt> {
        let event = PunchEvent::now(cmd);
        sheet.append(&event)?;

        let logged_hours = match (cmd, last) {
            (PunchKind::Out, Some(clock_in)) if clock_in.is_in() => {
                Some(hours::running_hours(clock_in, &event.timestamp))
            }
            _ => None,
        };

        Ok(PunchReceipt {
            event,
            logged_hours,
        })
    }

    /// Check the log's last entry, then record the punch.
    pub fn punch<Tz: TimeZone>(sheet: &Timesheet<Tz>, cmd: PunchKind) -> AppResult<PunchReceipt> {
        let last = sheet.last_entry()?;
        Self::check_state(cmd, last.as_ref())?;
        Self::record_punch(sheet, cmd, last.as_ref())
    }
}
