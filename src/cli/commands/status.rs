use crate::config::Config;
use crate::core::status::Status;
use crate::core::timesheet::Timesheet;
use crate::errors::AppResult;
use crate::utils::colors;

/// Print whether we're on the clock. When clocked out, the last two log
/// entries are shown first.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let sheet = Timesheet::open(cfg)?;
    print_status(&Status::current(&sheet)?);
    Ok(())
}

pub fn print_status(status: &Status) {
    match status {
        Status::ClockedIn { .. } => {
            println!("{}", colors::clocked_in(&status.headline()));
        }
        Status::ClockedOut { recent } => {
            for ev in recent {
                println!("{}", colors::entry(&ev.to_string()));
            }
            println!("{}", colors::clocked_out(&status.headline()));
        }
    }
}
