use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::core::status::Status;
use crate::core::timesheet::Timesheet;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::format_hours;

use super::status::print_status;

/// Handle `in` and `out`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Some(kind) = cmd.punch_kind() else {
        return Ok(());
    };

    let sheet = Timesheet::open(cfg)?;
    let receipt = PunchLogic::punch(&sheet, kind)?;

    if let Some(hours) = receipt.logged_hours {
        success(format!("Logged {} hours.", format_hours(hours)));
    }

    print_status(&Status::current(&sheet)?);
    Ok(())
}
