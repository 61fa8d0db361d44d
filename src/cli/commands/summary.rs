use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::{DaySummary, SummaryLogic};
use crate::core::timesheet::Timesheet;
use crate::errors::AppResult;
use crate::utils::{colors, date};

const CLOCK_FORMAT: &str = "%H:%M:%S";

/// Handle `today` and `week`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let sheet = Timesheet::open(cfg)?;
    let today = date::today();

    match cmd {
        Commands::Today => {
            let summary = SummaryLogic::day(&sheet, today)?;
            print_sessions(&sheet, &summary);
            print_total(&summary);
        }
        Commands::Week => {
            for summary in SummaryLogic::week(&sheet, today)? {
                print_total(&summary);
            }
        }
        _ => {}
    }

    Ok(())
}

fn print_sessions(sheet: &Timesheet, summary: &DaySummary) {
    let tz = sheet.timezone();
    for session in &summary.sessions {
        let start = session.clock_in.time_in(tz).format(CLOCK_FORMAT).to_string();
        let end = session
            .clock_out
            .as_ref()
            .map(|out| out.time_in(tz).format(CLOCK_FORMAT).to_string())
            .unwrap_or_else(|| "--:--:--".to_string());
        println!("  {start} - {end}");
    }
}

fn print_total(summary: &DaySummary) {
    println!("{}", colors::day_total(&summary.total_line(), summary.hours));
}
