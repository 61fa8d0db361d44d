use crate::errors::{AppError, AppResult};
use crate::models::PunchKind;
use clap::Parser;

/// Command-line interface definition for timesheet
#[derive(Parser, Debug)]
#[command(
    name = "timesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Clock in, clock out and sum your working hours from a plain text log",
    long_about = None
)]
pub struct Cli {
    /// What to do: `in`, `out`, `today` or `week`. Without it the current
    /// status is printed.
    #[arg(value_name = "COMMAND")]
    pub command: Option<String>,

    /// Print diagnostic output on stderr
    #[arg(long, short, hide = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Show whether you are clocked in
    Status,
    /// Clock in
    In,
    /// Clock out and report the hours just logged
    Out,
    /// Hours worked today
    Today,
    /// Hours worked on each of the last seven days
    Week,
}

impl Commands {
    /// Map the positional token to a command. Anything unrecognised is an
    /// `UnknownCommand` error carrying the token as typed.
    pub fn resolve(token: Option<&str>) -> AppResult<Self> {
        match token {
            None => Ok(Commands::Status),
            Some("in") => Ok(Commands::In),
            Some("out") => Ok(Commands::Out),
            Some("today") => Ok(Commands::Today),
            Some("week") => Ok(Commands::Week),
            Some(other) => Err(AppError::UnknownCommand(other.to_string())),
        }
    }

    /// The punch this command records, if it records one.
    pub fn punch_kind(&self) -> Option<PunchKind> {
        match self {
            Commands::In => Some(PunchKind::In),
            Commands::Out => Some(PunchKind::Out),
            _ => None,
        }
    }
}
