//! timesheet library root.
//! Exposes the CLI parser, the high-level run() function and the log engine.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing::Level;

/// Central command dispatcher
pub fn dispatch(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Status => cli::commands::status::handle(cfg),
        Commands::In | Commands::Out => cli::commands::punch::handle(cmd, cfg),
        Commands::Today | Commands::Week => cli::commands::summary::handle(cmd, cfg),
    }
}

/// Diagnostics go to stderr; quiet unless `--verbose` is given.
fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = Config::load()?;

    let result = Commands::resolve(cli.command.as_deref()).and_then(|cmd| dispatch(&cmd, &cfg));

    // refused punches and unknown commands still show where we stand
    if let Err(e) = &result
        && e.is_user_error()
    {
        cli::commands::status::handle(&cfg)?;
    }

    result
}
