//! Unified application error type.
//! Every module (config, core, cli) returns AppError so that only `main`
//! decides how a failure turns into an exit status.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Unable to locate the home directory")]
    HomeDirNotFound,

    // ---------------------------
    // Log parsing
    // ---------------------------
    #[error("Invalid entry on line {line_no}: \"{text}\" ({reason})")]
    Parse {
        line_no: usize,
        text: String,
        reason: String,
    },

    // ---------------------------
    // Punch state
    // ---------------------------
    #[error("Already clocked in.")]
    AlreadyClockedIn,

    #[error("Already clocked out.")]
    AlreadyClockedOut,

    #[error("Not clocked in.")]
    NotClockedIn,

    // ---------------------------
    // CLI
    // ---------------------------
    #[error("Unknown argument: \"{0}\"")]
    UnknownCommand(String),
}

impl AppError {
    /// Errors caused by what the user asked for, as opposed to a broken
    /// environment or log. These are followed by the status view.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            AppError::AlreadyClockedIn
                | AppError::AlreadyClockedOut
                | AppError::NotClockedIn
                | AppError::UnknownCommand(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
