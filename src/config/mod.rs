use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::PathBuf;

const DIR_NAME: &str = ".timesheet";
const FILE_NAME: &str = "timesheet.txt";

/// Runtime configuration handed to the log engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_path: PathBuf,
}

impl Config {
    /// Return the directory holding the log: `{home}/.timesheet`
    pub fn config_dir() -> AppResult<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(DIR_NAME))
            .ok_or(AppError::HomeDirNotFound)
    }

    /// Return the full path of the log file
    pub fn log_file() -> AppResult<PathBuf> {
        Ok(Self::config_dir()?.join(FILE_NAME))
    }

    /// Configuration pointing at the standard log location
    pub fn load() -> AppResult<Self> {
        let log_path = Self::log_file()?;
        tracing::debug!(path = %log_path.display(), "resolved timesheet log");
        Ok(Self { log_path })
    }

    /// Configuration pointing at an arbitrary log file
    pub fn with_log_path(path: impl Into<PathBuf>) -> Self {
        Self {
            log_path: path.into(),
        }
    }

    /// Create the log directory and an empty log file if they are missing.
    pub fn init_all(&self) -> AppResult<()> {
        if let Some(dir) = self.log_path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            fs::create_dir_all(dir)?;
            tracing::debug!(dir = %dir.display(), "created timesheet directory");
        }

        if !self.log_path.exists() {
            fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.log_path)?;
            tracing::debug!(path = %self.log_path.display(), "created empty timesheet log");
        }

        Ok(())
    }
}
