//! The timesheet log engine.
//!
//! Owns the path of the flat text log and derives everything else from it:
//! parsed punches, the tail of the log, a day's sessions and hours. Every
//! query re-reads the whole file and every append opens, writes one line and
//! closes. Nothing is locked, so two processes punching at the same moment
//! may interleave their writes.

use crate::config::Config;
use crate::core::calculator::{hours, sessions};
use crate::errors::{AppError, AppResult};
use crate::models::{PunchEvent, Session};
use chrono::{Local, NaiveDate, TimeZone, Utc};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Entries returned by a tail lookup unless asked otherwise.
pub const DEFAULT_TAIL: usize = 2;

#[derive(Debug, Clone)]
pub struct Timesheet<Tz: TimeZone = Local> {
    path: PathBuf,
    tz: Tz,
}

impl Timesheet<Local> {
    /// Open the log described by `cfg`, creating it if this is the first run.
    pub fn open(cfg: &Config) -> AppResult<Self> {
        Self::open_in(cfg, Local)
    }
}

impl<Tz: TimeZone> Timesheet<Tz> {
    /// Like [`Timesheet::open`], with days and clocks read in `tz`.
    pub fn open_in(cfg: &Config, tz: Tz) -> AppResult<Self> {
        cfg.init_all()?;
        Ok(Self {
            path: cfg.log_path.clone(),
            tz,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn timezone(&self) -> &Tz {
        &self.tz
    }

    /// Every punch in file order. Blank lines are skipped; any other line
    /// that does not parse aborts the read.
    pub fn events(&self) -> AppResult<Vec<PunchEvent>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut events = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            let line_no = idx + 1;

            if line.trim().is_empty() {
                tracing::warn!(line_no, "skipping blank line in timesheet log");
                continue;
            }

            let event = PunchEvent::parse(line).map_err(|reason| AppError::Parse {
                line_no,
                text: line.to_string(),
                reason,
            })?;
            events.push(event);
        }

        tracing::debug!(count = events.len(), path = %self.path.display(), "read timesheet log");
        Ok(events)
    }

    /// The last `n` punches, oldest first.
    pub fn tail_entries(&self, n: usize) -> AppResult<Vec<PunchEvent>> {
        let mut events = self.events()?;
        let keep_from = events.len().saturating_sub(n);
        Ok(events.split_off(keep_from))
    }

    /// The most recent punch, if the log has any.
    pub fn last_entry(&self) -> AppResult<Option<PunchEvent>> {
        Ok(self.tail_entries(1)?.pop())
    }

    /// Append one punch to the end of the log.
    pub fn append(&self, event: &PunchEvent) -> AppResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(event.to_line().as_bytes())?;

        tracing::debug!(entry = %event, "appended punch");
        Ok(())
    }

    /// Closed sessions covering `day`, in file order.
    pub fn day_sessions(&self, day: NaiveDate) -> AppResult<Vec<Session>> {
        let events = self.events()?;
        Ok(sessions::day_sessions(&events, day, &self.tz))
    }

    /// Hours worked on `day`, sessions crossing midnight split at the boundary.
    pub fn hours(&self, day: NaiveDate) -> AppResult<f64> {
        let day_sessions = self.day_sessions(day)?;
        Ok(hours::day_hours(&day_sessions, day, &self.tz))
    }

    /// Hours elapsed since `clock_in` up to now.
    pub fn running_time(&self, clock_in: &PunchEvent) -> f64 {
        let now = Utc::now().with_timezone(&self.tz);
        hours::running_hours(clock_in, &now)
    }
}
