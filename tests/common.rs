#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The binary, run with `home` as its home directory and UTC as local zone.
pub fn ts(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("timesheet");
    cmd.env("HOME", home).env("TZ", "UTC");
    cmd
}

/// A throwaway home directory
pub fn sandbox() -> TempDir {
    TempDir::new().expect("create temp home")
}

pub fn log_path(home: &Path) -> PathBuf {
    home.join(".timesheet").join("timesheet.txt")
}

/// Write `lines` as the whole log, one per line.
pub fn seed_log(home: &Path, lines: &[String]) {
    let path = log_path(home);
    fs::create_dir_all(path.parent().expect("log has a parent")).expect("create log dir");
    let mut content = lines.join("\n");
    if !content.is_empty() {
        content.push('\n');
    }
    fs::write(path, content).expect("seed log");
}

pub fn read_log(home: &Path) -> String {
    fs::read_to_string(log_path(home)).expect("read log")
}

/// `clock in Mon Jan 01 09:00:00 UTC 2024`
pub fn punch_line(kind: &str, at: DateTime<Utc>) -> String {
    format!("clock {kind} {}", at.format("%a %b %d %H:%M:%S UTC %Y"))
}
