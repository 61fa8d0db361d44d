//! A single punch and its one-line textual form.
//!
//! Lines look like `clock in Mon Jan 01 09:00:00 UTC 2024`. The zone is either
//! `UTC` or a numeric offset such as `+01:00`, and a line is only accepted when
//! writing the parsed event back produces the very same text.

use super::punch_kind::PunchKind;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, SubsecRound, TimeZone};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

const LINE_PREFIX: &str = "clock ";
const CLOCK_FORMAT: &str = "%a %b %d %H:%M:%S";
const YEAR_FORMAT: &str = "%Y";
const UTC_LABEL: &str = "UTC";

static STAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<clock>[A-Z][a-z]{2} [A-Z][a-z]{2} [0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2}) (?P<zone>UTC|[+-][0-9]{2}:[0-9]{2}) (?P<year>[0-9]{4})$",
    )
    .expect("timestamp pattern must compile")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunchEvent {
    pub kind: PunchKind,
    pub timestamp: DateTime<FixedOffset>,
}

impl PunchEvent {
    pub fn new(kind: PunchKind, timestamp: DateTime<FixedOffset>) -> Self {
        Self { kind, timestamp }
    }

    /// A punch stamped with the current local time, truncated to whole
    /// seconds since the log has no room for fractions.
    pub fn now(kind: PunchKind) -> Self {
        Self::new(kind, Local::now().trunc_subsecs(0).fixed_offset())
    }

    /// Parse one log line (without its trailing newline).
    pub fn parse(line: &str) -> Result<Self, String> {
        let rest = line
            .strip_prefix(LINE_PREFIX)
            .ok_or_else(|| "expected `clock in` or `clock out`".to_string())?;

        let (word, stamp) = rest
            .split_once(' ')
            .ok_or_else(|| "missing timestamp".to_string())?;

        let kind = PunchKind::from_word(word)
            .ok_or_else(|| format!("expected `in` or `out`, found `{word}`"))?;

        let event = Self::new(kind, parse_stamp(stamp)?);

        let canonical = event.to_string();
        if canonical != line {
            return Err(format!("timestamp not in canonical form, expected \"{canonical}\""));
        }

        Ok(event)
    }

    /// The log line for this event, newline included.
    pub fn to_line(&self) -> String {
        format!("{self}\n")
    }

    pub fn is_in(&self) -> bool {
        self.kind.is_in()
    }

    pub fn is_out(&self) -> bool {
        self.kind.is_out()
    }

    /// This punch seen from `tz`.
    pub fn time_in<Tz: TimeZone>(&self, tz: &Tz) -> DateTime<Tz> {
        self.timestamp.with_timezone(tz)
    }

    /// Calendar date of this punch in `tz`.
    pub fn date_in<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDate {
        self.time_in(tz).date_naive()
    }

    /// Formats the timestamp part of a line: `Mon Jan 01 09:00:00 UTC 2024`
    pub fn stamp(&self) -> String {
        format!(
            "{} {} {}",
            self.timestamp.format(CLOCK_FORMAT),
            zone_label(&self.timestamp),
            self.timestamp.format(YEAR_FORMAT)
        )
    }
}

impl fmt::Display for PunchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{LINE_PREFIX}{} {}", self.kind, self.stamp())
    }
}

fn zone_label(ts: &DateTime<FixedOffset>) -> String {
    if ts.offset().local_minus_utc() == 0 {
        UTC_LABEL.to_string()
    } else {
        ts.format("%:z").to_string()
    }
}

fn parse_stamp(stamp: &str) -> Result<DateTime<FixedOffset>, String> {
    let caps = STAMP_RE.captures(stamp).ok_or_else(|| {
        format!("expected a timestamp like \"Mon Jan 01 09:00:00 UTC 2024\", found \"{stamp}\"")
    })?;

    let clock = format!("{} {}", &caps["clock"], &caps["year"]);
    let naive = NaiveDateTime::parse_from_str(&clock, &format!("{CLOCK_FORMAT} {YEAR_FORMAT}"))
        .map_err(|e| format!("invalid date \"{clock}\": {e}"))?;

    let offset = parse_zone(&caps["zone"])?;

    offset
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| format!("time \"{clock}\" does not exist at offset {offset}"))
}

fn parse_zone(zone: &str) -> Result<FixedOffset, String> {
    if zone == UTC_LABEL {
        return FixedOffset::east_opt(0).ok_or_else(|| "invalid UTC offset".to_string());
    }

    // STAMP_RE guarantees the `[+-]HH:MM` shape here
    let sign = if zone.starts_with('-') { -1 } else { 1 };
    let hours: i32 = zone[1..3]
        .parse()
        .map_err(|_| format!("invalid offset hours in \"{zone}\""))?;
    let minutes: i32 = zone[4..6]
        .parse()
        .map_err(|_| format!("invalid offset minutes in \"{zone}\""))?;

    if minutes >= 60 {
        return Err(format!("invalid offset minutes in \"{zone}\""));
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .ok_or_else(|| format!("offset out of range: \"{zone}\""))
}
