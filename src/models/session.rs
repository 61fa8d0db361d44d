use super::punch::PunchEvent;
use chrono::{NaiveDate, TimeZone};

/// A clock-in and, once closed, its matching clock-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub clock_in: PunchEvent,
    pub clock_out: Option<PunchEvent>,
}

impl Session {
    pub fn open(clock_in: PunchEvent) -> Self {
        Self {
            clock_in,
            clock_out: None,
        }
    }

    pub fn closed(clock_in: PunchEvent, clock_out: PunchEvent) -> Self {
        Self {
            clock_in,
            clock_out: Some(clock_out),
        }
    }

    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }

    /// True when the session covers any part of `day` in `tz`. A session
    /// that starts and ends on other days still covers the days in between.
    pub fn overlaps<Tz: TimeZone>(&self, day: NaiveDate, tz: &Tz) -> bool {
        let start = self.clock_in.date_in(tz);
        let end = self
            .clock_out
            .as_ref()
            .map_or(start, |out| out.date_in(tz));
        start <= day && day <= end
    }
}
