use crate::models::{PunchEvent, Session};
use crate::utils::date::{end_of_day, start_of_day};
use crate::utils::time::hours_between;
use chrono::{DateTime, NaiveDate, TimeZone};

/// Hours a closed session contributes to `day`, with both ends clipped to
/// the day's bounds. Open sessions and sessions elsewhere contribute nothing.
pub fn clipped_hours<Tz: TimeZone>(session: &Session, day: NaiveDate, tz: &Tz) -> f64 {
    let Some(clock_out) = &session.clock_out else {
        return 0.0;
    };
    if !session.overlaps(day, tz) {
        return 0.0;
    }

    let mut start = session.clock_in.time_in(tz);
    let mut end = clock_out.time_in(tz);

    if start.date_naive() != day {
        start = start_of_day(day, tz);
    }
    if end.date_naive() != day {
        end = end_of_day(day, tz);
    }

    hours_between(&start, &end).max(0.0)
}

/// Total hours worked on `day` across `sessions`.
pub fn day_hours<Tz: TimeZone>(sessions: &[Session], day: NaiveDate, tz: &Tz) -> f64 {
    sessions
        .iter()
        .map(|s| clipped_hours(s, day, tz))
        .sum()
}

/// Hours elapsed from `clock_in` until `now`.
pub fn running_hours<Tz: TimeZone>(clock_in: &PunchEvent, now: &DateTime<Tz>) -> f64 {
    let tz = now.timezone();
    hours_between(&clock_in.time_in(&tz), now).max(0.0)
}
