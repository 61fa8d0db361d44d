use crate::models::{PunchEvent, PunchKind, Session};
use chrono::{NaiveDate, TimeZone};

/// Pair the log's punches into closed sessions and keep those covering `day`.
///
/// Only one clock-in is pending at a time. A second `in` before an `out`
/// leaves the first one pending; an `out` with nothing pending is dropped.
/// Every `out` clears the pending clock-in, whether or not its session
/// covers `day`. Results keep file order.
pub fn day_sessions<Tz: TimeZone>(events: &[PunchEvent], day: NaiveDate, tz: &Tz) -> Vec<Session> {
    let mut pending: Option<&PunchEvent> = None;
    let mut sessions = Vec::new();

    for ev in events {
        match ev.kind {
            PunchKind::In => {
                if pending.is_none() {
                    pending = Some(ev);
                }
            }
            PunchKind::Out => {
                if let Some(clock_in) = pending.take() {
                    let session = Session::closed(clock_in.clone(), ev.clone());
                    if session.overlaps(day, tz) {
                        sessions.push(session);
                    }
                }
            }
        }
    }

    sessions
}

