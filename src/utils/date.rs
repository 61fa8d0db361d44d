use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

/// Days shown by the `week` summary, today included.
pub const WEEK_DAYS: u64 = 7;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// The `count` days ending with `last`, oldest first.
pub fn days_ending(last: NaiveDate, count: u64) -> Vec<NaiveDate> {
    (0..count)
        .rev()
        .filter_map(|back| last.checked_sub_days(Days::new(back)))
        .collect()
}

/// Short label used in summaries: `Mon Jan 1`
pub fn day_label(day: NaiveDate) -> String {
    day.format("%a %b %-d").to_string()
}

/// 00:00:00 of `day` in `tz`.
pub fn start_of_day<Tz: TimeZone>(day: NaiveDate, tz: &Tz) -> DateTime<Tz> {
    resolve_local(day.and_time(NaiveTime::MIN), tz)
}

/// 23:59:59.999999 of `day` in `tz`.
pub fn end_of_day<Tz: TimeZone>(day: NaiveDate, tz: &Tz) -> DateTime<Tz> {
    let last = NaiveTime::from_hms_micro_opt(23, 59, 59, 999_999).unwrap_or(NaiveTime::MIN);
    resolve_local(day.and_time(last), tz)
}

/// Map a wall-clock time to an instant. Ambiguous times take the earlier
/// instant; times skipped by a DST jump are read as UTC wall time.
fn resolve_local<Tz: TimeZone>(naive: NaiveDateTime, tz: &Tz) -> DateTime<Tz> {
    tz.from_local_datetime(&naive)
        .earliest()
        .unwrap_or_else(|| tz.from_utc_datetime(&naive))
}
