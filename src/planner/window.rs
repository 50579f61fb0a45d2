//! Concrete date windows for time labels.
//!
//! All arithmetic happens in the reference time's own offset, and the window
//! keeps that offset. Days roll forward: "saturday" asked on a Sunday means
//! the coming Saturday.

use crate::error::{Result, RouteError};
use crate::plan::DateRange;
use crate::{TimeContext, TimeLabel};
use chrono::{DateTime, Datelike, Days, FixedOffset, NaiveDate, NaiveTime, TimeDelta, TimeZone, Weekday};

/// Length of the "now" window.
const NOW_WINDOW_HOURS: i64 = 6;
/// Local hour at which "tonight" starts.
const EVENING_START_HOUR: u32 = 17;

pub fn date_window(time: &TimeContext, now: DateTime<FixedOffset>) -> Result<DateRange> {
    let label = time.label.as_str();
    let today = now.date_naive();

    let range = match time.label {
        TimeLabel::Now => {
            let end = now.checked_add_signed(TimeDelta::hours(NOW_WINDOW_HOURS)).ok_or(RouteError::DateOutOfRange { label })?;
            DateRange { start: now, end }
        }
        TimeLabel::Today => DateRange { start: now, end: end_of_day(now, today, label)? },
        TimeLabel::Tonight => {
            let evening = at(now, today, evening_start(), label)?;
            DateRange { start: now.max(evening), end: end_of_day(now, today, label)? }
        }
        TimeLabel::Weekend => {
            let saturday = roll_forward(today, Weekday::Sat, label)?;
            let sunday = saturday.checked_add_days(Days::new(1)).ok_or(RouteError::DateOutOfRange { label })?;
            DateRange { start: at(now, saturday, NaiveTime::MIN, label)?, end: end_of_day(now, sunday, label)? }
        }
        TimeLabel::Specific => {
            let weekday = time.day.ok_or(RouteError::MissingWeekday)?;
            let day = roll_forward(today, weekday, label)?;
            DateRange { start: at(now, day, NaiveTime::MIN, label)?, end: end_of_day(now, day, label)? }
        }
    };
    Ok(range)
}

/// The first date on or after `from` that falls on `target`.
fn roll_forward(from: NaiveDate, target: Weekday, label: &'static str) -> Result<NaiveDate> {
    let ahead = (7 + target.num_days_from_monday() - from.weekday().num_days_from_monday()) % 7;
    from.checked_add_days(Days::new(u64::from(ahead))).ok_or(RouteError::DateOutOfRange { label })
}

fn evening_start() -> NaiveTime {
    NaiveTime::from_hms_opt(EVENING_START_HOUR, 0, 0).unwrap_or(NaiveTime::MIN)
}

fn end_of_day(now: DateTime<FixedOffset>, date: NaiveDate, label: &'static str) -> Result<DateTime<FixedOffset>> {
    let last = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).ok_or(RouteError::DateOutOfRange { label })?;
    at(now, date, last, label)
}

/// `date` at wall-clock `time` in the offset of `now`.
fn at(now: DateTime<FixedOffset>, date: NaiveDate, time: NaiveTime, label: &'static str) -> Result<DateTime<FixedOffset>> {
    now.offset().from_local_datetime(&date.and_time(time)).single().ok_or(RouteError::DateOutOfRange { label })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Wednesday afternoon, five hours behind UTC.
    fn wednesday() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-05-15T14:30:00-05:00").unwrap()
    }

    fn ts(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn window(time: TimeContext, now: DateTime<FixedOffset>) -> DateRange {
        date_window(&time, now).unwrap()
    }

    #[test]
    fn now_is_six_hours() {
        let w = window(TimeContext::label(TimeLabel::Now), wednesday());
        assert_eq!(w.start, wednesday());
        assert_eq!(w.end, ts("2024-05-15T20:30:00-05:00"));
    }

    #[test]
    fn today_runs_to_end_of_day() {
        let w = window(TimeContext::label(TimeLabel::Today), wednesday());
        assert_eq!(w.start, wednesday());
        assert_eq!(w.end, ts("2024-05-15T23:59:59.999-05:00"));
    }

    #[test]
    fn tonight_starts_at_evening_or_now() {
        let w = window(TimeContext::label(TimeLabel::Tonight), wednesday());
        assert_eq!(w.start, ts("2024-05-15T17:00:00-05:00"));

        let late = ts("2024-05-15T21:15:00-05:00");
        let w = window(TimeContext::label(TimeLabel::Tonight), late);
        assert_eq!(w.start, late);
        assert_eq!(w.end, ts("2024-05-15T23:59:59.999-05:00"));
    }

    #[test]
    fn weekend_is_the_coming_saturday_and_sunday() {
        let w = window(TimeContext::label(TimeLabel::Weekend), wednesday());
        assert_eq!(w.start, ts("2024-05-18T00:00:00-05:00"));
        assert_eq!(w.end, ts("2024-05-19T23:59:59.999-05:00"));
    }

    #[test]
    fn weekend_on_saturday_is_today() {
        let w = window(TimeContext::label(TimeLabel::Weekend), ts("2024-05-18T10:00:00+02:00"));
        assert_eq!(w.start, ts("2024-05-18T00:00:00+02:00"));
    }

    #[test]
    fn weekend_on_sunday_rolls_forward() {
        let w = window(TimeContext::label(TimeLabel::Weekend), ts("2024-05-19T10:00:00+00:00"));
        assert_eq!(w.start, ts("2024-05-25T00:00:00+00:00"));
        assert_eq!(w.end, ts("2024-05-26T23:59:59.999+00:00"));
    }

    #[test]
    fn specific_day_rolls_forward() {
        let w = window(TimeContext::specific(Weekday::Fri), wednesday());
        assert_eq!(w.start, ts("2024-05-17T00:00:00-05:00"));
        assert_eq!(w.end, ts("2024-05-17T23:59:59.999-05:00"));

        let w = window(TimeContext::specific(Weekday::Mon), wednesday());
        assert_eq!(w.start, ts("2024-05-20T00:00:00-05:00"));
    }

    #[test]
    fn specific_day_matching_today_is_today() {
        let w = window(TimeContext::specific(Weekday::Wed), wednesday());
        assert_eq!(w.start, ts("2024-05-15T00:00:00-05:00"));
    }

    #[test]
    fn window_keeps_reference_offset() {
        let w = window(TimeContext::label(TimeLabel::Today), ts("2024-05-15T09:00:00+09:30"));
        assert_eq!(w.end.offset().local_minus_utc(), 9 * 3600 + 1800);
    }

    #[test]
    fn specific_without_day_is_an_error() {
        let broken = TimeContext { label: TimeLabel::Specific, day: None };
        assert!(matches!(date_window(&broken, wednesday()), Err(RouteError::MissingWeekday)));
    }
}
