//! Date formatting and field editing for the date picker demonstration.
//!
//! The display format is fixed: four-digit year and zero-padded fields in
//! the system's local calendar and timezone, e.g. "2025年10月21日 14:30".

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

const PATTERN: &str = "%Y年%m月%d日 %H:%M";

/// Format an instant for display. Any valid instant formats successfully.
pub fn format_local(instant: &DateTime<Local>) -> String {
    instant.format(PATTERN).to_string()
}

/// Same pattern applied to a wall-clock value (the editor's working state).
pub fn format_naive(value: &NaiveDateTime) -> String {
    value.format(PATTERN).to_string()
}

/// Editable field of the date picker, in cursor order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
}

impl DateField {
    pub fn next(self) -> Self {
        match self {
            DateField::Year => DateField::Month,
            DateField::Month => DateField::Day,
            DateField::Day => DateField::Hour,
            DateField::Hour => DateField::Minute,
            DateField::Minute => DateField::Minute,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            DateField::Year => DateField::Year,
            DateField::Month => DateField::Year,
            DateField::Day => DateField::Month,
            DateField::Hour => DateField::Day,
            DateField::Minute => DateField::Hour,
        }
    }
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match (first, next) {
        (Some(first), Some(next)) => next.signed_duration_since(first).num_days() as u32,
        _ => 30,
    }
}

/// Step one field of a wall-clock value by `delta`.
///
/// Month/day/hour/minute wrap within their ranges; the day is clamped when a
/// year or month step lands on a shorter month (Jan 31 -> Feb 28). Always
/// returns a valid value.
pub fn adjust(value: NaiveDateTime, field: DateField, delta: i32) -> NaiveDateTime {
    let date = value.date();
    let time = value.time();

    match field {
        DateField::Year => {
            let year = (date.year() + delta).clamp(1, 9998);
            let day = date.day().min(days_in_month(year, date.month()));
            NaiveDate::from_ymd_opt(year, date.month(), day)
                .map(|d| d.and_time(time))
                .unwrap_or(value)
        }
        DateField::Month => {
            let month = wrap(date.month() as i64 + delta as i64, 1, 12) as u32;
            let day = date.day().min(days_in_month(date.year(), month));
            NaiveDate::from_ymd_opt(date.year(), month, day)
                .map(|d| d.and_time(time))
                .unwrap_or(value)
        }
        DateField::Day => {
            let max = days_in_month(date.year(), date.month()) as i64;
            let day = wrap(date.day() as i64 + delta as i64, 1, max) as u32;
            NaiveDate::from_ymd_opt(date.year(), date.month(), day)
                .map(|d| d.and_time(time))
                .unwrap_or(value)
        }
        DateField::Hour => {
            let hour = wrap(time.hour() as i64 + delta as i64, 0, 23) as u32;
            NaiveTime::from_hms_opt(hour, time.minute(), time.second())
                .map(|t| date.and_time(t))
                .unwrap_or(value)
        }
        DateField::Minute => {
            let minute = wrap(time.minute() as i64 + delta as i64, 0, 59) as u32;
            NaiveTime::from_hms_opt(time.hour(), minute, time.second())
                .map(|t| date.and_time(t))
                .unwrap_or(value)
        }
    }
}

fn wrap(value: i64, lo: i64, hi: i64) -> i64 {
    let span = hi - lo + 1;
    lo + (value - lo).rem_euclid(span)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_instant_formats_exactly() {
        let instant = Local.with_ymd_and_hms(2025, 10, 21, 14, 30, 0).unwrap();
        assert_eq!(format_local(&instant), "2025年10月21日 14:30");
    }

    #[test]
    fn test_fields_are_zero_padded() {
        let instant = Local.with_ymd_and_hms(2026, 1, 5, 8, 7, 0).unwrap();
        assert_eq!(format_local(&instant), "2026年01月05日 08:07");
    }

    #[test]
    fn test_month_wraps() {
        let value = NaiveDate::from_ymd_opt(2025, 12, 15)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let stepped = adjust(value, DateField::Month, 1);
        assert_eq!(stepped.month(), 1);
        assert_eq!(stepped.year(), 2025); // month wraps, the year does not carry

        let back = adjust(stepped, DateField::Month, -1);
        assert_eq!(back.month(), 12);
    }

    #[test]
    fn test_day_clamps_on_short_month() {
        let value = NaiveDate::from_ymd_opt(2025, 1, 31)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let stepped = adjust(value, DateField::Month, 1);
        assert_eq!((stepped.month(), stepped.day()), (2, 28));
    }

    #[test]
    fn test_time_fields_wrap() {
        let value = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(23, 59, 0)
            .unwrap();
        let hour = adjust(value, DateField::Hour, 1);
        assert_eq!(hour.hour(), 0);
        let minute = adjust(value, DateField::Minute, 1);
        assert_eq!(minute.minute(), 0);
    }

    #[test]
    fn test_field_cursor_order() {
        assert_eq!(DateField::Year.next(), DateField::Month);
        assert_eq!(DateField::Minute.next(), DateField::Minute);
        assert_eq!(DateField::Year.prev(), DateField::Year);
        assert_eq!(DateField::Hour.prev(), DateField::Day);
    }
}
