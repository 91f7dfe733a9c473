// src/export/excel_date.rs

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Interpret a cell as a date, timestamp or time of day and return the
/// Excel serial with a matching number format.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return excel_serial(&dt.naive_local()).map(|v| ("yyyy-mm-dd hh:mm", v));
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return excel_serial(&d.and_time(NaiveTime::MIN)).map(|v| ("yyyy-mm-dd", v));
    }

    if let Ok(t) = NaiveTime::parse_from_str(s, "%H:%M") {
        let seconds = t.num_seconds_from_midnight() as f64;
        return Some(("hh:mm", seconds / 86400.0));
    }

    None
}

fn excel_serial(dt: &NaiveDateTime) -> Option<f64> {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_time(NaiveTime::MIN);
    let duration = *dt - epoch;

    let days = duration.num_days() as f64;
    let secs = (duration.num_seconds() - duration.num_days() * 86400) as f64;

    Some(days + secs / 86400.0)
}
