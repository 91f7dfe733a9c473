use chrono::{DateTime, Local, NaiveDate, TimeZone, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a sheet date: `YYYY-MM-DD`, or a full timestamp read in local time.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    parse_date_in(s, &Local)
}

/// Date cells come back from the script as UTC instants (local midnight of
/// UTC+7 is 17:00 of the previous day), so timestamps are moved to `tz`
/// before taking the day.
pub fn parse_date_in<Tz: TimeZone>(s: &str, tz: &Tz) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.with_timezone(tz).date_naive());
    }
    let day = s.get(..10).unwrap_or(s);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// `YYYY-MM-DD` form of a sheet date; unparsable text is returned as is.
pub fn sheet_day(s: &str) -> String {
    match parse_date(s) {
        Some(d) => d.format("%Y-%m-%d").to_string(),
        None => s.trim().to_string(),
    }
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "Januari",
        2 => "Februari",
        3 => "Maret",
        4 => "April",
        5 => "Mei",
        6 => "Juni",
        7 => "Juli",
        8 => "Agustus",
        9 => "September",
        10 => "Oktober",
        11 => "November",
        12 => "Desember",
        _ => "",
    }
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Senin",
        Weekday::Tue => "Selasa",
        Weekday::Wed => "Rabu",
        Weekday::Thu => "Kamis",
        Weekday::Fri => "Jumat",
        Weekday::Sat => "Sabtu",
        Weekday::Sun => "Minggu",
    }
}

pub fn short_month_name(month: u32) -> &'static str {
    let full = month_name(month);
    full.get(..3).unwrap_or(full)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_timestamp_dates() {
        let d = NaiveDate::from_ymd_opt(2025, 2, 3).unwrap();
        assert_eq!(parse_date("2025-02-03"), Some(d));
        assert_eq!(parse_date_in("2025-02-03T00:00:00.000Z", &chrono::Utc), Some(d));
        assert_eq!(parse_date("03/02/2025"), None);
    }

    #[test]
    fn utc_timestamps_land_on_the_local_day() {
        let wib = chrono::FixedOffset::east_opt(7 * 3600).unwrap();
        let d = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        assert_eq!(parse_date_in("2025-03-09T17:00:00.000Z", &wib), Some(d));
        assert_eq!(
            parse_date_in("2025-03-09T17:00:00.000Z", &chrono::Utc),
            d.pred_opt()
        );
    }

    #[test]
    fn sheet_day_keeps_unparsable_text() {
        assert_eq!(sheet_day(" 2025-03-10 "), "2025-03-10");
        assert_eq!(sheet_day("besok"), "besok");
    }

    #[test]
    fn short_month_names() {
        assert_eq!(short_month_name(8), "Agu");
        assert_eq!(short_month_name(5), "Mei");
    }
}
