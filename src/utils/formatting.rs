//! Formatting utilities used for CLI and export outputs.

use crate::models::Status;
use crate::utils::colors;
use crate::utils::date::{month_name, parse_date, short_month_name, weekday_name};
use chrono::Datelike;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

/// `Senin, 3 Februari 2025`; unparsable input is returned unchanged.
pub fn format_date_long(s: &str) -> String {
    match parse_date(s) {
        Some(d) => format!(
            "{}, {} {} {}",
            weekday_name(d.weekday()),
            d.day(),
            month_name(d.month()),
            d.year()
        ),
        None => s.to_string(),
    }
}

/// `03 Feb 2025`; unparsable input is returned unchanged.
pub fn format_date_short(s: &str) -> String {
    match parse_date(s) {
        Some(d) => format!("{:02} {} {}", d.day(), short_month_name(d.month()), d.year()),
        None => s.to_string(),
    }
}

/// Date range as shown in lists: a single day collapses to one date.
pub fn format_period(start: &str, end: &str) -> String {
    if end.is_empty() || parse_date(start) == parse_date(end) {
        format_date_short(start)
    } else {
        format!("{} - {}", format_date_short(start), format_date_short(end))
    }
}

/// Status label with its terminal colour.
pub fn describe_status(status: Status) -> (String, &'static str) {
    (status.label().to_string(), colors::color_for_status(status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_and_short_dates_in_indonesian() {
        assert_eq!(format_date_long("2025-02-03"), "Senin, 3 Februari 2025");
        assert_eq!(format_date_short("2025-02-03"), "03 Feb 2025");
        assert_eq!(format_date_short("besok"), "besok");
    }

    #[test]
    fn period_collapses_single_day() {
        assert_eq!(format_period("2025-01-21", "2025-01-21"), "21 Jan 2025");
        assert_eq!(format_period("2025-01-21", "2025-01-22"), "21 Jan 2025 - 22 Jan 2025");
    }
}
