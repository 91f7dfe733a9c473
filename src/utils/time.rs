//! Time utilities: parsing and normalizing HH:MM values.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H.%M"))
        .ok()
}

/// Validate a time and return it as zero-padded `HH:MM`.
pub fn normalize_time(t: &str) -> AppResult<String> {
    parse_time(t)
        .map(|v| v.format("%H:%M").to_string())
        .ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_colon_and_dot() {
        assert_eq!(normalize_time("7:05").unwrap(), "07:05");
        assert_eq!(normalize_time("14.00").unwrap(), "14:00");
        assert!(matches!(normalize_time("25:00"), Err(AppError::InvalidTime(_))));
    }
}
