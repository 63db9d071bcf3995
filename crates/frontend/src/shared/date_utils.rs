//! Display formatting for the ISO-8601 strings the backend returns.
//!
//! Parsing is best-effort: anything chrono cannot read is shown verbatim
//! rather than dropped, so a malformed timestamp never blanks a cell.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// `2024-03-15T14:02:26.123Z` -> `15.03.2024 14:02`
pub fn format_datetime(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d.%m.%Y %H:%M").to_string();
    }
    // timestamps without an offset, as plain Postgres columns come back
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%d.%m.%Y %H:%M").to_string();
    }
    raw.to_string()
}

/// `2024-03-15` or any timestamp -> `15.03.2024`
pub fn format_date(raw: &str) -> String {
    let date_part = raw.split('T').next().unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map(|d| d.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Today as `YYYY-MM-DD`, the format the snapshot_date column uses.
pub fn today_iso() -> String {
    today().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_rfc3339_timestamps() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15.03.2024 14:02");
        assert_eq!(format_datetime("2024-12-31T23:59:59+00:00"), "31.12.2024 23:59");
    }

    #[test]
    fn formats_offsetless_timestamps() {
        assert_eq!(format_datetime("2024-03-15T14:02:26"), "15.03.2024 14:02");
        assert_eq!(format_datetime("2024-03-15T14:02:26.123456"), "15.03.2024 14:02");
    }

    #[test]
    fn formats_plain_dates() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26Z"), "15.03.2024");
    }

    #[test]
    fn passes_garbage_through() {
        assert_eq!(format_datetime("soon"), "soon");
        assert_eq!(format_date("soon"), "soon");
    }
}
