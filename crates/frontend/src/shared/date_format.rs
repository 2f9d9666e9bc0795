//! Date display heuristics for table cells.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Column keys that look like timestamps get the friendly date treatment.
pub fn is_date_like_key(key: &str) -> bool {
    let key = key.to_lowercase();
    key.contains("createdat")
        || key.contains("updatedat")
        || key.contains("createat")
        || key.contains("updateat")
        || key.contains("date")
}

/// Parse a raw wire value and render it as "Dec 13, 2025, 12:40 PM".
///
/// Accepts RFC 3339 timestamps, bare datetimes and bare dates; anything else
/// is `None` and the caller falls back to the raw value.
pub fn format_timestamp_display(raw: &str) -> Option<String> {
    let naive = if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        dt.naive_utc()
    } else if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        dt
    } else if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        date.and_hms_opt(0, 0, 0)?
    } else {
        return None;
    };
    Some(naive.format("%b %-d, %Y, %-I:%M %p").to_string())
}

/// Today as "Dec 13, 2025" for the PDF header line.
pub fn today_display() -> String {
    chrono::Utc::now().format("%b %-d, %Y").to_string()
}

/// Today as an ISO date, used in export filenames.
pub fn today_iso() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_date_like_keys() {
        assert!(is_date_like_key("createdAt"));
        assert!(is_date_like_key("UpdatedAt"));
        assert!(is_date_like_key("expiryDate"));
        assert!(!is_date_like_key("medicineName"));
        assert!(!is_date_like_key("quantity"));
    }

    #[test]
    fn formats_rfc3339() {
        assert_eq!(
            format_timestamp_display("2025-12-13T12:40:00Z").as_deref(),
            Some("Dec 13, 2025, 12:40 PM")
        );
    }

    #[test]
    fn formats_bare_date_at_midnight() {
        assert_eq!(
            format_timestamp_display("2024-03-05").as_deref(),
            Some("Mar 5, 2024, 12:00 AM")
        );
    }

    #[test]
    fn rejects_non_dates() {
        assert_eq!(format_timestamp_display("BTH-001"), None);
        assert_eq!(format_timestamp_display(""), None);
    }
}
