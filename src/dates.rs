//! Due date input parsing.

use chrono::{Duration, NaiveDate};

/// Display and storage format for dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a due date typed by the user.
///
/// Supports:
/// - "today", "tomorrow"
/// - "in 3d", "in 2w"
/// - "YYYY-MM-DD" format
pub fn parse_due_input(s: &str, today: NaiveDate) -> Option<NaiveDate> {
    let s = s.trim().to_lowercase();

    match s.as_str() {
        "today" => return Some(today),
        "tomorrow" => return Some(today + Duration::days(1)),
        _ => {}
    }

    if let Some(rest) = s.strip_prefix("in ") {
        if let Some(nd) = rest.strip_suffix('d') {
            if let Ok(days) = nd.trim().parse::<i64>() {
                return today.checked_add_signed(Duration::days(days));
            }
        }
        if let Some(nw) = rest.strip_suffix('w') {
            if let Ok(weeks) = nw.trim().parse::<i64>() {
                return today.checked_add_signed(Duration::weeks(weeks));
            }
        }
        return None;
    }

    NaiveDate::parse_from_str(&s, DATE_FORMAT).ok()
}

/// Format a date the way it is shown in the task table.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_iso() {
        let today = date(2025, 1, 15);
        assert_eq!(parse_due_input("2025-03-01", today), Some(date(2025, 3, 1)));
        assert_eq!(parse_due_input("  2025-03-01 ", today), Some(date(2025, 3, 1)));
    }

    #[test]
    fn test_parse_relative() {
        let today = date(2025, 1, 30);
        assert_eq!(parse_due_input("Today", today), Some(today));
        assert_eq!(parse_due_input("tomorrow", today), Some(date(2025, 1, 31)));
        assert_eq!(parse_due_input("in 3d", today), Some(date(2025, 2, 2)));
        assert_eq!(parse_due_input("in 2w", today), Some(date(2025, 2, 13)));
    }

    #[test]
    fn test_rejects_garbage() {
        let today = date(2025, 1, 15);
        assert_eq!(parse_due_input("", today), None);
        assert_eq!(parse_due_input("2025-02-30", today), None);
        assert_eq!(parse_due_input("next week", today), None);
        assert_eq!(parse_due_input("in xd", today), None);
        assert_eq!(parse_due_input("01/03/2025", today), None);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(2025, 3, 1)), "2025-03-01");
    }
}
