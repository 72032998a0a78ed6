//! Date parsing and display helpers.
//!
//! The backend emits local timestamps without an offset
//! (`2025-03-10T14:30:00`, sometimes with fractional seconds), and the
//! occasional RFC 3339 value. Everything is shown as `dd/mm/yyyy hh:mm`.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Academic years offered by the section year selectors.
pub const ACADEMIC_YEARS: [i32; 4] = [2024, 2025, 2026, 2027];

/// Placeholder for a missing or unreadable date.
pub const MISSING_DATE: &str = "N/A";

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"]
        .into_iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// `dd/mm/yyyy hh:mm`, or `N/A` when absent or unparsable.
pub fn format_short_datetime(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map_or_else(|| MISSING_DATE.to_owned(), |dt| dt.format("%d/%m/%Y %H:%M").to_string())
}

/// `dd/mm/yyyy`, or `N/A` when absent or unparsable.
pub fn format_short_date(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map_or_else(|| MISSING_DATE.to_owned(), |dt| dt.format("%d/%m/%Y").to_string())
}

/// Due-date value posted for a date picked in a task form.
pub fn due_date_payload(date: &str) -> String {
    format!("{}T00:00:00", date.trim())
}

/// Year options for editing a section: its year plus the next four.
pub fn edit_year_options(base: i32) -> Vec<i32> {
    (base..base + 5).collect()
}
