use super::*;

#[test]
fn formats_backend_local_timestamp() {
    assert_eq!(format_short_datetime(Some("2025-03-10T14:30:00")), "10/03/2025 14:30");
    assert_eq!(format_short_datetime(Some("2025-03-10T08:05:59.123")), "10/03/2025 08:05");
}

#[test]
fn formats_rfc3339_in_its_own_offset() {
    assert_eq!(format_short_datetime(Some("2025-12-01T23:45:00-05:00")), "01/12/2025 23:45");
}

#[test]
fn date_only_values_become_midnight() {
    assert_eq!(format_short_datetime(Some("2025-07-04")), "04/07/2025 00:00");
    assert_eq!(format_short_date(Some("2025-07-04T10:00:00")), "04/07/2025");
}

#[test]
fn missing_or_garbage_is_na() {
    assert_eq!(format_short_datetime(None), "N/A");
    assert_eq!(format_short_datetime(Some("")), "N/A");
    assert_eq!(format_short_datetime(Some("mañana")), "N/A");
    assert_eq!(format_short_date(None), "N/A");
}

#[test]
fn due_date_payload_appends_midnight() {
    assert_eq!(due_date_payload("2025-06-30"), "2025-06-30T00:00:00");
}

#[test]
fn edit_year_options_span_five_years() {
    assert_eq!(edit_year_options(2025), vec![2025, 2026, 2027, 2028, 2029]);
    assert_eq!(ACADEMIC_YEARS.first(), Some(&2024));
    assert_eq!(ACADEMIC_YEARS.last(), Some(&2027));
}
