//! End-to-end tests for the formatting pipeline.

use zoned_fmt::{format_date, format_date_language, ErrorKind};

const INSTANT: &str = "2024-05-20T12:00:00Z";

#[test]
fn english_region_variant_uses_english_month_names() {
    let out = format_date_language(INSTANT.into(), "MMMM d, yyyy", "en-US", "UTC").unwrap();
    assert!(out.contains("May"), "{out}");
    assert!(!out.contains("mayo"), "{out}");
}

#[test]
fn spanish_region_variant_uses_spanish_month_names() {
    let out = format_date_language(INSTANT.into(), "d 'de' MMMM", "es-ES", "UTC").unwrap();
    assert!(out.contains("mayo"), "{out}");
}

#[test]
fn hour_reflects_the_requested_zone() {
    // New York is UTC-4 in May.
    let out = format_date_language(INSTANT.into(), "H:mm", "en", "America/New_York").unwrap();
    assert_eq!(out, "8:00");
}

#[test]
fn unsupported_language_falls_back_to_english() {
    let out = format_date_language(INSTANT.into(), "MMMM", "xx", "UTC").unwrap();
    assert_eq!(out, "May");
}

#[test]
fn malformed_date_fails_with_date_error() {
    let err = format_date("not-a-date".into(), "d MMMM yyyy", "UTC").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Date);
}

#[test]
fn unknown_zone_fails_with_time_zone_error() {
    let err = format_date(INSTANT.into(), "d MMMM yyyy", "Mars/Olympus").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TimeZone);
}

#[test]
fn unknown_pattern_token_fails_with_pattern_error() {
    let err = format_date(INSTANT.into(), "d Q yyyy", "UTC").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Pattern);
}

#[test]
fn formatting_is_deterministic() {
    let first = format_date_language(INSTANT.into(), "EEEE, d MMMM yyyy H:mm", "ca", "UTC").unwrap();
    let second =
        format_date_language(INSTANT.into(), "EEEE, d MMMM yyyy H:mm", "ca", "UTC").unwrap();
    assert_eq!(first, second);
}

#[test]
fn region_stripping_matches_base_language() {
    for (variant, base) in [("en-US", "en"), ("es-ES", "es"), ("ca-ES", "ca")] {
        let with_region =
            format_date_language(INSTANT.into(), "EEEE, d MMMM yyyy", variant, "UTC").unwrap();
        let without =
            format_date_language(INSTANT.into(), "EEEE, d MMMM yyyy", base, "UTC").unwrap();
        assert_eq!(with_region, without, "{variant} vs {base}");
    }
}

#[test]
fn default_language_is_english() {
    let explicit = format_date_language(INSTANT.into(), "MMMM yyyy", "en", "UTC").unwrap();
    let implicit = format_date(INSTANT.into(), "MMMM yyyy", "UTC").unwrap();
    assert_eq!(explicit, implicit);
    assert_eq!(implicit, "May 2024");
}

#[test]
fn catalan_full_date() {
    let out =
        format_date_language(INSTANT.into(), "EEEE, d MMMM 'de' yyyy", "ca", "UTC").unwrap();
    assert_eq!(out, "dilluns, 20 maig de 2024");
}

#[test]
fn zone_conversion_never_changes_the_instant() {
    // Same instant rendered in two zones differs only in wall-clock fields.
    let utc = format_date(INSTANT.into(), "yyyy-MM-dd HH:mm", "UTC").unwrap();
    let tokyo = format_date(INSTANT.into(), "yyyy-MM-dd HH:mm", "Asia/Tokyo").unwrap();
    assert_eq!(utc, "2024-05-20 12:00");
    assert_eq!(tokyo, "2024-05-20 21:00");
}
