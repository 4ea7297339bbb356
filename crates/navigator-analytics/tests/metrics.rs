use jiff::civil::date;
use navigator_analytics::AnalyticsError;
use navigator_analytics::metrics::{age_from_dob, age_on, parse_dob, parse_duration_days};

#[test]
fn age_counts_whole_years() {
    let today = date(2024, 6, 15);
    assert_eq!(age_on(date(1990, 6, 15), today).unwrap(), 34);
    assert_eq!(age_on(date(1990, 6, 16), today).unwrap(), 33);
    assert_eq!(age_on(date(2024, 1, 1), today).unwrap(), 0);
}

#[test]
fn future_dob_is_rejected() {
    let err = age_on(date(2030, 1, 1), date(2024, 6, 15)).unwrap_err();
    assert!(matches!(err, AnalyticsError::FutureBirthDate(_)));
}

#[test]
fn unparseable_dob_gives_no_age() {
    let today = date(2024, 6, 15);
    assert!(parse_dob("last spring").is_err());
    assert_eq!(age_from_dob(Some("not a date"), today), None);
    assert_eq!(age_from_dob(None, today), None);
    assert_eq!(age_from_dob(Some("2000-02-29"), today), Some(24));
}

#[test]
fn duration_units_scale_to_days() {
    assert_eq!(parse_duration_days("3 days"), Some(3));
    assert_eq!(parse_duration_days("2 Weeks"), Some(14));
    assert_eq!(parse_duration_days("about 4 months"), Some(120));
    assert_eq!(parse_duration_days("1 year"), Some(365));
    assert_eq!(parse_duration_days("48 hours"), Some(2));
    assert_eq!(parse_duration_days("5 hours"), Some(1));
}

#[test]
fn half_days_round_to_even() {
    assert_eq!(parse_duration_days("60 hours"), Some(2));
    assert_eq!(parse_duration_days("84 hours"), Some(4));
    assert_eq!(parse_duration_days("12 hours"), Some(1));
}

#[test]
fn duration_edge_cases() {
    assert_eq!(parse_duration_days(""), None);
    assert_eq!(parse_duration_days("a while"), None);
    assert_eq!(parse_duration_days("10"), Some(0));
    // First number wins.
    assert_eq!(parse_duration_days("2-3 weeks"), Some(14));
}
