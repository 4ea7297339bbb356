//! Age and symptom-duration parsing.

use std::sync::LazyLock;

use jiff::civil::Date;
use regex::Regex;

use crate::error::AnalyticsError;

static FIRST_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("FIRST_NUMBER regex should compile"));

/// Parse a `YYYY-MM-DD` date of birth.
pub fn parse_dob(value: &str) -> Result<Date, AnalyticsError> {
    Date::strptime("%Y-%m-%d", value.trim()).map_err(|e| AnalyticsError::InvalidDate {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Whole years between `dob` and `today`.
pub fn age_on(dob: Date, today: Date) -> Result<i32, AnalyticsError> {
    if dob > today {
        return Err(AnalyticsError::FutureBirthDate(dob));
    }
    let mut age = i32::from(today.year()) - i32::from(dob.year());
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    Ok(age)
}

/// Age from the record's free-text date of birth, if it parses.
pub fn age_from_dob(dob: Option<&str>, today: Date) -> Option<i32> {
    let dob = parse_dob(dob?).ok()?;
    age_on(dob, today).ok()
}

/// Approximate length of a free-text duration such as `"3 weeks"` in days.
///
/// Takes the first integer in the text and scales it by the first unit
/// found, checked in the order day, week, month, year, hour. Hours round
/// half to even into whole days with a minimum of one. A number with no
/// recognised unit yields `Some(0)`; text without a number yields `None`.
pub fn parse_duration_days(duration: &str) -> Option<u32> {
    let lowered = duration.to_lowercase();
    let num: u32 = FIRST_NUMBER.find(&lowered)?.as_str().parse().ok()?;

    let days = if lowered.contains("day") {
        num
    } else if lowered.contains("week") {
        num.saturating_mul(7)
    } else if lowered.contains("month") {
        num.saturating_mul(30)
    } else if lowered.contains("year") {
        num.saturating_mul(365)
    } else if lowered.contains("hour") {
        ((f64::from(num) / 24.0).round_ties_even() as u32).max(1)
    } else {
        0
    };
    Some(days)
}
