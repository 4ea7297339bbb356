use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    #[error("date of birth {0} is in the future")]
    FutureBirthDate(jiff::civil::Date),
}
