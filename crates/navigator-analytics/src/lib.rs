//! navigator-analytics
//!
//! Derived clinical metrics over a `PatientRecord`. Pure functions, no I/O:
//! every value is computed from the record plus a caller-supplied `today`.

pub mod error;
pub mod metrics;
pub mod recovery;
pub mod scoring;
pub mod summary;
pub mod symptoms;

pub use crate::error::AnalyticsError;
pub use crate::summary::{JourneyStage, PatientAnalytics};
