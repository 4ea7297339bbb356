use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Triage label derived from the care-planning text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum CareLevel {
    #[default]
    Routine,
    Urgent,
    Emergency,
}

impl CareLevel {
    /// Derive a care level by keyword sniffing.
    ///
    /// Matching is case-insensitive and anywhere in the text. "emergency"
    /// wins over "urgent"; neither means `Routine`.
    pub fn from_plan_text(text: &str) -> Self {
        let lowered = text.to_lowercase();
        if lowered.contains("emergency") {
            CareLevel::Emergency
        } else if lowered.contains("urgent") {
            CareLevel::Urgent
        } else {
            CareLevel::Routine
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CareLevel::Routine => "Routine",
            CareLevel::Urgent => "Urgent",
            CareLevel::Emergency => "Emergency",
        }
    }

    /// Highlight colour for the care level in exported documents.
    pub fn color_hex(&self) -> &'static str {
        match self {
            CareLevel::Routine => "#28a745",
            CareLevel::Urgent => "#ffc107",
            CareLevel::Emergency => "#dc3545",
        }
    }
}

impl fmt::Display for CareLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CareLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Routine" => Ok(CareLevel::Routine),
            "Urgent" => Ok(CareLevel::Urgent),
            "Emergency" => Ok(CareLevel::Emergency),
            other => Err(CoreError::UnknownCareLevel(other.to_string())),
        }
    }
}
