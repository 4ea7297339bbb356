use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One of the three sequential phases of the patient workflow.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StageName {
    #[default]
    Intake,
    Assessment,
    CarePlanning,
}

impl StageName {
    /// Every stage in workflow order.
    pub const ALL: [StageName; 3] = [
        StageName::Intake,
        StageName::Assessment,
        StageName::CarePlanning,
    ];

    /// Wire name, e.g. `care_planning`.
    pub fn as_str(&self) -> &'static str {
        match self {
            StageName::Intake => "intake",
            StageName::Assessment => "assessment",
            StageName::CarePlanning => "care_planning",
        }
    }

    /// Human-readable title shown in navigation.
    pub fn title(&self) -> &'static str {
        match self {
            StageName::Intake => "Intake",
            StageName::Assessment => "Assessment",
            StageName::CarePlanning => "Care Planning",
        }
    }
}

impl fmt::Display for StageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StageName {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "intake" => Ok(StageName::Intake),
            "assessment" => Ok(StageName::Assessment),
            "care_planning" => Ok(StageName::CarePlanning),
            other => Err(CoreError::UnknownStage(other.to_string())),
        }
    }
}
