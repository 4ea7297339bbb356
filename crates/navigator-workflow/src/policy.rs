use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What a stage does when its model call fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Return `GenerationFailed`, leave the record untouched and the
    /// completion flag unset. The step can be retried.
    #[default]
    Propagate,
    /// Store `"Error: <message>"` as the stage result and mark the stage
    /// complete. Later stages then see the diagnostic text as input.
    RecordPlaceholder,
}

impl FailurePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailurePolicy::Propagate => "propagate",
            FailurePolicy::RecordPlaceholder => "record_placeholder",
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "propagate" => Ok(FailurePolicy::Propagate),
            "record_placeholder" => Ok(FailurePolicy::RecordPlaceholder),
            other => Err(format!(
                "unknown failure policy {other:?} (expected propagate or record_placeholder)"
            )),
        }
    }
}
