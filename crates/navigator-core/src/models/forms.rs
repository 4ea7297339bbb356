//! Raw form inputs collected by the presentation layer.
//!
//! Forms are validated for the handful of fields a user must fill in before
//! a stage runs. The workflow itself never validates; anything accepted here
//! flows into the record as-is.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Placeholder value of an unselected dropdown.
pub const UNSELECTED: &str = "Select";

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct IntakeForm {
    pub name: String,
    pub contact: String,
    pub dob: Option<jiff::civil::Date>,
    pub emergency_contact: String,
    pub emergency_relation: String,
    pub gender: String,
    pub primary_complaints: String,
    pub existing_conditions: String,
    pub current_medications: String,
    pub insurance_provider: String,
    pub insurance_id: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
}

impl IntakeForm {
    /// Check the fields marked required on the intake form.
    pub fn validate(&self) -> Result<(), CoreError> {
        require("name", &self.name)?;
        require("contact", &self.contact)?;
        require("emergency_contact", &self.emergency_contact)?;
        require("primary_complaints", &self.primary_complaints)?;
        Ok(())
    }

    /// Joined location line, only when the city plus a state or ZIP is known.
    pub fn location_str(&self) -> Option<String> {
        let has_region = !self.state.trim().is_empty() || !self.zipcode.trim().is_empty();
        if self.city.trim().is_empty() || !has_region {
            return None;
        }

        let parts: Vec<&str> = [&self.address, &self.city, &self.state, &self.zipcode]
            .into_iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();
        Some(parts.join(", "))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct AssessmentForm {
    pub pain_level: u8,
    pub duration: String,
    pub symptom_frequency: String,
    pub symptoms_worsen: String,
    pub previous_treatment: String,
    pub medications_tried: String,
}

impl Default for AssessmentForm {
    fn default() -> Self {
        Self {
            pain_level: 5,
            duration: String::new(),
            symptom_frequency: UNSELECTED.to_string(),
            symptoms_worsen: String::new(),
            previous_treatment: String::new(),
            medications_tried: String::new(),
        }
    }
}

impl AssessmentForm {
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(1..=10).contains(&self.pain_level) {
            return Err(CoreError::InvalidField {
                field: "pain_level".to_string(),
                reason: format!("{} is outside 1-10", self.pain_level),
            });
        }
        require("duration", &self.duration)?;
        require("symptom_frequency", &self.symptom_frequency)?;
        if self.symptom_frequency.trim() == UNSELECTED {
            return Err(CoreError::MissingField("symptom_frequency".to_string()));
        }
        Ok(())
    }
}

fn require(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::MissingField(field.to_string()));
    }
    Ok(())
}
