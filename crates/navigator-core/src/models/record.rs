use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::care_level::CareLevel;
use super::forms::{AssessmentForm, IntakeForm};
use super::stage::StageName;
use crate::error::CoreError;

/// Timestamp layout stored in `intake_timestamp` / `assessment_timestamp`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The accumulating patient record threaded through every stage.
///
/// Serializes to a flat JSON object keyed by the field names below. Absent
/// optionals and unset completion flags are omitted, and any keys this type
/// does not know about are kept in `extra` and written back out untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientRecord {
    // Identity and demographics, written at intake
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_relation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_complaints: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub existing_conditions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_medications: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance_provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_str: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intake_timestamp: Option<String>,

    // Assessment form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pain_level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symptom_frequency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symptoms_worsen: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_treatment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medications_tried: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_timestamp: Option<String>,

    // Stage results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_assessment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinical_assessment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub treatment_recommendations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub care_level: Option<CareLevel>,

    // Completion flags: set once by the owning stage, never cleared
    #[serde(default, skip_serializing_if = "is_false")]
    pub intake_complete: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub assessment_complete: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub care_plan_complete: bool,

    /// Keys not modelled above.
    #[serde(flatten)]
    #[ts(skip)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl PatientRecord {
    /// A record holding only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Build the initial record from a submitted intake form.
    pub fn from_intake(form: &IntakeForm, submitted_at: jiff::civil::DateTime) -> Self {
        let location_str = form.location_str();
        // Location fields are only kept alongside a usable location line.
        let located = |value: &str| {
            if location_str.is_some() {
                value.to_string()
            } else {
                String::new()
            }
        };

        Self {
            name: Some(form.name.clone()),
            contact: Some(form.contact.clone()),
            dob: form.dob.map(|d| d.to_string()),
            emergency_contact: Some(form.emergency_contact.clone()),
            emergency_relation: Some(form.emergency_relation.clone()),
            gender: Some(form.gender.clone()),
            primary_complaints: Some(form.primary_complaints.clone()),
            existing_conditions: Some(form.existing_conditions.clone()),
            current_medications: Some(form.current_medications.clone()),
            insurance_provider: Some(form.insurance_provider.clone()),
            insurance_id: Some(form.insurance_id.clone()),
            address: Some(located(&form.address)),
            city: Some(located(&form.city)),
            state: Some(located(&form.state)),
            zipcode: Some(located(&form.zipcode)),
            location_str: Some(location_str.clone().unwrap_or_default()),
            intake_timestamp: Some(submitted_at.strftime(TIMESTAMP_FORMAT).to_string()),
            ..Self::default()
        }
    }

    /// Merge the assessment form into the record before the assessment stage.
    pub fn apply_assessment(&mut self, form: &AssessmentForm, submitted_at: jiff::civil::DateTime) {
        self.pain_level = Some(form.pain_level);
        self.duration = Some(form.duration.clone());
        self.symptom_frequency = Some(form.symptom_frequency.clone());
        self.symptoms_worsen = Some(form.symptoms_worsen.clone());
        self.previous_treatment = Some(form.previous_treatment.clone());
        self.medications_tried = Some(form.medications_tried.clone());
        self.assessment_timestamp = Some(submitted_at.strftime(TIMESTAMP_FORMAT).to_string());
    }

    /// Completion flag owned by `stage`.
    pub fn is_complete(&self, stage: StageName) -> bool {
        match stage {
            StageName::Intake => self.intake_complete,
            StageName::Assessment => self.assessment_complete,
            StageName::CarePlanning => self.care_plan_complete,
        }
    }

    /// Result text written by `stage`, if any.
    pub fn result_text(&self, stage: StageName) -> Option<&str> {
        match stage {
            StageName::Intake => self.risk_assessment.as_deref(),
            StageName::Assessment => self.clinical_assessment.as_deref(),
            StageName::CarePlanning => self.treatment_recommendations.as_deref(),
        }
    }

    /// The record as a JSON object map (sorted keys).
    pub fn to_json_map(&self) -> Result<serde_json::Map<String, serde_json::Value>, CoreError> {
        match serde_json::to_value(self)? {
            serde_json::Value::Object(map) => Ok(map),
            _ => Ok(serde_json::Map::new()),
        }
    }

    /// Name for display, `"Patient"` when unknown.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => "Patient",
        }
    }
}
