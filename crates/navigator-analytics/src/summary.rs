use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use navigator_core::models::record::PatientRecord;

use crate::metrics::{age_from_dob, parse_duration_days};
use crate::recovery::{PainProjection, RecoveryTimeline, pain_projection, recovery_timeline};
use crate::scoring::{
    HealthDimensions, RiskLevel, ScoreInputs, TreatmentResponse, health_dimensions, risk_score,
    treatment_response,
};
use crate::symptoms::{CategoryCount, SymptomCount, categorize, count_symptoms};

/// Where a patient is in their care, from the stage completion flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum JourneyStage {
    Intake,
    Triage,
    Assessment,
    Treatment,
}

impl JourneyStage {
    pub fn of(record: &PatientRecord) -> Self {
        if record.care_plan_complete {
            JourneyStage::Treatment
        } else if record.assessment_complete {
            JourneyStage::Assessment
        } else if record.intake_complete {
            JourneyStage::Triage
        } else {
            JourneyStage::Intake
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JourneyStage::Intake => "Intake",
            JourneyStage::Triage => "Triage",
            JourneyStage::Assessment => "Assessment",
            JourneyStage::Treatment => "Treatment",
        }
    }
}

/// Every derived metric for one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientAnalytics {
    pub patient_name: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub pain_level: Option<u8>,
    pub duration_days: Option<u32>,
    pub symptom_counts: Vec<SymptomCount>,
    pub symptom_categories: Vec<CategoryCount>,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub risk_color: String,
    /// Present once a pain level has been recorded.
    pub treatment_response: Option<TreatmentResponse>,
    pub health_dimensions: HealthDimensions,
    pub recovery_timeline: Option<RecoveryTimeline>,
    pub pain_projection: Option<PainProjection>,
    pub journey_stage: JourneyStage,
}

impl PatientAnalytics {
    /// Compute all metrics for `record` as of `today`.
    pub fn from_record(record: &PatientRecord, today: Date) -> Self {
        let age = age_from_dob(record.dob.as_deref(), today);
        let duration_days = record.duration.as_deref().and_then(parse_duration_days);
        let complaints = record.primary_complaints.as_deref().unwrap_or_default();
        let journey_stage = JourneyStage::of(record);

        let inputs = ScoreInputs {
            pain_level: record.pain_level,
            duration_days,
            age,
            complaints,
        };
        let score = risk_score(&inputs);
        let risk_level = RiskLevel::from_score(score);
        let symptom_counts = count_symptoms(complaints);
        let symptom_categories = categorize(&symptom_counts);

        Self {
            patient_name: record.display_name().to_string(),
            age,
            gender: record.gender.clone().filter(|g| !g.trim().is_empty()),
            pain_level: record.pain_level,
            duration_days,
            symptom_counts,
            symptom_categories,
            risk_score: score,
            risk_level,
            risk_color: risk_level.color_hex().to_string(),
            treatment_response: treatment_response(record.pain_level, duration_days),
            health_dimensions: health_dimensions(&inputs, journey_stage == JourneyStage::Treatment),
            recovery_timeline: record.pain_level.map(recovery_timeline),
            pain_projection: record.pain_level.map(|p| pain_projection(p, duration_days)),
            journey_stage,
        }
    }
}
