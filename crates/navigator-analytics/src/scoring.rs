//! Clinical risk score, treatment-response estimates and the health
//! dimension profile.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Complaint substrings that add to the risk score. Only the first match
/// counts.
pub const HIGH_RISK_TERMS: &[&str] = &[
    "fever",
    "breathing",
    "chest",
    "unconscious",
    "breath",
    "dizzy",
];

const BASE_RISK: u8 = 50;
const MAX_RISK: u8 = 100;

/// Inputs shared by the score functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreInputs<'a> {
    pub pain_level: Option<u8>,
    pub duration_days: Option<u32>,
    pub age: Option<i32>,
    pub complaints: &'a str,
}

/// 0..=100 risk score. Starts at 50 and adds for severe pain, long
/// duration, age at either end of the range and any high-risk complaint.
pub fn risk_score(inputs: &ScoreInputs<'_>) -> u8 {
    let mut score = BASE_RISK;

    match inputs.pain_level {
        Some(p) if p >= 8 => score += 15,
        Some(p) if p >= 5 => score += 7,
        _ => {}
    }

    match inputs.duration_days {
        Some(d) if d > 14 => score += 10,
        Some(d) if d > 7 => score += 5,
        _ => {}
    }

    if inputs.age.is_some_and(|age| !(12..=65).contains(&age)) {
        score += 8;
    }

    let complaints = inputs.complaints.to_lowercase();
    if HIGH_RISK_TERMS.iter().any(|term| complaints.contains(term)) {
        score += 10;
    }

    score.min(MAX_RISK)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            70.. => RiskLevel::High,
            40..=69 => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    pub fn color_hex(&self) -> &'static str {
        match self {
            RiskLevel::Low => "#2A9D8F",
            RiskLevel::Medium => "#F4A261",
            RiskLevel::High => "#E63946",
        }
    }
}

// ── Treatment response ─────────────────────────────────────────

/// Estimated response rate (percent) per treatment type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TreatmentResponse {
    pub medication: u32,
    pub physical_therapy: u32,
    pub surgery: u32,
    pub lifestyle: u32,
    pub counseling: u32,
}

/// Chronic threshold for the duration adjustment.
const CHRONIC_DAYS: u32 = 90;

/// Base rates adjusted for pain (conservative treatments respond less as
/// pain rises) and for chronic duration. `None` without a pain level.
pub fn treatment_response(
    pain_level: Option<u8>,
    duration_days: Option<u32>,
) -> Option<TreatmentResponse> {
    let pain = f64::from(pain_level?);
    let pain_factor = (10.0 - pain) / 10.0;

    let mut medication = 60.0 * (0.8 + 0.4 * pain_factor);
    let mut physical_therapy = 50.0 * (0.7 + 0.6 * pain_factor);
    let surgery = 80.0;
    let lifestyle = 40.0 * (0.6 + 0.8 * pain_factor);
    let mut counseling = 45.0;

    if duration_days.is_some_and(|d| d > CHRONIC_DAYS) {
        medication *= 0.8;
        physical_therapy *= 1.1;
        counseling *= 1.2;
    }

    Some(TreatmentResponse {
        medication: percent(medication),
        physical_therapy: percent(physical_therapy),
        surgery: percent(surgery),
        lifestyle: percent(lifestyle),
        counseling: percent(counseling),
    })
}

fn percent(value: f64) -> u32 {
    value.round_ties_even().max(0.0) as u32
}

// ── Health dimensions ──────────────────────────────────────────

/// 1..=10 ratings for the radar view of a patient's wellbeing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthDimensions {
    pub pain_management: u8,
    pub mobility: u8,
    pub daily_function: u8,
    pub mental_health: u8,
    pub sleep_quality: u8,
    pub treatment_response: u8,
}

impl HealthDimensions {
    pub const LABELS: [&'static str; 6] = [
        "Pain Management",
        "Mobility",
        "Daily Function",
        "Mental Health",
        "Sleep Quality",
        "Treatment Response",
    ];

    /// Values in `LABELS` order.
    pub fn values(&self) -> [u8; 6] {
        [
            self.pain_management,
            self.mobility,
            self.daily_function,
            self.mental_health,
            self.sleep_quality,
            self.treatment_response,
        ]
    }
}

fn mentions_any(complaints: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| complaints.contains(t))
}

pub fn health_dimensions(inputs: &ScoreInputs<'_>, in_treatment: bool) -> HealthDimensions {
    let complaints = inputs.complaints.to_lowercase();
    let pain = inputs.pain_level.unwrap_or(0);
    let long_running = inputs.duration_days.is_some_and(|d| d > 14);

    let pain_management = inputs.pain_level.map_or(5, |p| 10u8.saturating_sub(p));

    let mut mobility: i8 = 7;
    if mentions_any(&complaints, &["walk", "mobility", "movement", "leg"]) {
        mobility -= 3;
    }
    if pain > 6 {
        mobility -= 2;
    }

    let mut daily_function: i8 = 8;
    if pain > 7 {
        daily_function -= 3;
    }
    if long_running {
        daily_function -= 2;
    }

    let mut mental_health: i8 = 7;
    if mentions_any(&complaints, &["stress", "anxious", "worry", "depress"]) {
        mental_health -= 3;
    }
    if pain > 8 {
        mental_health -= 2;
    }

    let mut sleep_quality: i8 = 6;
    if mentions_any(&complaints, &["sleep", "insomnia", "tired", "fatigue"]) {
        sleep_quality -= 3;
    }
    if pain > 6 {
        sleep_quality -= 2;
    }

    HealthDimensions {
        pain_management,
        mobility: floor_one(mobility),
        daily_function: floor_one(daily_function),
        mental_health: floor_one(mental_health),
        sleep_quality: floor_one(sleep_quality),
        treatment_response: if in_treatment { 7 } else { 5 },
    }
}

fn floor_one(value: i8) -> u8 {
    value.max(1) as u8
}
