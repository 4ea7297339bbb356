//! Recovery timeline and projected pain curve.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub const RECOVERY_PHASES: [&str; 5] = [
    "Initial Treatment",
    "Symptom Management",
    "Improvement Phase",
    "Functional Recovery",
    "Full Recovery",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecoveryPhase {
    pub name: String,
    pub start_week: u32,
    pub weeks: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecoveryTimeline {
    /// Projected total, 3..=12 weeks.
    pub total_weeks: u32,
    pub phases: Vec<RecoveryPhase>,
}

impl RecoveryTimeline {
    /// Week the last phase ends. Can exceed `total_weeks` for short
    /// projections because every phase lasts at least a week.
    pub fn end_week(&self) -> u32 {
        self.phases.last().map_or(0, |p| p.start_week + p.weeks)
    }
}

/// Split `floor(pain × 1.5)` weeks, clamped to 3..=12, evenly across the
/// five phases with the remainder on the last one.
pub fn recovery_timeline(pain_level: u8) -> RecoveryTimeline {
    let total_weeks = ((f64::from(pain_level) * 1.5).floor() as u32).clamp(3, 12);
    let count = RECOVERY_PHASES.len() as u32;
    let per_phase = (total_weeks / count).max(1);
    let last = total_weeks.saturating_sub(per_phase * (count - 1)).max(1);

    let mut start_week = 0;
    let phases = RECOVERY_PHASES
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let weeks = if i as u32 == count - 1 { last } else { per_phase };
            let phase = RecoveryPhase {
                name: (*name).to_string(),
                start_week,
                weeks,
            };
            start_week += weeks;
            phase
        })
        .collect();

    RecoveryTimeline { total_weeks, phases }
}

// ── Pain projection ────────────────────────────────────────────

const SIGMOID_STEEPNESS: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Milestone {
    pub week: u32,
    pub event: String,
}

/// Expected pain level week by week, falling along an S-curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PainProjection {
    pub weeks: u32,
    /// One value per week, `0..=weeks`.
    pub pain_by_week: Vec<f64>,
    pub milestones: Vec<Milestone>,
}

/// `ceil(pain × 1.5)` weeks clamped to 4..=24, at least 12 when the
/// complaint is chronic (over 90 days).
pub fn pain_projection(pain_level: u8, duration_days: Option<u32>) -> PainProjection {
    let pain = f64::from(pain_level);
    let mut weeks = ((pain * 1.5).ceil() as u32).clamp(4, 24);
    if duration_days.is_some_and(|d| d > 90) {
        weeks = weeks.max(12);
    }

    let midpoint = f64::from(weeks) / 2.0;
    let pain_by_week = (0..=weeks)
        .map(|w| {
            let x = -SIGMOID_STEEPNESS * (f64::from(w) - midpoint);
            pain * (1.0 - 1.0 / (1.0 + x.exp()))
        })
        .collect();

    let at = |fraction: f64| (f64::from(weeks) * fraction).round_ties_even() as u32;
    let milestones = [
        (1, "Initial response to treatment"),
        (at(0.3), "Noticeable improvement"),
        (at(0.7), "Substantial recovery"),
        (weeks, "Expected full recovery"),
    ]
    .into_iter()
    .map(|(week, event)| Milestone {
        week,
        event: event.to_string(),
    })
    .collect();

    PainProjection {
        weeks,
        pain_by_week,
        milestones,
    }
}
