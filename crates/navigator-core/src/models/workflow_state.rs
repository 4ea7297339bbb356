use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::record::PatientRecord;
use super::stage::StageName;

/// The unit the workflow steps: a record and the stage it sits in.
///
/// Owned by the caller. Created on intake submission, mutated once per step,
/// and dropped when the user starts over.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WorkflowState {
    pub patient_data: PatientRecord,
    #[serde(default)]
    pub stage: StageName,
}

impl WorkflowState {
    pub fn new(patient_data: PatientRecord) -> Self {
        Self {
            patient_data,
            stage: StageName::Intake,
        }
    }

    pub fn at(patient_data: PatientRecord, stage: StageName) -> Self {
        Self {
            patient_data,
            stage,
        }
    }
}
