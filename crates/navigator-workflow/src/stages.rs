//! Stage processors.
//!
//! Each processor owns one completion flag and the result fields that go
//! with it. `run` is the shared driver: it short-circuits when the flag is
//! already set, otherwise prompts the generator once and writes the result
//! and the flag together.

use serde::Serialize;
use tracing::{debug, info, warn};

use navigator_core::models::care_level::CareLevel;
use navigator_core::models::record::PatientRecord;
use navigator_core::models::stage::StageName;
use navigator_core::models::workflow_state::WorkflowState;
use navigator_llm::clean::clean_response;
use navigator_llm::{GenerationError, TextGenerator};

use crate::error::WorkflowError;
use crate::policy::FailurePolicy;
use crate::prompts;

/// What a processor did with the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageRun {
    /// The generator was called and its reply stored.
    Generated,
    /// The completion flag was already set; nothing was touched.
    AlreadyComplete,
    /// The generator failed and a diagnostic was stored in place of a
    /// result (`FailurePolicy::RecordPlaceholder`).
    Placeholder,
}

/// One stage of the intake workflow.
pub trait StageProcessor: Send + Sync {
    /// The stage this processor owns.
    fn stage(&self) -> StageName;

    fn system_prompt(&self) -> &'static str {
        prompts::system_prompt(self.stage())
    }

    fn build_prompt(&self, record: &PatientRecord) -> Result<String, WorkflowError> {
        Ok(prompts::build_prompt(record, self.stage())?)
    }

    /// Write `text` into the result fields and set the completion flag.
    /// Must write both or neither.
    fn apply(&self, record: &mut PatientRecord, text: String);
}

// ── Processors ─────────────────────────────────────────────────

/// Initial risk screening from the intake form.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntakeCoordinator;

impl StageProcessor for IntakeCoordinator {
    fn stage(&self) -> StageName {
        StageName::Intake
    }

    fn apply(&self, record: &mut PatientRecord, text: String) {
        record.risk_assessment = Some(text);
        record.intake_complete = true;
    }
}

/// Detailed clinical assessment once the assessment form is merged.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClinicalAssessor;

impl StageProcessor for ClinicalAssessor {
    fn stage(&self) -> StageName {
        StageName::Assessment
    }

    fn apply(&self, record: &mut PatientRecord, text: String) {
        record.clinical_assessment = Some(text);
        record.assessment_complete = true;
    }
}

/// Treatment recommendations and the care level derived from them.
#[derive(Debug, Clone, Copy, Default)]
pub struct CarePlanner;

impl StageProcessor for CarePlanner {
    fn stage(&self) -> StageName {
        StageName::CarePlanning
    }

    fn apply(&self, record: &mut PatientRecord, text: String) {
        record.care_level = Some(CareLevel::from_plan_text(&text));
        record.treatment_recommendations = Some(text);
        record.care_plan_complete = true;
    }
}

static INTAKE: IntakeCoordinator = IntakeCoordinator;
static ASSESSMENT: ClinicalAssessor = ClinicalAssessor;
static CARE_PLANNING: CarePlanner = CarePlanner;

/// The processor registered for `stage`.
pub fn processor_for(stage: StageName) -> &'static dyn StageProcessor {
    match stage {
        StageName::Intake => &INTAKE,
        StageName::Assessment => &ASSESSMENT,
        StageName::CarePlanning => &CARE_PLANNING,
    }
}

// ── Driver ─────────────────────────────────────────────────────

/// Run `processor` against the state. Sets `state.stage` to the
/// processor's stage whatever the outcome.
pub fn run(
    processor: &dyn StageProcessor,
    generator: &dyn TextGenerator,
    policy: FailurePolicy,
    state: &mut WorkflowState,
) -> Result<StageRun, WorkflowError> {
    let stage = processor.stage();
    state.stage = stage;

    if state.patient_data.is_complete(stage) {
        debug!(stage = %stage, "stage already complete, skipping");
        return Ok(StageRun::AlreadyComplete);
    }

    let prompt = processor.build_prompt(&state.patient_data)?;
    info!(
        stage = %stage,
        patient = state.patient_data.display_name(),
        prompt_chars = prompt.len(),
        "generating stage result"
    );

    let outcome = generator
        .generate(&prompt, Some(processor.system_prompt()))
        .map(|raw| clean_response(&raw))
        .and_then(|text| {
            if text.is_empty() {
                Err(GenerationError::EmptyResponse)
            } else {
                Ok(text)
            }
        });

    match outcome {
        Ok(text) => {
            info!(stage = %stage, result_chars = text.len(), "stage complete");
            processor.apply(&mut state.patient_data, text);
            Ok(StageRun::Generated)
        }
        Err(source) => match policy {
            FailurePolicy::Propagate => {
                warn!(stage = %stage, error = %source, "generation failed, stage left incomplete");
                Err(WorkflowError::GenerationFailed { stage, source })
            }
            FailurePolicy::RecordPlaceholder => {
                warn!(stage = %stage, error = %source, "generation failed, recording placeholder");
                processor.apply(&mut state.patient_data, format!("Error: {source}"));
                Ok(StageRun::Placeholder)
            }
        },
    }
}
