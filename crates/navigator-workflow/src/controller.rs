use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info};

use navigator_core::models::record::PatientRecord;
use navigator_core::models::stage::StageName;
use navigator_core::models::workflow_state::WorkflowState;
use navigator_llm::TextGenerator;

use crate::error::WorkflowError;
use crate::policy::FailurePolicy;
use crate::router;
use crate::stages::{self, StageRun};
use crate::transitions::TransitionTable;

/// Result of a committed `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    pub from: StageName,
    pub to: StageName,
    pub run: StageRun,
}

impl StepOutcome {
    pub fn advanced(&self) -> bool {
        self.from != self.to
    }
}

/// The intake workflow: an injected generator, the transition table and
/// the failure policy. Holds no per-patient state, so one instance can
/// serve any number of `WorkflowState`s.
#[derive(Clone)]
pub struct Workflow {
    generator: Arc<dyn TextGenerator>,
    transitions: TransitionTable,
    policy: FailurePolicy,
}

impl Workflow {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            transitions: TransitionTable::standard(),
            policy: FailurePolicy::default(),
        }
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_transitions(mut self, transitions: TransitionTable) -> Self {
        self.transitions = transitions;
        self
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.policy
    }

    pub fn transitions(&self) -> &TransitionTable {
        &self.transitions
    }

    /// A fresh state at the table's entry stage.
    pub fn start(&self, patient_data: PatientRecord) -> WorkflowState {
        WorkflowState::at(patient_data, self.transitions.initial())
    }

    /// Run the processor for `state.stage` without routing.
    pub fn process(&self, state: &mut WorkflowState) -> Result<StageRun, WorkflowError> {
        let processor = stages::processor_for(state.stage);
        stages::run(processor, self.generator.as_ref(), self.policy, state)
    }

    /// Run the current stage's processor and return the stage the router
    /// picks. Does not commit the move.
    pub fn next_stage(&self, state: &mut WorkflowState) -> Result<StageName, WorkflowError> {
        self.process(state)?;
        Ok(router::route(state.stage, &state.patient_data))
    }

    /// One transition: process the current stage once, route, then commit
    /// the new stage if the table allows it.
    ///
    /// On `IllegalTransition` the stage's results stay in the record but
    /// `state.stage` is left at `from`.
    pub fn step(&self, state: &mut WorkflowState) -> Result<StepOutcome, WorkflowError> {
        let from = state.stage;
        let run = self.process(state)?;
        let to = router::route(from, &state.patient_data);

        if to == from {
            info!(stage = %from, run = ?run, "step finished without advancing");
            return Ok(StepOutcome { from, to, run });
        }

        if !self.transitions.allows(from, to, &state.patient_data) {
            error!(from = %from, to = %to, "transition rejected by table");
            state.stage = from;
            return Err(WorkflowError::IllegalTransition { from, to });
        }

        state.stage = to;
        info!(from = %from, to = %to, run = ?run, "stage advanced");
        Ok(StepOutcome { from, to, run })
    }
}

impl std::fmt::Debug for Workflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workflow")
            .field("transitions", &self.transitions)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
