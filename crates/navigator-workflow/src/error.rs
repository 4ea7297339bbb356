use thiserror::Error;

use navigator_core::error::CoreError;
use navigator_core::models::stage::StageName;
use navigator_llm::GenerationError;

#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The model call for a stage failed. The stage's completion flag was
    /// left unset, so the same step can be submitted again.
    #[error("{stage} generation failed: {source}")]
    GenerationFailed {
        stage: StageName,
        #[source]
        source: GenerationError,
    },

    /// The router proposed a move the transition table does not allow.
    #[error("transition from {from} to {to} is not allowed")]
    IllegalTransition { from: StageName, to: StageName },

    #[error("failed to build prompt: {0}")]
    Prompt(#[from] CoreError),
}

impl WorkflowError {
    /// Whether resubmitting the same step may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, WorkflowError::GenerationFailed { .. })
    }
}
