//! navigator-workflow
//!
//! The stage-transition engine. A `WorkflowState` moves through
//! intake → assessment → care planning one `step` at a time:
//!
//! 1. run the processor for the current stage (a no-op if its completion
//!    flag is already set),
//! 2. ask the router where the record should go next,
//! 3. check the move against the transition table and commit it.
//!
//! Public API:
//! - `Workflow::step()`: one full transition
//! - `Workflow::next_stage()`: process and route without committing
//! - `Workflow::process()`: run the current stage's processor only

pub mod controller;
pub mod error;
pub mod policy;
pub mod prompts;
pub mod router;
pub mod stages;
pub mod transitions;

pub use crate::controller::{StepOutcome, Workflow};
pub use crate::error::WorkflowError;
pub use crate::policy::FailurePolicy;
pub use crate::stages::{StageProcessor, StageRun};
pub use crate::transitions::TransitionTable;
