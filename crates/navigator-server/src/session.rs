use jiff::Timestamp;
use serde::Serialize;
use uuid::Uuid;

use navigator_core::models::stage::StageName;
use navigator_core::models::workflow_state::WorkflowState;

/// One patient's pass through the workflow.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub workflow: WorkflowState,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Session {
    pub fn new(workflow: WorkflowState) -> Self {
        let now = Timestamp::now();
        Self {
            id: Uuid::new_v4(),
            workflow,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the workflow state after a step.
    pub fn update(&mut self, workflow: WorkflowState) {
        self.workflow = workflow;
        self.updated_at = Timestamp::now();
    }

    pub fn progress(&self) -> Progress {
        let completed = StageName::ALL
            .into_iter()
            .filter(|stage| self.workflow.patient_data.is_complete(*stage))
            .count() as u8;
        let total = StageName::ALL.len() as u8;
        Progress {
            completed,
            total,
            percent: (u32::from(completed) * 100 / u32::from(total)) as u8,
        }
    }
}

impl From<Session> for SessionView {
    fn from(session: Session) -> Self {
        Self {
            id: session.id,
            created_at: session.created_at,
            updated_at: session.updated_at,
            stage_title: session.workflow.stage.title(),
            progress: session.progress(),
            state: session.workflow,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub completed: u8,
    pub total: u8,
    pub percent: u8,
}

/// Wire form of a session: the workflow state plus derived progress.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub id: Uuid,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub stage_title: &'static str,
    pub progress: Progress,
    #[serde(flatten)]
    pub state: WorkflowState,
}
