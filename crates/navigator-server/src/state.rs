use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use navigator_core::models::workflow_state::WorkflowState;
use navigator_export::styles::DocumentStyles;
use navigator_llm::compare::ModelGenerator;
use navigator_workflow::Workflow;

use crate::error::ApiError;
use crate::session::Session;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub workflow: Arc<Workflow>,
    pub comparer: Arc<dyn ModelGenerator>,
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    pub styles: Arc<DocumentStyles>,
}

impl AppState {
    pub fn new(workflow: Workflow, comparer: Arc<dyn ModelGenerator>) -> Self {
        Self {
            workflow: Arc::new(workflow),
            comparer,
            sessions: Arc::new(Mutex::new(HashMap::new())),
            styles: Arc::new(DocumentStyles::default()),
        }
    }

    /// A copy of the session. The lock is released before returning.
    pub async fn session(&self, id: Uuid) -> Result<Session, ApiError> {
        self.sessions
            .lock()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| session_not_found(id))
    }

    pub async fn insert(&self, session: Session) {
        self.sessions.lock().await.insert(session.id, session);
    }

    /// Write a step's result onto the stored session and return the
    /// updated copy. A session removed while the step ran stays removed.
    pub async fn commit(&self, id: Uuid, workflow: WorkflowState) -> Result<Session, ApiError> {
        let mut sessions = self.sessions.lock().await;
        let session = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;
        session.update(workflow);
        Ok(session.clone())
    }

    pub async fn remove(&self, id: Uuid) -> Option<Session> {
        self.sessions.lock().await.remove(&id)
    }

    /// Run one workflow step on the blocking pool and hand back the
    /// updated state. The input is consumed, so a failed step leaves the
    /// stored session as it was.
    pub async fn step(&self, mut state: WorkflowState) -> Result<WorkflowState, ApiError> {
        let workflow = Arc::clone(&self.workflow);
        tokio::task::spawn_blocking(move || -> Result<WorkflowState, ApiError> {
            workflow.step(&mut state)?;
            Ok(state)
        })
        .await?
    }
}

fn session_not_found(id: Uuid) -> ApiError {
    ApiError::NotFound(format!("session not found: {id}"))
}
