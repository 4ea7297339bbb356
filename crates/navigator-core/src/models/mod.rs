pub mod care_level;
pub mod forms;
pub mod record;
pub mod stage;
pub mod workflow_state;
