mod common;

use navigator_core::models::care_level::CareLevel;
use navigator_core::models::record::PatientRecord;
use navigator_core::models::stage::StageName;
use navigator_core::models::workflow_state::WorkflowState;
use navigator_workflow::prompts;
use navigator_workflow::stages;
use navigator_workflow::{FailurePolicy, StageRun};

use common::ScriptedGenerator;

fn plan_with(text: &str) -> Option<CareLevel> {
    let mut state = WorkflowState::at(PatientRecord::named("Ana"), StageName::CarePlanning);
    let generator = ScriptedGenerator::replying(text);
    stages::run(
        stages::processor_for(StageName::CarePlanning),
        &generator,
        FailurePolicy::Propagate,
        &mut state,
    )
    .unwrap();
    state.patient_data.care_level
}

#[test]
fn care_level_follows_plan_text() {
    assert_eq!(plan_with("Routine follow-up in two weeks."), Some(CareLevel::Routine));
    assert_eq!(plan_with("This is URGENT."), Some(CareLevel::Urgent));
    assert_eq!(
        plan_with("Urgent review, escalate to emergency care if worse."),
        Some(CareLevel::Emergency)
    );
}

#[test]
fn processors_own_their_stage() {
    for stage in StageName::ALL {
        assert_eq!(stages::processor_for(stage).stage(), stage);
    }
}

#[test]
fn processor_sends_its_system_prompt() {
    let generator = ScriptedGenerator::replying("# Clinical Assessment");
    let mut state = WorkflowState::at(PatientRecord::named("Ana"), StageName::Assessment);

    stages::run(
        stages::processor_for(StageName::Assessment),
        &generator,
        FailurePolicy::Propagate,
        &mut state,
    )
    .unwrap();

    let (prompt, system) = generator.last_prompt().unwrap();
    assert_eq!(system.as_deref(), Some(prompts::ASSESSMENT_SYSTEM_PROMPT));
    assert!(prompt.contains("\"name\": \"Ana\""));
    assert!(prompt.contains("## 5. Areas Requiring Immediate Medical Attention:"));
    assert_eq!(state.patient_data.clinical_assessment.as_deref(), Some("# Clinical Assessment"));
    assert!(state.patient_data.assessment_complete);
}

#[test]
fn run_moves_state_to_processor_stage() {
    let generator = ScriptedGenerator::new(vec![]);
    let mut record = PatientRecord::named("Ana");
    record.assessment_complete = true;
    record.clinical_assessment = Some("done".into());
    let mut state = WorkflowState::at(record, StageName::Intake);

    let run = stages::run(
        stages::processor_for(StageName::Assessment),
        &generator,
        FailurePolicy::Propagate,
        &mut state,
    )
    .unwrap();

    assert_eq!(run, StageRun::AlreadyComplete);
    assert_eq!(state.stage, StageName::Assessment);
    assert_eq!(generator.calls(), 0);
}

#[test]
fn placeholder_care_plan_still_gets_a_level() {
    let generator = ScriptedGenerator::failing("rate limited");
    let mut state = WorkflowState::at(PatientRecord::named("Ana"), StageName::CarePlanning);

    let run = stages::run(
        stages::processor_for(StageName::CarePlanning),
        &generator,
        FailurePolicy::RecordPlaceholder,
        &mut state,
    )
    .unwrap();

    assert_eq!(run, StageRun::Placeholder);
    assert!(state.patient_data.care_plan_complete);
    assert_eq!(state.patient_data.care_level, Some(CareLevel::Routine));
    assert!(
        state
            .patient_data
            .treatment_recommendations
            .as_deref()
            .unwrap()
            .starts_with("Error: request failed: rate limited")
    );
}

#[test]
fn flag_implies_non_empty_result() {
    let replies = ["  \n", "{\"model\": \"x\"}", "<think>hmm</think>"];
    for reply in replies {
        let generator = ScriptedGenerator::replying(reply);
        let mut state = WorkflowState::new(PatientRecord::named("Ana"));
        let result = stages::run(
            stages::processor_for(StageName::Intake),
            &generator,
            FailurePolicy::Propagate,
            &mut state,
        );
        assert!(result.is_err(), "reply {reply:?} should fail");
        assert!(!state.patient_data.intake_complete);
        assert!(state.patient_data.risk_assessment.is_none());
    }
}
