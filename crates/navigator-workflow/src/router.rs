use navigator_core::models::record::PatientRecord;
use navigator_core::models::stage::StageName;

/// Where a record sitting at `stage` should go once that stage's processor
/// has run. Forward only; care planning is terminal.
pub fn route(stage: StageName, record: &PatientRecord) -> StageName {
    match stage {
        StageName::Intake if record.intake_complete => StageName::Assessment,
        StageName::Assessment if record.assessment_complete => StageName::CarePlanning,
        StageName::Intake | StageName::Assessment | StageName::CarePlanning => stage,
    }
}
