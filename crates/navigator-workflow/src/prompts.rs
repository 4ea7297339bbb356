//! Fixed instructions and output templates for each stage.
//!
//! The patient block is the record serialized as pretty JSON with keys in
//! sorted order. Fields a stage expects but the record lacks are rendered
//! as `"N/A"` so the model never sees a silently missing section.

use serde_json::Value;

use navigator_core::error::CoreError;
use navigator_core::models::record::PatientRecord;
use navigator_core::models::stage::StageName;

/// Placeholder for an expected field the record does not carry.
pub const MISSING: &str = "N/A";

// ── System instructions ────────────────────────────────────────

pub const INTAKE_SYSTEM_PROMPT: &str = "\
You are a medical intake coordinator with expertise in initial patient risk assessment.
Provide a clear, structured assessment focusing ONLY on:
1. Initial risk level (Low/Medium/High)
2. Immediate concerns identified
3. Recommended next steps
4. Additional information needed

Use bullet points and clear formatting. Do not include any 'thinking' process or metadata.";

pub const ASSESSMENT_SYSTEM_PROMPT: &str = "\
You are a clinical assessment specialist.
Provide a structured assessment following the format below EXACTLY.
Use clear headers, numbered points, and bullet lists as specified.
Do NOT include any metadata, thinking process, or tags in your response.";

pub const CARE_PLANNING_SYSTEM_PROMPT: &str = "\
You are a care planning specialist.
Provide detailed treatment recommendations following the format below EXACTLY.
Use clear headers, numbered points, and bullet lists as specified.
Do NOT include any metadata, thinking process, or tags in your response.";

// ── Output templates ───────────────────────────────────────────

const INTAKE_FORMAT: &str = "\
## Initial Risk Assessment

**Risk Level:** [Low/Medium/High]

**Immediate Concerns:**
* [List concerns with bullet points]

**Recommended Next Steps:**
* [List steps with bullet points]

**Additional Information Needed:**
* [List needed information with bullet points]";

const ASSESSMENT_FORMAT: &str = "\
# Clinical Assessment

## 1. Detailed Symptom Analysis:

* [Symptom 1 with details]
* [Symptom 2 with details]
* [Additional symptoms as needed]

## 2. Risk Level Determination: [Low/Medium/High] Risk

* [Risk factor 1]
* [Risk factor 2]
* [Additional risk factors as needed]

## 3. Recommended Additional Screenings or Tests:

1. [Test 1]
2. [Test 2]
3. [Additional tests as needed]

## 4. Potential Diagnoses to Consider:

1. [Diagnosis 1]
2. [Diagnosis 2]
3. [Additional diagnoses as needed]

## 5. Areas Requiring Immediate Medical Attention:

* [Area 1]
* [Area 2]
* [Additional areas as needed]";

const CARE_PLANNING_FORMAT: &str = "\
# Treatment Recommendations

## 1. Detailed Treatment Plan:

* [Treatment component 1]
* [Treatment component 2]
* [Additional components as needed]

## 2. Care Level Determination:

* [Routine/Urgent/Emergency]: [Brief justification]

## 3. Medication Recommendations:

* [Medication 1 with dosage if applicable]
* [Medication 2 with dosage if applicable]
* [Additional medications as needed]

## 4. Lifestyle Modifications Needed:

* [Modification 1]
* [Modification 2]
* [Additional modifications as needed]

## 5. Follow-up Schedule:

* [Timeframe and type of follow-up]

## 6. Compliance Requirements:

* [Requirement 1]
* [Requirement 2]
* [Additional requirements as needed]

## 7. Warning Signs to Watch For:

* [Warning sign 1]
* [Warning sign 2]
* [Additional warning signs as needed]";

// ── Expected fields ────────────────────────────────────────────

const INTAKE_FIELDS: &[&str] = &[
    "name",
    "dob",
    "gender",
    "contact",
    "primary_complaints",
    "existing_conditions",
    "current_medications",
];

const ASSESSMENT_FIELDS: &[&str] = &[
    "name",
    "dob",
    "gender",
    "primary_complaints",
    "existing_conditions",
    "current_medications",
    "pain_level",
    "duration",
    "symptom_frequency",
    "symptoms_worsen",
    "previous_treatment",
    "medications_tried",
    "risk_assessment",
];

const CARE_PLANNING_FIELDS: &[&str] = &[
    "name",
    "dob",
    "gender",
    "primary_complaints",
    "existing_conditions",
    "current_medications",
    "pain_level",
    "duration",
    "symptom_frequency",
    "risk_assessment",
    "clinical_assessment",
];

/// Record keys the prompt for `stage` always shows.
pub fn expected_fields(stage: StageName) -> &'static [&'static str] {
    match stage {
        StageName::Intake => INTAKE_FIELDS,
        StageName::Assessment => ASSESSMENT_FIELDS,
        StageName::CarePlanning => CARE_PLANNING_FIELDS,
    }
}

pub fn system_prompt(stage: StageName) -> &'static str {
    match stage {
        StageName::Intake => INTAKE_SYSTEM_PROMPT,
        StageName::Assessment => ASSESSMENT_SYSTEM_PROMPT,
        StageName::CarePlanning => CARE_PLANNING_SYSTEM_PROMPT,
    }
}

/// Pretty-printed JSON view of the record as `stage` should see it.
pub fn patient_block(record: &PatientRecord, stage: StageName) -> Result<String, CoreError> {
    let mut map = record.to_json_map()?;
    for key in expected_fields(stage) {
        let absent = match map.get(*key) {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.trim().is_empty(),
            Some(_) => false,
        };
        if absent {
            map.insert((*key).to_string(), Value::String(MISSING.to_string()));
        }
    }
    Ok(serde_json::to_string_pretty(&Value::Object(map))?)
}

/// Full user prompt for `stage`: a lead-in, the patient block and the
/// exact output format the model must follow.
pub fn build_prompt(record: &PatientRecord, stage: StageName) -> Result<String, CoreError> {
    let block = patient_block(record, stage)?;
    let prompt = match stage {
        StageName::Intake => format!(
            "Patient Information:\n{block}\n\n\
             Please provide your assessment in this EXACT format:\n\n{INTAKE_FORMAT}"
        ),
        StageName::Assessment => format!(
            "Review this patient's information and provide a detailed clinical assessment:\n\n\
             Patient Information:\n{block}\n\n\
             Format your response EXACTLY as follows:\n\n{ASSESSMENT_FORMAT}"
        ),
        StageName::CarePlanning => format!(
            "Based on the patient's information and assessments, provide comprehensive treatment recommendations:\n\n\
             Patient Information and Assessments:\n{block}\n\n\
             Format your response EXACTLY as follows:\n\n{CARE_PLANNING_FORMAT}"
        ),
    };
    Ok(prompt)
}
