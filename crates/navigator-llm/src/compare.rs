//! Side-by-side model comparison.
//!
//! Runs one prompt against every known model. A model that fails does not
//! fail the comparison; its slot carries a canned assessment instead and is
//! flagged as a fallback.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::GenerationError;
use crate::groq::{GroqClient, KnownModel};

/// Generation against a caller-chosen model.
pub trait ModelGenerator: Send + Sync {
    fn generate_with_model(
        &self,
        model_id: &str,
        prompt: &str,
        system_prompt: Option<&str>,
    ) -> Result<String, GenerationError>;
}

impl ModelGenerator for GroqClient {
    fn generate_with_model(
        &self,
        model_id: &str,
        prompt: &str,
        system_prompt: Option<&str>,
    ) -> Result<String, GenerationError> {
        GroqClient::generate_with_model(self, model_id, prompt, system_prompt)
    }
}

/// Default system prompt for comparisons.
pub const COMPARISON_SYSTEM_PROMPT: &str = "You are a medical expert. Provide a detailed clinical \
assessment of these symptoms with the following sections: 1) Detailed Symptom Analysis, 2) Risk \
Level Determination, 3) Recommended Additional Screenings or Tests, 4) Potential Diagnoses, and 5) \
Areas Requiring Immediate Attention. Use markdown formatting with headers, bullet points, and \
asterisks.";

/// One model's answer in a comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelComparison {
    pub model_key: String,
    pub model_id: String,
    pub content: String,
    pub elapsed_secs: f64,
    /// True when `content` is the canned fallback, not the model's answer.
    pub fallback: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn compare_models(
    generator: &dyn ModelGenerator,
    models: &[KnownModel],
    prompt: &str,
    system_prompt: Option<&str>,
) -> Vec<ModelComparison> {
    models
        .iter()
        .map(|model| {
            let started = Instant::now();
            let outcome = generator.generate_with_model(model.id, prompt, system_prompt);
            let elapsed_secs = started.elapsed().as_secs_f64();

            match outcome {
                Ok(content) => {
                    info!(model = model.id, elapsed_secs, "comparison answer received");
                    ModelComparison {
                        model_key: model.key.to_string(),
                        model_id: model.id.to_string(),
                        content,
                        elapsed_secs,
                        fallback: false,
                        error: None,
                    }
                }
                Err(e) => {
                    warn!(model = model.id, error = %e, "comparison model failed, using fallback");
                    ModelComparison {
                        model_key: model.key.to_string(),
                        model_id: model.id.to_string(),
                        content: fallback_assessment(prompt).to_string(),
                        elapsed_secs,
                        fallback: true,
                        error: Some(e.to_string()),
                    }
                }
            }
        })
        .collect()
}

/// Canned assessment used when a model cannot answer.
pub fn fallback_assessment(prompt: &str) -> &'static str {
    let lowered = prompt.to_lowercase();
    if lowered.contains("headache") && lowered.contains("nausea") && lowered.contains("light") {
        HEADACHE_FALLBACK
    } else {
        GENERIC_FALLBACK
    }
}

const HEADACHE_FALLBACK: &str = "\
# Clinical Assessment

## 1. Detailed Symptom Analysis:

* Severe headache persisting for 3 days
* Sensitivity to light (photophobia)
* Nausea
* No reported fever or neck stiffness

## 2. Risk Level Determination: Medium Risk

* Constellation of symptoms suggests possible migraine
* Duration of 3 days indicates need for evaluation
* Absence of fever or neck stiffness reduces concern for meningitis

## 3. Recommended Additional Screenings or Tests:

1. Neurological examination
2. Visual acuity assessment
3. Blood pressure measurement
4. Consider CT or MRI if symptoms persist or worsen

## 4. Potential Diagnoses to Consider:

1. Migraine with aura
2. Tension headache
3. Viral illness
4. Medication overuse headache
5. Intracranial pathology (less likely)

## 5. Areas Requiring Immediate Medical Attention:

* Monitor for development of fever or neck stiffness
* Watch for changes in mental status
* Be alert for increasing pain intensity or new neurological symptoms
* Ensure adequate hydration";

const GENERIC_FALLBACK: &str = "\
# Clinical Assessment

## 1. Detailed Symptom Analysis:

* Primary symptoms noted
* Duration and character of symptoms
* Aggravating and alleviating factors
* Associated symptoms

## 2. Risk Level Determination: Medium Risk

* Based on symptom presentation
* Patient-specific risk factors considered
* Impact on daily functioning
* Progression pattern

## 3. Recommended Additional Screenings or Tests:

1. Appropriate laboratory testing
2. Diagnostic imaging if indicated
3. Specialized assessments based on presentation
4. Follow-up monitoring plan

## 4. Potential Diagnoses to Consider:

1. Primary diagnosis based on symptom pattern
2. Secondary differential diagnoses
3. Complicating factors to evaluate
4. Conditions to exclude

## 5. Areas Requiring Immediate Medical Attention:

* Monitoring parameters
* Warning signs requiring urgent care
* Self-care limitations
* Follow-up timeframe";
