//! Keyword extraction from the primary complaints.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub const SYMPTOM_KEYWORDS: &[&str] = &[
    "pain",
    "ache",
    "sore",
    "discomfort",
    "fatigue",
    "tired",
    "headache",
    "nausea",
    "dizzy",
    "cough",
    "fever",
    "swelling",
    "rash",
    "itch",
    "burning",
    "cramp",
    "stiff",
    "weak",
    "numbness",
    "tingling",
    "pressure",
    "difficulty",
    "stress",
    "vomit",
    "diarrhea",
    "constipation",
    "bleeding",
    "breath",
    "sleep",
    "appetite",
    "thirst",
    "vision",
    "hearing",
];

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("WORD regex should compile"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomCount {
    pub keyword: String,
    pub count: u32,
}

/// Whole-word occurrences of each known keyword, most frequent first and
/// alphabetical among ties. Keywords that do not occur are left out.
pub fn count_symptoms(complaints: &str) -> Vec<SymptomCount> {
    let lowered = complaints.to_lowercase();
    let mut counts: BTreeMap<&str, u32> = BTreeMap::new();
    for word in WORD.find_iter(&lowered) {
        if let Some(keyword) = SYMPTOM_KEYWORDS.iter().find(|k| **k == word.as_str()) {
            *counts.entry(*keyword).or_default() += 1;
        }
    }

    let mut out: Vec<SymptomCount> = counts
        .into_iter()
        .map(|(keyword, count)| SymptomCount {
            keyword: keyword.to_string(),
            count,
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.keyword.cmp(&b.keyword)));
    out
}

// ── Categories ─────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SymptomCategory {
    #[serde(rename = "Pain-related")]
    PainRelated,
    Respiratory,
    Neurological,
    Gastrointestinal,
    #[serde(rename = "Skin-related")]
    SkinRelated,
    General,
}

impl SymptomCategory {
    pub const ALL: [SymptomCategory; 6] = [
        SymptomCategory::PainRelated,
        SymptomCategory::Respiratory,
        SymptomCategory::Neurological,
        SymptomCategory::Gastrointestinal,
        SymptomCategory::SkinRelated,
        SymptomCategory::General,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SymptomCategory::PainRelated => "Pain-related",
            SymptomCategory::Respiratory => "Respiratory",
            SymptomCategory::Neurological => "Neurological",
            SymptomCategory::Gastrointestinal => "Gastrointestinal",
            SymptomCategory::SkinRelated => "Skin-related",
            SymptomCategory::General => "General",
        }
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            SymptomCategory::PainRelated => &["pain", "ache", "sore", "burning", "cramp", "stiff"],
            SymptomCategory::Respiratory => &["cough", "difficulty", "pressure"],
            SymptomCategory::Neurological => &["headache", "dizzy", "numbness", "tingling"],
            SymptomCategory::Gastrointestinal => &["nausea", "discomfort"],
            SymptomCategory::SkinRelated => &["rash", "itch", "swelling"],
            SymptomCategory::General => &["fatigue", "tired", "weak", "fever", "stress"],
        }
    }

    pub fn color_hex(&self) -> &'static str {
        match self {
            SymptomCategory::PainRelated => "#E63946",
            SymptomCategory::Respiratory => "#1D3557",
            SymptomCategory::Neurological => "#457B9D",
            SymptomCategory::Gastrointestinal => "#A8DADC",
            SymptomCategory::SkinRelated => "#F1FAEE",
            SymptomCategory::General => "#2A9D8F",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryCount {
    pub category: SymptomCategory,
    pub count: u32,
    /// Chart colour, e.g. `#E63946`.
    pub color: String,
}

/// Sum keyword counts per category, in category order, skipping empty ones.
pub fn categorize(counts: &[SymptomCount]) -> Vec<CategoryCount> {
    SymptomCategory::ALL
        .into_iter()
        .filter_map(|category| {
            let count: u32 = counts
                .iter()
                .filter(|c| category.keywords().contains(&c.keyword.as_str()))
                .map(|c| c.count)
                .sum();
            (count > 0).then(|| CategoryCount {
                category,
                count,
                color: category.color_hex().to_string(),
            })
        })
        .collect()
}
