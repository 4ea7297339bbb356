//! The patient assessment report.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use navigator_core::models::record::PatientRecord;

use crate::docx::generate_docx;
use crate::error::ExportError;
use crate::render::{demote_headings, render_template, table_cell};
use crate::styles::DocumentStyles;

pub const REPORT_TEMPLATE_NAME: &str = "medical_report.md";

pub const REPORT_TEMPLATE: &str = r#"# Medical Assessment Report

Report Generated: {{ generated_at }}

## Patient Information

{% if patient_rows -%}
| Field | Value |
| --- | --- |
{% for row in patient_rows -%}
| {{ row.label }} | {{ row.value }} |
{% endfor %}
{%- else -%}
No patient information available
{%- endif %}

## Primary Complaints

{% if primary_complaints %}{{ primary_complaints }}{% else %}None reported{% endif %}

## Initial Risk Assessment

{% if risk_assessment %}{{ risk_assessment }}{% else %}No risk assessment available{% endif %}

## Clinical Assessment

{% if clinical_rows -%}
| Metric | Value |
| --- | --- |
{% for row in clinical_rows -%}
| {{ row.label }} | {{ row.value }} |
{% endfor %}
{%- endif %}

### Detailed Assessment

{% if clinical_assessment %}{{ clinical_assessment }}{% else %}No detailed assessment available{% endif %}

---

## Treatment Recommendations

{% if treatment_recommendations %}{{ treatment_recommendations }}{% else %}No treatment recommendations available{% endif %}
{% if care_level %}
## Care Level Determination

**Care Level:** {{ care_level }}
{% endif %}
## Disclaimer

{{ disclaimer }}
"#;

pub const DISCLAIMER: &str = "This report was generated by the Healthcare Navigator AI system. \
It is intended for informational purposes only and should be reviewed by a qualified healthcare \
professional. This is not a substitute for professional medical advice, diagnosis, or treatment.";

// ── Context ────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct InfoRow {
    label: &'static str,
    value: String,
}

#[derive(Debug, Serialize)]
struct ReportContext<'a> {
    generated_at: &'a str,
    patient_rows: Vec<InfoRow>,
    primary_complaints: Option<&'a str>,
    risk_assessment: Option<String>,
    clinical_rows: Vec<InfoRow>,
    clinical_assessment: Option<String>,
    treatment_recommendations: Option<String>,
    care_level: Option<&'static str>,
    disclaimer: &'static str,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn rows(fields: &[(&'static str, Option<&str>)]) -> Vec<InfoRow> {
    fields
        .iter()
        .filter_map(|&(label, value)| {
            value.map(|v| InfoRow {
                label,
                value: table_cell(v),
            })
        })
        .collect()
}

/// Generated sections sit under `##` report headings, so their own
/// headings move down two levels.
fn section(value: &Option<String>) -> Option<String> {
    present(value).map(|text| demote_headings(text, 2))
}

impl<'a> ReportContext<'a> {
    fn new(record: &'a PatientRecord, generated_at: &'a str) -> Self {
        let pain = record.pain_level.map(|p| format!("{p}/10"));
        Self {
            generated_at,
            patient_rows: rows(&[
                ("Name", present(&record.name)),
                ("Contact", present(&record.contact)),
                ("Date of Birth", present(&record.dob)),
                ("Emergency Contact", present(&record.emergency_contact)),
                ("Relation", present(&record.emergency_relation)),
                ("Gender", present(&record.gender)),
                ("Location", present(&record.location_str)),
            ]),
            primary_complaints: present(&record.primary_complaints),
            risk_assessment: section(&record.risk_assessment),
            clinical_rows: rows(&[
                ("Pain Level", pain.as_deref()),
                ("Duration", present(&record.duration)),
                ("Frequency", present(&record.symptom_frequency)),
                ("Previous Treatment", present(&record.previous_treatment)),
            ]),
            clinical_assessment: section(&record.clinical_assessment),
            treatment_recommendations: section(&record.treatment_recommendations),
            care_level: record.care_level.map(|level| level.as_str()),
            disclaimer: DISCLAIMER,
        }
    }
}

/// Collapse runs of blank lines left behind by template conditionals.
fn squeeze_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut blank_run = 0;
    for line in text.lines() {
        if line.trim().is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Render the report for `record` as Markdown. `generated_at` is printed
/// verbatim under the title.
pub fn render_report(record: &PatientRecord, generated_at: &str) -> Result<String, ExportError> {
    let context = ReportContext::new(record, generated_at);
    let rendered = render_template(REPORT_TEMPLATE_NAME, REPORT_TEMPLATE, &context)?;
    Ok(squeeze_blank_lines(&rendered))
}

// ── Formats ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Markdown,
    Docx,
}

impl ReportFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            ReportFormat::Markdown => "text/markdown; charset=utf-8",
            ReportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Markdown => "md",
            ReportFormat::Docx => "docx",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Markdown => f.write_str("markdown"),
            ReportFormat::Docx => f.write_str("docx"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "docx" => Ok(ReportFormat::Docx),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

/// A rendered report ready to hand to a client.
#[derive(Debug, Clone)]
pub struct ReportFile {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

pub fn report_filename(record: &PatientRecord, format: ReportFormat) -> String {
    let name = record.display_name().trim().replace(' ', "_");
    format!("medical_report_{name}.{}", format.extension())
}

/// Render the report for `record` in `format`.
pub fn export_report(
    record: &PatientRecord,
    generated_at: &str,
    format: ReportFormat,
    styles: &DocumentStyles,
) -> Result<ReportFile, ExportError> {
    let markdown = render_report(record, generated_at)?;
    let bytes = match format {
        ReportFormat::Markdown => markdown.into_bytes(),
        ReportFormat::Docx => generate_docx(&markdown, styles)?,
    };

    info!(
        format = %format,
        size_bytes = bytes.len(),
        "patient report exported"
    );

    Ok(ReportFile {
        filename: report_filename(record, format),
        content_type: format.content_type(),
        bytes,
    })
}
