use navigator_core::models::care_level::CareLevel;
use navigator_core::models::record::PatientRecord;
use navigator_export::docx::build_docx;
use navigator_export::render::{demote_headings, render_template, table_cell};
use navigator_export::report::{DISCLAIMER, render_report, report_filename};
use navigator_export::styles::DocumentStyles;
use navigator_export::{ExportError, ReportFormat, export_report};

fn complete_record() -> PatientRecord {
    let mut record = PatientRecord::named("Jane Doe");
    record.contact = Some("555-0100".into());
    record.dob = Some("1985-04-12".into());
    record.gender = Some("Female".into());
    record.primary_complaints = Some("Recurring headache with nausea".into());
    record.risk_assessment = Some("## Initial Risk Assessment\n\n**Risk Level:** Medium".into());
    record.pain_level = Some(6);
    record.duration = Some("2 weeks".into());
    record.symptom_frequency = Some("Daily".into());
    record.clinical_assessment = Some("# Clinical Assessment\n* Tension-type headache".into());
    record.treatment_recommendations =
        Some("# Treatment Recommendations\n* Urgent: neurology referral".into());
    record.care_level = Some(CareLevel::Urgent);
    record.intake_complete = true;
    record.assessment_complete = true;
    record.care_plan_complete = true;
    record
}

#[test]
fn report_has_every_section() {
    let report = render_report(&complete_record(), "2024-03-09 14:05:00").unwrap();

    assert!(report.starts_with("# Medical Assessment Report\n"));
    assert!(report.contains("Report Generated: 2024-03-09 14:05:00"));
    assert!(report.contains("| Name | Jane Doe |"));
    assert!(report.contains("| Date of Birth | 1985-04-12 |"));
    assert!(report.contains("Recurring headache with nausea"));
    assert!(report.contains("#### Initial Risk Assessment"));
    assert!(report.contains("| Pain Level | 6/10 |"));
    assert!(report.contains("| Frequency | Daily |"));
    assert!(report.contains("### Clinical Assessment\n* Tension-type headache"));
    assert!(report.contains("\n---\n"));
    assert!(report.contains("**Care Level:** Urgent"));
    assert!(report.contains(DISCLAIMER));
    assert!(!report.contains("\n\n\n"));
}

#[test]
fn missing_sections_use_placeholders() {
    let report = render_report(&PatientRecord::named("Sam"), "now").unwrap();

    assert!(report.contains("None reported"));
    assert!(report.contains("No risk assessment available"));
    assert!(report.contains("No detailed assessment available"));
    assert!(report.contains("No treatment recommendations available"));
    assert!(!report.contains("Care Level Determination"));
    assert!(!report.contains("| Metric | Value |"));
}

#[test]
fn empty_record_has_no_patient_table() {
    let report = render_report(&PatientRecord::default(), "now").unwrap();
    assert!(report.contains("No patient information available"));
    assert!(!report.contains("| Field | Value |"));
}

#[test]
fn headings_demote_and_cap() {
    assert_eq!(demote_headings("# A\ntext\n##### B", 2), "### A\ntext\n###### B");
    assert_eq!(demote_headings("#hashtag", 2), "#hashtag");
}

#[test]
fn table_cells_escape_pipes() {
    assert_eq!(table_cell("a|b\nc"), "a\\|b c");
}

#[test]
fn template_errors_surface() {
    let err = render_template("bad", "{% if %}", &serde_json::json!({})).unwrap_err();
    assert!(matches!(err, ExportError::TemplateParse(_)));
}

#[test]
fn report_formats() {
    assert_eq!("markdown".parse::<ReportFormat>().unwrap(), ReportFormat::Markdown);
    assert_eq!("MD".parse::<ReportFormat>().unwrap(), ReportFormat::Markdown);
    assert_eq!("docx".parse::<ReportFormat>().unwrap(), ReportFormat::Docx);
    assert!(matches!(
        "pdf".parse::<ReportFormat>(),
        Err(ExportError::UnknownFormat(_))
    ));
}

#[test]
fn filename_uses_patient_name() {
    assert_eq!(
        report_filename(&PatientRecord::named("Jane Doe"), ReportFormat::Docx),
        "medical_report_Jane_Doe.docx"
    );
    assert_eq!(
        report_filename(&PatientRecord::default(), ReportFormat::Markdown),
        "medical_report_Patient.md"
    );
}

#[test]
fn markdown_export_returns_text() {
    let file = export_report(
        &complete_record(),
        "2024-03-09 14:05:00",
        ReportFormat::Markdown,
        &DocumentStyles::default(),
    )
    .unwrap();

    assert_eq!(file.content_type, "text/markdown; charset=utf-8");
    let text = String::from_utf8(file.bytes).unwrap();
    assert!(text.contains("Jane Doe"));
}

#[test]
fn docx_export_is_a_zip_package() {
    let file = export_report(
        &complete_record(),
        "2024-03-09 14:05:00",
        ReportFormat::Docx,
        &DocumentStyles::default(),
    )
    .unwrap();

    assert_eq!(file.filename, "medical_report_Jane_Doe.docx");
    assert!(file.bytes.len() > 100);
    assert_eq!(&file.bytes[..2], b"PK");
}

#[test]
fn docx_highlights_care_level() {
    let report = render_report(&complete_record(), "2024-03-09 14:05:00").unwrap();
    let document = build_docx(&report, &DocumentStyles::default()).build().document;
    let xml = String::from_utf8(document).unwrap();

    assert!(xml.contains("Care Level: "));
    assert!(xml.contains(CareLevel::Urgent.color_hex().trim_start_matches('#')));
}
