use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use jiff::Zoned;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use navigator_analytics::PatientAnalytics;
use navigator_core::models::forms::{AssessmentForm, IntakeForm};
use navigator_core::models::record::{PatientRecord, TIMESTAMP_FORMAT};
use navigator_core::models::stage::StageName;
use navigator_export::{ReportFormat, export_report};

use crate::error::ApiError;
use crate::session::{Session, SessionView};
use crate::state::AppState;

/// Submit the intake form: build the record and run the intake stage.
pub async fn create_session(
    State(state): State<AppState>,
    Json(form): Json<IntakeForm>,
) -> Result<(StatusCode, Json<SessionView>), ApiError> {
    form.validate()?;

    let record = PatientRecord::from_intake(&form, Zoned::now().datetime());
    let workflow = state.step(state.workflow.start(record)).await?;

    let session = Session::new(workflow);
    info!(session_id = %session.id, stage = %session.workflow.stage, "session created");
    state.insert(session.clone()).await;

    Ok((StatusCode::CREATED, Json(session.into())))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, ApiError> {
    Ok(Json(state.session(id).await?.into()))
}

/// Merge the assessment form and run the clinical assessment stage.
pub async fn submit_assessment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(form): Json<AssessmentForm>,
) -> Result<Json<SessionView>, ApiError> {
    form.validate()?;
    let session = state.session(id).await?;
    let record = &session.workflow.patient_data;

    if !record.intake_complete {
        return Err(ApiError::BadRequest(
            "intake must be completed before the assessment".to_string(),
        ));
    }
    if record.assessment_complete {
        return Ok(Json(session.into()));
    }

    let mut workflow = session.workflow.clone();
    workflow
        .patient_data
        .apply_assessment(&form, Zoned::now().datetime());
    workflow.stage = StageName::Assessment;

    let workflow = state.step(workflow).await?;
    let session = state.commit(id, workflow).await?;
    Ok(Json(session.into()))
}

/// Run the care-planning stage.
pub async fn create_care_plan(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, ApiError> {
    let session = state.session(id).await?;
    let record = &session.workflow.patient_data;

    if !record.assessment_complete {
        return Err(ApiError::BadRequest(
            "assessment must be completed before care planning".to_string(),
        ));
    }
    if record.care_plan_complete {
        return Ok(Json(session.into()));
    }

    let mut workflow = session.workflow.clone();
    workflow.stage = StageName::CarePlanning;

    let workflow = state.step(workflow).await?;
    let session = state.commit(id, workflow).await?;
    Ok(Json(session.into()))
}

pub async fn get_analytics(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PatientAnalytics>, ApiError> {
    let session = state.session(id).await?;
    let today = Zoned::now().date();
    Ok(Json(PatientAnalytics::from_record(&session.workflow.patient_data, today)))
}

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    pub format: Option<String>,
}

/// Download the patient report as Markdown (default) or DOCX.
pub async fn get_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ReportQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let format = match query.format.as_deref() {
        Some(value) => value.parse::<ReportFormat>()?,
        None => ReportFormat::default(),
    };
    let session = state.session(id).await?;
    let generated_at = Zoned::now().strftime(TIMESTAMP_FORMAT).to_string();

    let file = export_report(
        &session.workflow.patient_data,
        &generated_at,
        format,
        &state.styles,
    )?;

    Ok((
        [
            (header::CONTENT_TYPE, file.content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file.filename),
            ),
        ],
        file.bytes,
    ))
}

/// Start over: drop the session.
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state
        .remove(id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("session not found: {id}")))?;
    info!(session_id = %id, "session removed");
    Ok(StatusCode::NO_CONTENT)
}
