//! Axum route handlers for the Screening API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::roles::resolve_job_role;
use crate::screening::models::{ExperienceLevel, FinalDecision, SkillMatch};
use crate::screening::upload::StagedUpload;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProcessApplicationResponse {
    pub experience_level: ExperienceLevel,
    pub skill_match: SkillMatch,
    pub final_decision: FinalDecision,
    pub screened_for_role: String,
}

/// POST /process-application
///
/// Multipart form: `file` (required, PDF/TXT/MD document) and `job_role` (optional).
/// The document is staged to a temp file for the duration of the request only.
pub async fn handle_process_application(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ProcessApplicationResponse>, AppError> {
    let mut upload: Option<StagedUpload> = None;
    let mut job_role: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().map(str::to_owned);
                let contents = field.bytes().await?;
                upload = Some(StagedUpload::stage(file_name.as_deref(), contents).await?);
            }
            Some("job_role") => job_role = Some(field.text().await?),
            _ => {}
        }
    }

    let upload =
        upload.ok_or_else(|| AppError::Validation("multipart field 'file' is required".to_string()))?;

    let role = resolve_job_role(
        job_role.as_deref(),
        state.role_generator.as_ref(),
        &state.config.default_job_role,
    )
    .await;
    info!("Screening uploaded application for role '{role}'");

    let result = state
        .workflow
        .process_application("", Some(upload.path().to_path_buf()), &role)
        .await;
    upload.cleanup();
    let outcome = result?;

    Ok(Json(ProcessApplicationResponse {
        experience_level: outcome.experience_level,
        skill_match: outcome.skill_match,
        final_decision: outcome.final_decision,
        screened_for_role: role,
    }))
}
