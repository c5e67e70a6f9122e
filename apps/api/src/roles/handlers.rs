use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::roles::JobRole;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct GenerateRoleRequest {
    #[serde(default)]
    pub query: Option<String>,
}

/// POST /generate-job-role
///
/// Body is optional. Without a query the generator picks a high-demand role itself.
/// A JSON body that is present but malformed is rejected.
pub async fn handle_generate_job_role(
    State(state): State<AppState>,
    request: Result<Json<GenerateRoleRequest>, JsonRejection>,
) -> Result<Json<JobRole>, AppError> {
    let request = match request {
        Ok(Json(request)) => request,
        Err(JsonRejection::MissingJsonContentType(_)) => GenerateRoleRequest::default(),
        Err(rejection) => return Err(AppError::Validation(rejection.body_text())),
    };

    let role = state
        .role_generator
        .generate(request.query.as_deref())
        .await?;
    Ok(Json(role))
}
