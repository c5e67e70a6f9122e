use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::roles::RoleGenerationError;
use crate::screening::classifier::ClassificationError;
use crate::screening::upload::UploadError;
use crate::screening::workflow::WorkflowError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every error renders as `{"error": "<message>"}`; decision fields never appear.
/// Upstream and internal failures are logged in full and reported with a fixed message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Malformed multipart request: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Screening failed: {0}")]
    Workflow(#[from] WorkflowError),

    #[error("Upload failed: {0}")]
    Upload(#[from] UploadError),

    #[error("Role generation failed: {0}")]
    RoleGeneration(#[from] RoleGenerationError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            // 413 when the body limit trips, 400 for anything else malformed
            AppError::Multipart(e) => e.status(),
            AppError::Workflow(WorkflowError::Classification(_)) => StatusCode::BAD_GATEWAY,
            AppError::Workflow(_) | AppError::Upload(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::RoleGeneration(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Message returned to the client.
    fn public_message(&self) -> String {
        match self {
            AppError::Validation(_) => self.to_string(),
            AppError::Multipart(e) => e.body_text(),
            AppError::Workflow(WorkflowError::Classification(ClassificationError::OutOfSchema {
                ..
            })) => self.to_string(),
            AppError::Workflow(WorkflowError::Classification(ClassificationError::Service(_)))
            | AppError::RoleGeneration(_) => "Language service unavailable".to_string(),
            AppError::Workflow(_) => "Screening could not be completed".to_string(),
            AppError::Upload(_) => "Failed to store the uploaded file".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.public_message();

        if status.is_server_error() {
            tracing::error!("{self}");
        } else {
            tracing::warn!("{message}");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use crate::llm_client::LlmError;
    use crate::screening::models::FieldAlreadySet;

    async fn error_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        body["error"].as_str().unwrap().to_string()
    }

    #[test]
    fn test_classification_failure_is_bad_gateway() {
        let error = AppError::Workflow(WorkflowError::Classification(
            ClassificationError::OutOfSchema {
                schema: "SkillAssessment",
                detail: "unknown variant".to_string(),
            },
        ));
        assert_eq!(error.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_invariant_breach_is_internal_error() {
        let error = AppError::Workflow(WorkflowError::StateConflict(FieldAlreadySet(
            "final_decision",
        )));
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_is_bad_request() {
        let response = AppError::Validation("file is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upstream_failure_body_is_not_forwarded() {
        let error = AppError::Workflow(WorkflowError::Classification(
            ClassificationError::Service(LlmError::Api {
                status: 503,
                message: "<html>proxy 10.0.3.17 overloaded, key sk-ant-xyz</html>".to_string(),
            }),
        ));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let message = error_text(response).await;
        assert_eq!(message, "Language service unavailable");
        assert!(!message.contains("10.0.3.17"));
        assert!(!message.contains("sk-ant"));
    }

    #[tokio::test]
    async fn test_role_generation_failure_is_generic() {
        let error = AppError::RoleGeneration(RoleGenerationError::Llm(LlmError::Api {
            status: 500,
            message: "stack trace from upstream".to_string(),
        }));
        let message = error_text(error.into_response()).await;
        assert!(!message.contains("stack trace"));
    }

    #[tokio::test]
    async fn test_out_of_schema_message_stays_descriptive() {
        let error = AppError::Workflow(WorkflowError::Classification(
            ClassificationError::OutOfSchema {
                schema: "SkillAssessment",
                detail: "unknown variant `Partial`".to_string(),
            },
        ));
        let message = error_text(error.into_response()).await;
        assert!(message.contains("SkillAssessment"));
    }
}
