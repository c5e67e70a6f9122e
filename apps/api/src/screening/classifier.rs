//! Application classifiers: the language-understanding collaborator behind the
//! experience and skill-match steps.
//!
//! The workflow only sees the `ApplicationClassifier` trait. `LlmClassifier` is the
//! production backend; tests plug in canned implementations.

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::llm_client::prompts::{CLASSIFICATION_TEMPERATURE, JSON_ONLY_SYSTEM};
use crate::llm_client::{LlmClient, LlmError};
use crate::screening::models::{ExperienceAssessment, SkillAssessment};
use crate::screening::prompts::{render, EXPERIENCE_PROMPT_TEMPLATE, SKILL_MATCH_PROMPT_TEMPLATE};

/// A classification step could not produce a value inside its fixed schema.
#[derive(Debug, Error)]
pub enum ClassificationError {
    #[error("language service failed: {0}")]
    Service(LlmError),

    #[error("output outside the {schema} schema: {detail}")]
    OutOfSchema { schema: &'static str, detail: String },
}

impl ClassificationError {
    fn from_llm(schema: &'static str, error: LlmError) -> Self {
        match error {
            LlmError::Parse(e) => ClassificationError::OutOfSchema {
                schema,
                detail: e.to_string(),
            },
            LlmError::EmptyContent => ClassificationError::OutOfSchema {
                schema,
                detail: "empty response".to_string(),
            },
            other => ClassificationError::Service(other),
        }
    }
}

/// Classifies an application against a role. Implementations must return a value from
/// the closed enum or fail; they never fall back to a default.
#[async_trait]
pub trait ApplicationClassifier: Send + Sync {
    async fn classify_experience(
        &self,
        job_role: &str,
        application_text: &str,
    ) -> Result<ExperienceAssessment, ClassificationError>;

    async fn classify_skill_match(
        &self,
        job_role: &str,
        application_text: &str,
    ) -> Result<SkillAssessment, ClassificationError>;
}

/// Classifier backed by the shared `LlmClient`.
pub struct LlmClassifier {
    llm: LlmClient,
}

impl LlmClassifier {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ApplicationClassifier for LlmClassifier {
    async fn classify_experience(
        &self,
        job_role: &str,
        application_text: &str,
    ) -> Result<ExperienceAssessment, ClassificationError> {
        let prompt = render(EXPERIENCE_PROMPT_TEMPLATE, job_role, application_text);
        debug!("Classifying experience for role '{job_role}'");
        self.llm
            .call_json::<ExperienceAssessment>(&prompt, JSON_ONLY_SYSTEM, CLASSIFICATION_TEMPERATURE)
            .await
            .map_err(|e| ClassificationError::from_llm("ExperienceAssessment", e))
    }

    async fn classify_skill_match(
        &self,
        job_role: &str,
        application_text: &str,
    ) -> Result<SkillAssessment, ClassificationError> {
        let prompt = render(SKILL_MATCH_PROMPT_TEMPLATE, job_role, application_text);
        debug!("Classifying skill match for role '{job_role}'");
        self.llm
            .call_json::<SkillAssessment>(&prompt, JSON_ONLY_SYSTEM, CLASSIFICATION_TEMPERATURE)
            .await
            .map_err(|e| ClassificationError::from_llm("SkillAssessment", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::parse_structured;

    fn classify_text<T: serde::de::DeserializeOwned>(
        schema: &'static str,
        text: &str,
    ) -> Result<T, ClassificationError> {
        parse_structured::<T>(text).map_err(|e| ClassificationError::from_llm(schema, e))
    }

    #[test]
    fn test_well_formed_experience_output_is_accepted() {
        let parsed: ExperienceAssessment = classify_text(
            "ExperienceAssessment",
            r#"{"level": "Senior-level", "reasoning": "10 years of Python"}"#,
        )
        .unwrap();
        assert_eq!(parsed.level, crate::screening::models::ExperienceLevel::Senior);
    }

    #[test]
    fn test_fenced_skill_output_is_accepted() {
        let parsed: SkillAssessment = classify_text(
            "SkillAssessment",
            "```json\n{\"status\": \"Mismatch\", \"missing_skills\": [\"SEO\"]}\n```",
        )
        .unwrap();
        assert_eq!(parsed.missing_skills, vec!["SEO".to_string()]);
    }

    #[test]
    fn test_out_of_enum_value_is_out_of_schema() {
        let result: Result<SkillAssessment, _> =
            classify_text("SkillAssessment", r#"{"status": "Partial Match"}"#);
        match result {
            Err(ClassificationError::OutOfSchema { schema, .. }) => {
                assert_eq!(schema, "SkillAssessment")
            }
            other => panic!("expected OutOfSchema, got {other:?}"),
        }
    }

    #[test]
    fn test_free_text_answer_is_out_of_schema() {
        let result: Result<ExperienceAssessment, _> =
            classify_text("ExperienceAssessment", "The candidate is Senior-level.");
        assert!(matches!(
            result,
            Err(ClassificationError::OutOfSchema { .. })
        ));
    }

    #[test]
    fn test_api_failure_is_service_error() {
        let error = ClassificationError::from_llm(
            "SkillAssessment",
            LlmError::Api {
                status: 401,
                message: "invalid x-api-key".to_string(),
            },
        );
        assert!(matches!(error, ClassificationError::Service(_)));
        assert!(error.to_string().contains("invalid x-api-key"));
    }
}
