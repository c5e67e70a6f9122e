//! Job role generation: produces a role profile to screen against when the
//! caller does not name one.

pub mod handlers;
pub mod prompts;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::llm_client::prompts::{GENERATION_TEMPERATURE, JSON_ONLY_SYSTEM};
use crate::llm_client::{LlmClient, LlmError};
use crate::roles::prompts::{DEFAULT_ROLE_QUERY, ROLE_PROMPT_TEMPLATE};

/// A generated job role profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRole {
    pub role: String,
    pub experience_level: String,
    pub skills: Vec<String>,
    pub responsibilities: Vec<String>,
    pub qualifications: Vec<String>,
}

#[derive(Debug, Error)]
pub enum RoleGenerationError {
    #[error("role generation failed: {0}")]
    Llm(#[from] LlmError),

    #[error("generated role has an empty title")]
    EmptyTitle,
}

#[async_trait]
pub trait RoleGenerator: Send + Sync {
    /// `query` may name a role, describe one vaguely, or be `None` for "pick one".
    async fn generate(&self, query: Option<&str>) -> Result<JobRole, RoleGenerationError>;
}

pub struct LlmRoleGenerator {
    llm: LlmClient,
}

impl LlmRoleGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl RoleGenerator for LlmRoleGenerator {
    async fn generate(&self, query: Option<&str>) -> Result<JobRole, RoleGenerationError> {
        let query = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .unwrap_or(DEFAULT_ROLE_QUERY);
        let prompt = ROLE_PROMPT_TEMPLATE.replace("{query}", query);

        let role: JobRole = self
            .llm
            .call_json(&prompt, JSON_ONLY_SYSTEM, GENERATION_TEMPERATURE)
            .await?;
        if role.role.trim().is_empty() {
            return Err(RoleGenerationError::EmptyTitle);
        }
        Ok(role)
    }
}

/// Picks the role an upload is screened against: the caller's role if given,
/// else a generated one, else `fallback`.
pub async fn resolve_job_role(
    provided: Option<&str>,
    generator: &dyn RoleGenerator,
    fallback: &str,
) -> String {
    if let Some(role) = provided.map(str::trim).filter(|r| !r.is_empty()) {
        return role.to_string();
    }

    match generator.generate(None).await {
        Ok(generated) => {
            info!("No role supplied, screening for generated role '{}'", generated.role);
            generated.role
        }
        Err(e) => {
            warn!("Role generation failed, using default '{fallback}': {e}");
            fallback.to_string()
        }
    }
}
