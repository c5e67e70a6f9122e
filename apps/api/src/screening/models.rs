//! Screening data model: the classification enums, the structured results the
//! classifiers return, and the `ApplicationState` that flows through the workflow.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Assessed experience level of a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "Entry-level", alias = "Entry")]
    Entry,
    #[serde(rename = "Mid-level", alias = "Mid")]
    Mid,
    #[serde(rename = "Senior-level", alias = "Senior")]
    Senior,
}

impl ExperienceLevel {
    #[cfg(test)]
    pub const ALL: [ExperienceLevel; 3] = [Self::Entry, Self::Mid, Self::Senior];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Entry => "Entry-level",
            Self::Mid => "Mid-level",
            Self::Senior => "Senior-level",
        }
    }
}

/// Whether the candidate's skills match the role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillMatch {
    Match,
    Mismatch,
}

impl SkillMatch {
    #[cfg(test)]
    pub const ALL: [SkillMatch; 2] = [Self::Match, Self::Mismatch];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Match => "Match",
            Self::Mismatch => "Mismatch",
        }
    }
}

/// Outcome written by exactly one terminal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinalDecision {
    #[serde(rename = "Interview Scheduled")]
    Scheduled,
    #[serde(rename = "Application Rejected")]
    Rejected,
    #[serde(rename = "Escalated to Recruiter")]
    Escalated,
}

impl FinalDecision {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Scheduled => "Interview Scheduled",
            Self::Rejected => "Application Rejected",
            Self::Escalated => "Escalated to Recruiter",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for SkillMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for FinalDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Structured result of experience classification.
/// `reasoning` is for logs only; it never enters `ApplicationState`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceAssessment {
    pub level: ExperienceLevel,
    pub reasoning: String,
}

/// Structured result of skill-match classification.
/// `missing_skills` is informational; the router never reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillAssessment {
    pub status: SkillMatch,
    #[serde(default)]
    pub missing_skills: Vec<String>,
}

/// A step tried to overwrite a set-once field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("state field '{0}' is already set")]
pub struct FieldAlreadySet(pub &'static str);

/// The single entity flowing through the workflow. Created fresh per application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationState {
    pub application_text: String,
    pub source_path: Option<PathBuf>,
    pub job_role: String,
    pub experience_level: Option<ExperienceLevel>,
    pub skill_match: Option<SkillMatch>,
    pub final_decision: Option<FinalDecision>,
}

impl ApplicationState {
    /// Seeds a state with caller-supplied fields; every classification field starts unset.
    pub fn seed(
        application_text: impl Into<String>,
        source_path: Option<PathBuf>,
        job_role: impl Into<String>,
    ) -> Self {
        Self {
            application_text: application_text.into(),
            source_path,
            job_role: job_role.into(),
            ..Self::default()
        }
    }

    /// Merges a step's partial update.
    ///
    /// Fields absent from the update are left untouched. `application_text` may be
    /// replaced; the classification fields and the decision may each be set only once.
    pub fn merge(&mut self, update: StateUpdate) -> Result<(), FieldAlreadySet> {
        if update.experience_level.is_some() && self.experience_level.is_some() {
            return Err(FieldAlreadySet("experience_level"));
        }
        if update.skill_match.is_some() && self.skill_match.is_some() {
            return Err(FieldAlreadySet("skill_match"));
        }
        if update.final_decision.is_some() && self.final_decision.is_some() {
            return Err(FieldAlreadySet("final_decision"));
        }

        if let Some(text) = update.application_text {
            self.application_text = text;
        }
        if let Some(level) = update.experience_level {
            self.experience_level = Some(level);
        }
        if let Some(skill) = update.skill_match {
            self.skill_match = Some(skill);
        }
        if let Some(decision) = update.final_decision {
            self.final_decision = Some(decision);
        }
        Ok(())
    }
}

/// Partial state returned by a step. `None` means "not touched by this step".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateUpdate {
    pub application_text: Option<String>,
    pub experience_level: Option<ExperienceLevel>,
    pub skill_match: Option<SkillMatch>,
    pub final_decision: Option<FinalDecision>,
}

impl StateUpdate {
    pub fn text(text: String) -> Self {
        Self {
            application_text: Some(text),
            ..Self::default()
        }
    }

    pub fn experience(level: ExperienceLevel) -> Self {
        Self {
            experience_level: Some(level),
            ..Self::default()
        }
    }

    pub fn skill(skill_match: SkillMatch) -> Self {
        Self {
            skill_match: Some(skill_match),
            ..Self::default()
        }
    }

    pub fn decision(decision: FinalDecision) -> Self {
        Self {
            final_decision: Some(decision),
            ..Self::default()
        }
    }
}

/// The three result fields returned to callers of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScreeningOutcome {
    pub experience_level: ExperienceLevel,
    pub skill_match: SkillMatch,
    pub final_decision: FinalDecision,
}
