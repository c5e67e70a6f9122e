//! Screening workflow: a fixed state machine over `ApplicationState`.
//!
//! Flow: Start → Load → ClassifyExperience → ClassifySkill → {Schedule | Reject | Escalate} → End.
//!
//! Every edge is unconditional except the one out of ClassifySkill, which the router
//! decides. Each step returns a `StateUpdate` that is merged into the running state;
//! a step runs at most once per execution. Classification failures abort the run:
//! no decision is ever produced from an incomplete classification.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, info_span, Instrument};
use uuid::Uuid;

use crate::screening::classifier::{ApplicationClassifier, ClassificationError};
use crate::screening::loader::load_application;
use crate::screening::models::{
    ApplicationState, FieldAlreadySet, FinalDecision, ScreeningOutcome, StateUpdate,
};
use crate::screening::router::{route, Route};

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("classification failed: {0}")]
    Classification(#[from] ClassificationError),

    #[error(transparent)]
    StateConflict(#[from] FieldAlreadySet),

    #[error("step '{0}' was scheduled more than once")]
    StepRepeated(&'static str),

    #[error("required state field '{0}' is unset")]
    MissingField(&'static str),
}

/// Nodes of the screening graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Start,
    Load,
    ClassifyExperience,
    ClassifySkill,
    Schedule,
    Reject,
    Escalate,
    End,
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::Start => "start",
            Step::Load => "load_application",
            Step::ClassifyExperience => "categorize_application",
            Step::ClassifySkill => "skill_match_application",
            Step::Schedule => "schedule_interview",
            Step::Reject => "reject_application",
            Step::Escalate => "escalate_to_recruiter",
            Step::End => "end",
        }
    }

    /// Static edges of the graph. Only `ClassifySkill` has more than one successor.
    pub fn successors(&self) -> &'static [Step] {
        match self {
            Step::Start => &[Step::Load],
            Step::Load => &[Step::ClassifyExperience],
            Step::ClassifyExperience => &[Step::ClassifySkill],
            Step::ClassifySkill => &[Step::Schedule, Step::Reject, Step::Escalate],
            Step::Schedule | Step::Reject | Step::Escalate => &[Step::End],
            Step::End => &[],
        }
    }
}

impl From<Route> for Step {
    fn from(route: Route) -> Self {
        match route {
            Route::Schedule => Step::Schedule,
            Route::Reject => Step::Reject,
            Route::Escalate => Step::Escalate,
        }
    }
}

/// Transition table. Returns `None` once `End` is reached.
fn next_step(step: Step, state: &ApplicationState) -> Result<Option<Step>, WorkflowError> {
    let next = match step {
        Step::ClassifySkill => {
            let level = state
                .experience_level
                .ok_or(WorkflowError::MissingField("experience_level"))?;
            let skill = state
                .skill_match
                .ok_or(WorkflowError::MissingField("skill_match"))?;
            Step::from(route(level, skill))
        }
        Step::End => return Ok(None),
        other => other.successors()[0],
    };
    Ok(Some(next))
}

impl TryFrom<&ApplicationState> for ScreeningOutcome {
    type Error = WorkflowError;

    fn try_from(state: &ApplicationState) -> Result<Self, Self::Error> {
        Ok(ScreeningOutcome {
            experience_level: state
                .experience_level
                .ok_or(WorkflowError::MissingField("experience_level"))?,
            skill_match: state
                .skill_match
                .ok_or(WorkflowError::MissingField("skill_match"))?,
            final_decision: state
                .final_decision
                .ok_or(WorkflowError::MissingField("final_decision"))?,
        })
    }
}

/// The workflow executor. Holds the injected classifier; owns no per-run state,
/// so a single instance serves concurrent requests.
pub struct ScreeningWorkflow {
    classifier: Arc<dyn ApplicationClassifier>,
}

impl ScreeningWorkflow {
    pub fn new(classifier: Arc<dyn ApplicationClassifier>) -> Self {
        Self { classifier }
    }

    /// Public entry point: seeds a fresh state, runs the graph and returns the
    /// three decision fields.
    pub async fn process_application(
        &self,
        application_text: &str,
        source_path: Option<PathBuf>,
        job_role: &str,
    ) -> Result<ScreeningOutcome, WorkflowError> {
        let seed = ApplicationState::seed(application_text, source_path, job_role);
        let final_state = self.run(seed).await?;
        ScreeningOutcome::try_from(&final_state)
    }

    /// Runs the graph to `End` and returns the merged state.
    pub async fn run(&self, seed: ApplicationState) -> Result<ApplicationState, WorkflowError> {
        let run_id = Uuid::new_v4();
        let span = info_span!("screening", %run_id, job_role = %seed.job_role);
        self.execute(seed).instrument(span).await
    }

    async fn execute(&self, mut state: ApplicationState) -> Result<ApplicationState, WorkflowError> {
        let mut visited: HashSet<Step> = HashSet::new();
        let mut current = Some(Step::Start);

        while let Some(step) = current {
            if !visited.insert(step) {
                return Err(WorkflowError::StepRepeated(step.name()));
            }
            debug!(step = step.name(), "Entering step");

            let update = self.run_step(step, &state).await?;
            state.merge(update)?;
            current = next_step(step, &state)?;
        }

        Ok(state)
    }

    async fn run_step(
        &self,
        step: Step,
        state: &ApplicationState,
    ) -> Result<StateUpdate, WorkflowError> {
        let update = match step {
            Step::Start | Step::End => StateUpdate::default(),
            Step::Load => load_application(state).await,
            Step::ClassifyExperience => {
                let assessment = self
                    .classifier
                    .classify_experience(&state.job_role, &state.application_text)
                    .await?;
                info!(
                    "Experience Level: {} ({})",
                    assessment.level, assessment.reasoning
                );
                StateUpdate::experience(assessment.level)
            }
            Step::ClassifySkill => {
                let assessment = self
                    .classifier
                    .classify_skill_match(&state.job_role, &state.application_text)
                    .await?;
                info!(
                    "Skill Match: {} (missing: {:?})",
                    assessment.status, assessment.missing_skills
                );
                StateUpdate::skill(assessment.status)
            }
            Step::Schedule => {
                info!("Decision: scheduling interview");
                StateUpdate::decision(FinalDecision::Scheduled)
            }
            Step::Reject => {
                info!("Decision: rejecting application");
                StateUpdate::decision(FinalDecision::Rejected)
            }
            Step::Escalate => {
                info!("Decision: escalating to recruiter (senior candidate, skill mismatch)");
                StateUpdate::decision(FinalDecision::Escalated)
            }
        };
        Ok(update)
    }
}
