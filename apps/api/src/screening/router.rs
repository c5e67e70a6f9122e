//! Decision router: picks the terminal step once both classifications are known.
//!
//! Order of checks is the contract: a skill match always schedules, even for a
//! senior candidate; only a senior mismatch escalates; everything else is rejected.

use crate::screening::models::{ExperienceLevel, SkillMatch};

/// The three terminal steps the router can choose between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Schedule,
    Escalate,
    Reject,
}

pub fn route(experience_level: ExperienceLevel, skill_match: SkillMatch) -> Route {
    match (skill_match, experience_level) {
        (SkillMatch::Match, _) => Route::Schedule,
        (SkillMatch::Mismatch, ExperienceLevel::Senior) => Route::Escalate,
        (SkillMatch::Mismatch, ExperienceLevel::Entry | ExperienceLevel::Mid) => Route::Reject,
    }
}
