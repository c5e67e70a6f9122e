// Application screening: load → classify experience → classify skills → route → decide.
// All LLM calls go through llm_client via the ApplicationClassifier trait.

pub mod classifier;
pub mod handlers;
pub mod loader;
pub mod models;
pub mod prompts;
pub mod router;
pub mod upload;
pub mod workflow;
