// Shared prompt fragments. Each module that calls the LLM keeps its own prompts.rs;
// this file holds the pieces they have in common.

/// System prompt that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are an expert HR specialist. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies outside the requested fields.";

/// Temperature for classification calls. Screening should be as repeatable as the model allows.
pub const CLASSIFICATION_TEMPERATURE: f32 = 0.0;

/// Temperature for role generation. Slight creativity when asked to invent a role.
pub const GENERATION_TEMPERATURE: f32 = 0.7;
