// Role generation prompt. Replace `{query}` before sending.

/// Query used when the caller gives none.
pub const DEFAULT_ROLE_QUERY: &str = "Generate a trending, high-salary technology job role";

pub const ROLE_PROMPT_TEMPLATE: &str = r#"You are an expert HR strategist.

Input Query: {query}

Task:
Analyze the query.
1. If the user provides a specific role, generate details for it.
2. If the user provides a vague description, infer the best professional title.
3. If the query asks for a suggestion, GENERATE a high-demand, modern tech role of your choice (e.g. AI Ethicist, MLOps Engineer, Cloud Architect).

Return a JSON object with this EXACT schema (no extra text):
{
  "role": "The professional job role title",
  "experience_level": "The typical experience level (e.g. Mid-Level, Senior)",
  "skills": ["Essential technical and soft skills"],
  "responsibilities": ["Key responsibilities"],
  "qualifications": ["Educational and professional qualifications"]
}"#;
