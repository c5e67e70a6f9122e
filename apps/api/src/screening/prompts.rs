// Classification prompt templates. Replace `{job_role}` and `{application}` before sending.

pub const EXPERIENCE_PROMPT_TEMPLATE: &str = r#"Categorize the following job application for the role of '{job_role}' into one of three experience levels: Entry-level, Mid-level, Senior-level.

Return a JSON object with this EXACT schema (no extra text):
{
  "level": "Entry-level" | "Mid-level" | "Senior-level",
  "reasoning": "One or two sentences justifying the level"
}

RULES:
1. `level` MUST be exactly one of the three strings above
2. Judge from stated years, scope of responsibility and seniority of past titles
3. If the application is empty or says nothing about experience, answer "Entry-level"

Job Application Content:
{application}"#;

pub const SKILL_MATCH_PROMPT_TEMPLATE: &str = r#"Analyze the following application for the role of '{job_role}'.
Determine if the candidate's skills match the requirements.
Look strictly for skills relevant to '{job_role}'.

Return a JSON object with this EXACT schema (no extra text):
{
  "status": "Match" | "Mismatch",
  "missing_skills": ["critical skill the candidate lacks"]
}

RULES:
1. `status` MUST be exactly "Match" or "Mismatch"
2. `missing_skills` lists only critical skills for '{job_role}' absent from the application; use [] if none
3. An empty application is a "Mismatch"

Job Application Content:
{application}"#;

pub fn render(template: &str, job_role: &str, application: &str) -> String {
    template
        .replace("{job_role}", job_role)
        .replace("{application}", application)
}
