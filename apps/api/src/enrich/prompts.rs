// All LLM prompt constants for the fit re-scorer.

/// System prompt for fit assessment — enforces JSON-only output.
pub const FIT_SYSTEM: &str =
    "You are an expert recruiter assessing how well a candidate fits a role. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Fit assessment prompt template.
/// Replace `{cv_text}`, `{job_text}`, and `{preference_block}` before sending.
pub const FIT_PROMPT_TEMPLATE: &str = r#"Evaluate the fit between this CV and job description.

CV:
"""
{cv_text}
"""

Job Description:
"""
{job_text}
"""

User preference history:
{preference_block}

Return a JSON object with this EXACT schema (no extra fields):
{
  "score": 72,
  "summary": "One or two sentences on overall fit",
  "strengths": ["specific strength"],
  "gaps": ["specific gap"]
}

Rules:
- "score" is a number from 0 to 100.
- Weigh the preference history: similarity to LIKED jobs raises the score,
  similarity to DISLIKED jobs lowers it.
- "strengths" and "gaps" must each cite concrete evidence from the CV or the
  job description, not generic traits."#;

/// Used when the feedback log has no examples yet.
pub const DEFAULT_PREFERENCE_BLOCK: &str = "The user prefers senior HR, People Ops, \
    HR Operations, and HR Transformation roles.\n";
