// LLM prompt constants for CV extraction, insights, field analysis and review.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for CV extraction. Enforces JSON-only output.
pub const CV_EXTRACT_SYSTEM: &str = "You are an expert recruiter who turns resumes into structured data. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// CV extraction prompt template. Replace `{cv_text}` and `{no_invention}` before sending.
pub const CV_EXTRACT_PROMPT_TEMPLATE: &str = r#"Analyze the following resume/CV text and extract structured data.

CV TEXT:
{cv_text}

Return a JSON object with this EXACT schema (no extra fields):
{
  "personalInfo": {"name": "", "age": 0, "gender": ""},
  "education": {"degree": "", "major": "", "school": "", "gpa": ""},
  "workExperience": [{"company": "", "title": "", "duration": "", "description": ""}],
  "skills": {"technical": [], "soft": []},
  "certifications": [{"name": "", "level": "", "year": ""}],
  "projects": [{"name": "", "role": "", "achievements": ""}],
  "languages": [{"language": "", "level": "", "certification": ""}],
  "achievements": [{"name": "", "description": "", "year": ""}],
  "careerObjective": "",
  "interests": [],
  "specialRequirements": {"travelWillingness": false, "shiftWork": false, "relocation": false, "others": []}
}

Rules:
- "duration" is the length of the job in words, e.g. "3 years" or "2 years 6 months".
  Convert date ranges ("2018 - 2021") into a length. Treat "present" as today.
- "level" in languages is one of: beginner, elementary, intermediate,
  upper intermediate, advanced, proficient, native. Leave it empty if unknown.
- Put language test results (IELTS, TOEFL, JLPT...) in the language's "certification".
- Translate section content to English where the CV is written in another language,
  but keep names of people, companies and schools as written.

{no_invention}"#;

/// System prompt for qualitative insights.
pub const INSIGHTS_SYSTEM: &str = "You are an expert CV analyst advising a hiring team. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Insights prompt template. Replace `{position}` and `{cv_summary}` before sending.
pub const INSIGHTS_PROMPT_TEMPLATE: &str = r#"Provide insights about the following CV for a {position} position.

{cv_summary}

Provide:
1. Three key strengths of this candidate for the {position} position
2. Two areas for improvement
3. Overall fit assessment: "Good fit", "Moderate fit" or "Poor fit"

Return a JSON object with this EXACT schema:
{"strengths": ["..."], "improvements": ["..."], "fit": "Good fit"}"#;

/// System prompt for free-text field analysis.
pub const FIELD_ANALYSIS_SYSTEM: &str = "You are an experienced recruiter for the given professional field. \
    Write a clear, structured assessment in plain text. \
    Refer to concrete evidence from the CV for every judgement.";

/// Field analysis prompt template. Replace `{field}`, `{criteria}` and `{cv_text}` before sending.
pub const FIELD_ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze this CV for a position in the {field} field based on these criteria:

{criteria}

CV CONTENT:
{cv_text}

Provide a detailed analysis of how well the CV matches each criterion, then an overall verdict."#;

/// Review prompt template. Replace `{issue_list}` and `{cv_text}` before sending.
pub const REVIEW_PROMPT_TEMPLATE: &str = r#"Review the CV below for common quality problems.

Report only problems from this list, using the exact keys:
{issue_list}

CV CONTENT:
{cv_text}

Return a JSON object with this EXACT schema:
{"issues": ["missingInfo", "poorDescriptions"]}
Return {"issues": []} when none of the problems apply."#;
