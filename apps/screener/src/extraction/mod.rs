//! CV extraction: turns raw CV text into a validated `CvRecord` via the language API.
//!
//! Default: `GeminiCvExtractor`. The screening pipeline only sees the
//! `CvExtractor` trait, so tests and alternative backends plug in without
//! touching the scorer or the CLI.

pub mod criteria;
pub mod insights;
pub mod prompts;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::extraction::prompts::{CV_EXTRACT_PROMPT_TEMPLATE, CV_EXTRACT_SYSTEM};
use crate::llm_client::prompts::NO_INVENTION_INSTRUCTION;
use crate::llm_client::{parse_json_payload, LlmClient, LlmError};
use crate::models::cv::CvRecord;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Produces a structured CV from raw text. Implementations never return an
/// empty record: a payload without candidate data is an error.
#[async_trait]
pub trait CvExtractor: Send + Sync {
    async fn extract(&self, raw_text: &str) -> Result<CvRecord, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// GeminiCvExtractor
// ────────────────────────────────────────────────────────────────────────────

pub struct GeminiCvExtractor {
    llm: LlmClient,
}

impl GeminiCvExtractor {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl CvExtractor for GeminiCvExtractor {
    async fn extract(&self, raw_text: &str) -> Result<CvRecord, AppError> {
        if raw_text.trim().is_empty() {
            return Err(AppError::Validation("CV text is empty".to_string()));
        }

        let prompt = build_extraction_prompt(raw_text);
        let text = self
            .llm
            .call_text(&prompt, CV_EXTRACT_SYSTEM)
            .await
            .map_err(|e| llm_failure("CV extraction", e))?;

        let record = parse_extraction(&text)?;
        info!(candidate = record.candidate_name(), "Extracted CV");
        Ok(record)
    }
}

pub fn build_extraction_prompt(raw_text: &str) -> String {
    CV_EXTRACT_PROMPT_TEMPLATE
        .replace("{cv_text}", raw_text.trim())
        .replace("{no_invention}", NO_INVENTION_INSTRUCTION)
}

/// Parses the model's text into a CV record through the normal construction boundary.
/// Anything unusable in the payload is reported as an extraction failure.
pub fn parse_extraction(text: &str) -> Result<CvRecord, AppError> {
    let value: Value = parse_json_payload(text).map_err(|e| llm_failure("CV extraction", e))?;
    debug!("Extraction payload parsed; validating CV record");
    CvRecord::from_json(value).map_err(|e| match e {
        AppError::Validation(msg) => AppError::Extraction(msg),
        other => other,
    })
}

/// Maps a client error onto the application taxonomy: unusable payloads are
/// extraction failures, everything else is a language-API failure.
pub(crate) fn llm_failure(context: &str, error: LlmError) -> AppError {
    match error {
        LlmError::MissingJson | LlmError::Parse(_) | LlmError::EmptyContent => {
            AppError::Extraction(format!("{context} failed: {error}"))
        }
        other => AppError::Llm(format!("{context} failed: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODEL_OUTPUT: &str = r#"Here is the extracted data:
```json
{
  "personalInfo": {"name": "Nguyen Van A", "age": "28", "gender": "male"},
  "education": {"degree": "Engineer", "major": "Information Technology", "school": "HUST", "gpa": 3.5},
  "workExperience": [{"company": "Tech Solutions", "title": "Senior Developer", "duration": "3 years", "description": null}],
  "skills": {"technical": ["JavaScript", "React"], "soft": null},
  "languages": [{"language": "English", "level": "", "certification": "IELTS 7.5"}],
  "careerObjective": "Technical Lead in web development"
}
```"#;

    #[test]
    fn test_parse_extraction_normalizes_payload() {
        let cv = parse_extraction(MODEL_OUTPUT).unwrap();
        assert_eq!(cv.personal_info.name, "Nguyen Van A");
        assert_eq!(cv.personal_info.age, 28);
        assert_eq!(cv.education.gpa, "3.5");
        assert_eq!(cv.work_experience[0].description, "");
        assert!(cv.skills.soft.is_empty());
        assert!(cv.certifications.is_empty());
        assert_eq!(cv.languages[0].certification, "IELTS 7.5");
    }

    #[test]
    fn test_missing_json_is_extraction_error() {
        let err = parse_extraction("Sorry, I cannot read this CV.").unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
        assert_eq!(err.code(), "EXTRACTION_ERROR");
    }

    #[test]
    fn test_empty_payload_is_not_a_cv() {
        let err = parse_extraction(r#"{"personalInfo": {"name": ""}, "skills": {"technical": []}}"#)
            .unwrap_err();
        assert!(matches!(err, AppError::Extraction(msg) if msg.contains("no candidate data")));
    }

    #[test]
    fn test_wrong_types_are_extraction_error() {
        let err = parse_extraction(r#"{"workExperience": "three years at Acme"}"#).unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }

    #[test]
    fn test_api_errors_stay_llm_errors() {
        let err = llm_failure(
            "CV extraction",
            LlmError::Api {
                status: 400,
                message: "API key not valid".to_string(),
            },
        );
        assert!(matches!(err, AppError::Llm(msg) if msg.contains("API key not valid")));
        let err = llm_failure("CV extraction", LlmError::RateLimited { retries: 3 });
        assert_eq!(err.code(), "LLM_ERROR");
    }

    #[test]
    fn test_prompt_embeds_text_and_schema() {
        let prompt = build_extraction_prompt("  JOHN DOE\nRust engineer  ");
        assert!(prompt.contains("JOHN DOE\nRust engineer"));
        assert!(prompt.contains("\"workExperience\""));
        assert!(prompt.contains("CRITICAL"));
        assert!(!prompt.contains("{cv_text}"));
    }

    #[tokio::test]
    async fn test_blank_text_rejected_before_any_call() {
        let llm = LlmClient::new("test-key".to_string())
            .unwrap()
            .with_base_url("http://127.0.0.1:9");
        let err = GeminiCvExtractor::new(llm).extract("   \n ").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
