//! Qualitative insights about one candidate for a named position.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extraction::llm_failure;
use crate::extraction::prompts::{INSIGHTS_PROMPT_TEMPLATE, INSIGHTS_SYSTEM};
use crate::llm_client::LlmClient;
use crate::models::cv::CvRecord;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateInsights {
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    /// "Good fit", "Moderate fit" or "Poor fit" as worded by the model.
    pub fit: String,
}

/// Asks the language API for strengths, improvements and an overall fit verdict.
pub async fn get_detailed_insights(
    llm: &LlmClient,
    cv: &CvRecord,
    position: &str,
) -> Result<CandidateInsights, AppError> {
    let prompt = build_insights_prompt(cv, position);
    llm.call_json::<CandidateInsights>(&prompt, INSIGHTS_SYSTEM)
        .await
        .map_err(|e| llm_failure("Insights", e))
}

pub fn build_insights_prompt(cv: &CvRecord, position: &str) -> String {
    INSIGHTS_PROMPT_TEMPLATE
        .replace("{cv_summary}", &summarize(cv))
        .replace("{position}", position)
}

/// Compact plain-text view of the fields the insight prompt needs.
fn summarize(cv: &CvRecord) -> String {
    let education = &cv.education;
    let experience = cv
        .work_experience
        .iter()
        .map(|e| format!("{} at {} ({})", e.title, e.company, e.duration))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Candidate: {}\n\
         Education: {} in {} from {}\n\
         Work Experience: {}\n\
         Skills: Technical - {}, Soft - {}\n\
         Career Objective: {}",
        cv.candidate_name(),
        education.degree,
        education.major,
        education.school,
        experience,
        cv.skills.technical.join(", "),
        cv.skills.soft.join(", "),
        cv.career_objective,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::parse_json_payload;
    use crate::models::cv::{Education, PersonalInfo, Skills, WorkExperience};

    fn cv() -> CvRecord {
        CvRecord {
            personal_info: PersonalInfo {
                name: "Tran Thi B".to_string(),
                ..Default::default()
            },
            education: Education {
                degree: "Bachelor".to_string(),
                major: "Marketing".to_string(),
                school: "NEU".to_string(),
                ..Default::default()
            },
            work_experience: vec![WorkExperience {
                company: "Brandly".to_string(),
                title: "Content Executive".to_string(),
                duration: "2 years".to_string(),
                ..Default::default()
            }],
            skills: Skills {
                technical: vec!["SEO".to_string(), "Google Analytics".to_string()],
                soft: vec!["Creativity".to_string()],
            },
            career_objective: "Lead marketing strategy".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_prompt_carries_cv_summary() {
        let prompt = build_insights_prompt(&cv(), "Marketing Specialist");
        assert!(prompt.contains("Candidate: Tran Thi B"));
        assert!(prompt.contains("Bachelor in Marketing from NEU"));
        assert!(prompt.contains("Content Executive at Brandly (2 years)"));
        assert!(prompt.contains("Technical - SEO, Google Analytics, Soft - Creativity"));
        assert!(prompt.contains("for the Marketing Specialist position"));
    }

    fn parse_insights(text: &str) -> Result<CandidateInsights, AppError> {
        parse_json_payload(text).map_err(|e| llm_failure("Insights", e))
    }

    #[test]
    fn test_parse_insights() {
        let insights = parse_insights(
            r#"```json
{"strengths": ["SEO", "Content"], "improvements": ["Paid ads"], "fit": "Moderate fit"}
```"#,
        )
        .unwrap();
        assert_eq!(insights.strengths.len(), 2);
        assert_eq!(insights.improvements, vec!["Paid ads"]);
        assert_eq!(insights.fit, "Moderate fit");
    }

    #[test]
    fn test_parse_insights_tolerates_missing_keys() {
        let insights = parse_insights(r#"{"fit": "Poor fit"}"#).unwrap();
        assert!(insights.strengths.is_empty());
        assert_eq!(insights.fit, "Poor fit");
    }

    #[test]
    fn test_parse_insights_without_json_fails() {
        assert!(matches!(
            parse_insights("The candidate looks fine."),
            Err(AppError::Extraction(_))
        ));
    }
}
