//! CV quality review: a static catalog of common CV problems with remedies,
//! and a language-API pass that reports which of them a CV exhibits.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::extraction::llm_failure;
use crate::extraction::prompts::REVIEW_PROMPT_TEMPLATE;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    Format,
    Content,
    Experience,
    Skills,
    Visual,
}

impl IssueCategory {
    pub fn label(self) -> &'static str {
        match self {
            IssueCategory::Format => "Format",
            IssueCategory::Content => "Content",
            IssueCategory::Experience => "Experience",
            IssueCategory::Skills => "Skills",
            IssueCategory::Visual => "Visual",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub category: IssueCategory,
    /// Key the reviewer reports, e.g. "missingInfo".
    pub key: &'static str,
    pub problem: &'static str,
    pub solutions: [&'static str; 3],
}

pub const CV_ERROR_CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        category: IssueCategory::Format,
        key: "inconsistentFormatting",
        problem: "The CV formatting is inconsistent",
        solutions: [
            "Use one font family throughout (e.g. Arial or Times New Roman)",
            "Keep a uniform font size for each section",
            "Align margins evenly and consistently across the CV",
        ],
    },
    CatalogEntry {
        category: IssueCategory::Format,
        key: "lengthIssues",
        problem: "The CV is too long or too short",
        solutions: [
            "Keep the CV within 1-2 pages",
            "Focus on important and relevant information",
            "Remove unnecessary details",
        ],
    },
    CatalogEntry {
        category: IssueCategory::Content,
        key: "missingInfo",
        problem: "Important information is missing",
        solutions: [
            "Add complete contact details",
            "Add a career objective",
            "List work experience in detail",
        ],
    },
    CatalogEntry {
        category: IssueCategory::Content,
        key: "grammarSpelling",
        problem: "Grammar and spelling mistakes",
        solutions: [
            "Proofread carefully for spelling errors",
            "Ask someone else to read it and give feedback",
            "Use a spell-checking tool",
        ],
    },
    CatalogEntry {
        category: IssueCategory::Experience,
        key: "poorDescriptions",
        problem: "Experience descriptions are ineffective",
        solutions: [
            "Start each bullet point with a strong action verb",
            "Quantify achievements with concrete figures",
            "Focus on results achieved rather than duties",
        ],
    },
    CatalogEntry {
        category: IssueCategory::Experience,
        key: "chronologicalIssues",
        problem: "Experience is not ordered sensibly",
        solutions: [
            "List experience in reverse chronological order",
            "Make sure every date range is clear",
            "Explain gaps in the timeline if there are any",
        ],
    },
    CatalogEntry {
        category: IssueCategory::Skills,
        key: "irrelevantSkills",
        problem: "Skills do not fit the position",
        solutions: [
            "Tailor the skills to the job requirements",
            "Remove unrelated skills",
            "Group skills into clear categories",
        ],
    },
    CatalogEntry {
        category: IssueCategory::Skills,
        key: "skillLevels",
        problem: "Proficiency levels are not shown",
        solutions: [
            "Add a rating scale for each skill",
            "Demonstrate skills through specific projects",
            "Mention related certificates or recognition",
        ],
    },
    CatalogEntry {
        category: IssueCategory::Visual,
        key: "poorReadability",
        problem: "The CV is hard to read and poorly organized",
        solutions: [
            "Leave reasonable white space between sections",
            "Use bullet points and a clear heading hierarchy",
            "Choose a readable font and size",
        ],
    },
    CatalogEntry {
        category: IssueCategory::Visual,
        key: "overDesigned",
        problem: "The design is overly complex",
        solutions: [
            "Keep the design simple and professional",
            "Limit the use of colors and graphics",
            "Make sure the CV stays readable when printed in black and white",
        ],
    },
];

/// A catalog entry the reviewer reported for a CV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedSolution {
    pub category: IssueCategory,
    pub key: String,
    pub problem: String,
    pub solutions: Vec<String>,
}

impl From<&CatalogEntry> for MatchedSolution {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            category: entry.category,
            key: entry.key.to_string(),
            problem: entry.problem.to_string(),
            solutions: entry.solutions.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Catalog entries whose key was reported, in catalog order. Unknown keys are ignored.
pub fn match_errors_with_solutions(issue_keys: &[String]) -> Vec<MatchedSolution> {
    let unknown: Vec<&String> = issue_keys
        .iter()
        .filter(|k| !CV_ERROR_CATALOG.iter().any(|e| e.key == k.trim()))
        .collect();
    if !unknown.is_empty() {
        debug!("Ignoring unknown review keys: {:?}", unknown);
    }

    CV_ERROR_CATALOG
        .iter()
        .filter(|entry| issue_keys.iter().any(|k| k.trim() == entry.key))
        .map(MatchedSolution::from)
        .collect()
}

#[derive(Debug, Default, Deserialize)]
struct ReviewPayload {
    #[serde(default)]
    issues: Vec<String>,
}

pub fn build_review_prompt(cv_text: &str) -> String {
    let issue_list = CV_ERROR_CATALOG
        .iter()
        .map(|e| format!("- {}: {}", e.key, e.problem))
        .collect::<Vec<_>>()
        .join("\n");
    REVIEW_PROMPT_TEMPLATE
        .replace("{issue_list}", &issue_list)
        .replace("{cv_text}", cv_text.trim())
}

/// Issue keys from the reviewer's reply. A reply carrying no JSON object
/// reports no problems.
fn review_keys(reply: Result<ReviewPayload, LlmError>) -> Result<Vec<String>, AppError> {
    match reply {
        Ok(payload) => Ok(payload.issues),
        Err(LlmError::MissingJson) => {
            debug!("Review reply carried no JSON object; no issues reported");
            Ok(Vec::new())
        }
        Err(e) => Err(llm_failure("CV review", e)),
    }
}

/// Asks the language API which catalog problems apply and returns their remedies.
pub async fn review_cv(llm: &LlmClient, cv_text: &str) -> Result<Vec<MatchedSolution>, AppError> {
    if cv_text.trim().is_empty() {
        return Err(AppError::Validation("CV text is empty".to_string()));
    }
    let reply = llm
        .call_json::<ReviewPayload>(&build_review_prompt(cv_text), JSON_ONLY_SYSTEM)
        .await;
    let keys = review_keys(reply)?;
    let matched = match_errors_with_solutions(&keys);
    info!("CV review found {} known issue(s)", matched.len());
    Ok(matched)
}
