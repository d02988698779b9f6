//! Built-in evaluation checklists per professional field and the free-text
//! field analysis that uses them.

use tracing::info;

use crate::errors::AppError;
use crate::extraction::llm_failure;
use crate::extraction::prompts::{FIELD_ANALYSIS_PROMPT_TEMPLATE, FIELD_ANALYSIS_SYSTEM};
use crate::llm_client::LlmClient;

/// One named checklist inside a field, e.g. "Soft skills".
#[derive(Debug, Clone, Copy)]
pub struct CriteriaGroup {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct FieldCriteria {
    pub field: &'static str,
    pub aliases: &'static [&'static str],
    pub groups: &'static [CriteriaGroup],
}

pub const FIELD_CRITERIA: &[FieldCriteria] = &[
    FieldCriteria {
        field: "IT",
        aliases: &["information technology", "software", "tech"],
        groups: &[
            CriteriaGroup {
                name: "Technical skills",
                items: &[
                    "Programming languages",
                    "Frameworks",
                    "Database skills",
                    "System design",
                    "Problem-solving abilities",
                ],
            },
            CriteriaGroup {
                name: "Soft skills",
                items: &["Communication", "Teamwork", "Adaptability"],
            },
            CriteriaGroup {
                name: "Education",
                items: &["Computer Science or IT degree", "Relevant certifications"],
            },
        ],
    },
    FieldCriteria {
        field: "Marketing",
        aliases: &[],
        groups: &[
            CriteriaGroup {
                name: "Technical skills",
                items: &[
                    "Digital marketing tools",
                    "Analytics skills",
                    "Social media management",
                    "Content creation",
                ],
            },
            CriteriaGroup {
                name: "Soft skills",
                items: &["Creativity", "Communication", "Project management"],
            },
            CriteriaGroup {
                name: "Experience",
                items: &["Campaign management", "Market research"],
            },
        ],
    },
    FieldCriteria {
        field: "Finance",
        aliases: &[],
        groups: &[
            CriteriaGroup {
                name: "Technical skills",
                items: &[
                    "Financial analysis",
                    "Risk assessment",
                    "Financial modeling",
                    "Excel expertise",
                ],
            },
            CriteriaGroup {
                name: "Soft skills",
                items: &["Analytical thinking", "Attention to detail", "Decision making"],
            },
            CriteriaGroup {
                name: "Certifications",
                items: &["CFA", "Financial certifications"],
            },
        ],
    },
    FieldCriteria {
        field: "Accounting",
        aliases: &[],
        groups: &[
            CriteriaGroup {
                name: "Technical skills",
                items: &[
                    "Accounting software",
                    "Financial statement preparation",
                    "Auditing",
                    "Compliance with accounting standards",
                    "Data analysis",
                ],
            },
            CriteriaGroup {
                name: "Soft skills",
                items: &["Precision and attention to detail", "Time management", "Professional ethics"],
            },
            CriteriaGroup {
                name: "Certifications",
                items: &["CPA", "ACCA", "Chief accountant certificate"],
            },
        ],
    },
    FieldCriteria {
        field: "Human Resources",
        aliases: &["hr"],
        groups: &[
            CriteriaGroup {
                name: "Technical skills",
                items: &[
                    "Recruitment and training",
                    "Talent management",
                    "Labor law",
                    "Organizational development",
                    "Performance evaluation",
                ],
            },
            CriteriaGroup {
                name: "Soft skills",
                items: &["Communication", "Conflict resolution", "Negotiation", "Empathy"],
            },
            CriteriaGroup {
                name: "Experience",
                items: &["HR management", "Policy development"],
            },
        ],
    },
];

/// Finds a field by name or alias, ignoring case and surrounding space.
pub fn find_field(name: &str) -> Option<&'static FieldCriteria> {
    let name = name.trim();
    FIELD_CRITERIA.iter().find(|c| {
        c.field.eq_ignore_ascii_case(name) || c.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    })
}

pub fn field_names() -> Vec<&'static str> {
    FIELD_CRITERIA.iter().map(|c| c.field).collect()
}

impl FieldCriteria {
    /// Checklist rendered as indented bullet lists.
    pub fn render(&self) -> String {
        self.groups
            .iter()
            .map(|g| {
                let items: Vec<String> = g.items.iter().map(|i| format!("  - {i}")).collect();
                format!("{}:\n{}", g.name, items.join("\n"))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Resolves the field and builds the prompt. Unknown fields fail here, before any call.
pub fn build_field_analysis_prompt(cv_text: &str, field: &str) -> Result<String, AppError> {
    let criteria = find_field(field).ok_or_else(|| {
        AppError::Validation(format!(
            "Unknown field '{}'; expected one of: {}",
            field.trim(),
            field_names().join(", ")
        ))
    })?;
    Ok(FIELD_ANALYSIS_PROMPT_TEMPLATE
        .replace("{field}", criteria.field)
        .replace("{criteria}", &criteria.render())
        .replace("{cv_text}", cv_text.trim()))
}

/// Free-text assessment of a CV against a field's checklist.
pub async fn analyze_cv_for_field(
    llm: &LlmClient,
    cv_text: &str,
    field: &str,
) -> Result<String, AppError> {
    let prompt = build_field_analysis_prompt(cv_text, field)?;
    info!("Analyzing CV for field '{}'", field.trim());
    llm.call_text(&prompt, FIELD_ANALYSIS_SYSTEM)
        .await
        .map_err(|e| llm_failure("Field analysis", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields_present() {
        assert_eq!(
            field_names(),
            vec!["IT", "Marketing", "Finance", "Accounting", "Human Resources"]
        );
        assert!(FIELD_CRITERIA.iter().all(|c| c.groups.len() == 3));
    }

    #[test]
    fn test_find_field_by_name_or_alias() {
        assert_eq!(find_field("it").map(|c| c.field), Some("IT"));
        assert_eq!(find_field(" HR ").map(|c| c.field), Some("Human Resources"));
        assert_eq!(find_field("finance").map(|c| c.field), Some("Finance"));
        assert!(find_field("astronomy").is_none());
    }

    #[test]
    fn test_prompt_includes_checklist() {
        let prompt = build_field_analysis_prompt("CPA, 4 years audit", "Accounting").unwrap();
        assert!(prompt.contains("in the Accounting field"));
        assert!(prompt.contains("Certifications:\n  - CPA\n  - ACCA"));
        assert!(prompt.contains("CPA, 4 years audit"));
    }

    #[test]
    fn test_unknown_field_is_validation_error() {
        let err = build_field_analysis_prompt("text", "Astronomy").unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("Human Resources")));
    }

    #[tokio::test]
    async fn test_unknown_field_fails_without_network() {
        let llm = LlmClient::new("test-key".to_string())
            .unwrap()
            .with_base_url("http://127.0.0.1:9");
        let err = analyze_cv_for_field(&llm, "text", "Astronomy").await.unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }
}
