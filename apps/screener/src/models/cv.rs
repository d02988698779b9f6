//! CV record: the structured form of one candidate's resume.
//!
//! Records enter the system through [`CvRecord::from_json`], which normalizes
//! absent and `null` fields to empty values so the scorer never branches on absence.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::AppError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub name: String,
    #[serde(deserialize_with = "lenient_age")]
    pub age: u32,
    pub gender: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub degree: String,
    pub major: String,
    pub school: String,
    #[serde(deserialize_with = "string_or_number")]
    pub gpa: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperience {
    pub company: String,
    pub title: String,
    /// Free text such as "2 years 3 months" or "2.5 years".
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skills {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub name: String,
    #[serde(deserialize_with = "string_or_number")]
    pub level: String,
    #[serde(deserialize_with = "string_or_number")]
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub name: String,
    pub role: String,
    pub achievements: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageSkill {
    pub language: String,
    /// Named tier, e.g. "upper intermediate".
    #[serde(deserialize_with = "string_or_number")]
    pub level: String,
    /// Free text that may embed a test result, e.g. "IELTS 7.5".
    pub certification: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Achievement {
    pub name: String,
    pub description: String,
    #[serde(deserialize_with = "string_or_number")]
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpecialRequirements {
    pub travel_willingness: bool,
    pub shift_work: bool,
    pub relocation: bool,
    pub others: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CvRecord {
    pub personal_info: PersonalInfo,
    pub education: Education,
    pub work_experience: Vec<WorkExperience>,
    pub skills: Skills,
    pub certifications: Vec<Certification>,
    pub projects: Vec<Project>,
    pub languages: Vec<LanguageSkill>,
    pub achievements: Vec<Achievement>,
    pub career_objective: String,
    pub interests: Vec<String>,
    pub special_requirements: SpecialRequirements,
}

impl CvRecord {
    /// Builds a record from an untrusted JSON value (LLM output or a CV file).
    ///
    /// - absent and `null` fields become empty values
    /// - wrongly typed fields are a validation failure
    /// - a payload with no name, education, experience or skills is rejected
    pub fn from_json(mut value: Value) -> Result<Self, AppError> {
        if !value.is_object() {
            return Err(AppError::Validation(
                "CV payload must be a JSON object".to_string(),
            ));
        }
        strip_nulls(&mut value);
        let record: CvRecord = serde_json::from_value(value)
            .map_err(|e| AppError::Validation(format!("Malformed CV payload: {e}")))?;
        record.validate()?;
        Ok(record)
    }

    pub fn from_json_str(text: &str) -> Result<Self, AppError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json(value)
    }

    /// Rejects records that carry nothing a recruiter or the scorer could use.
    pub fn validate(&self) -> Result<(), AppError> {
        let education = &self.education;
        let has_education = !(education.degree.trim().is_empty()
            && education.major.trim().is_empty()
            && education.school.trim().is_empty());
        let has_skills = !(self.skills.technical.is_empty() && self.skills.soft.is_empty());

        if self.personal_info.name.trim().is_empty()
            && !has_education
            && self.work_experience.is_empty()
            && !has_skills
            && self.certifications.is_empty()
            && self.languages.is_empty()
        {
            return Err(AppError::Validation(
                "CV contains no candidate data (name, education, experience, skills, \
                 certifications or languages)"
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// Display name, falling back to a placeholder for anonymous CVs.
    pub fn candidate_name(&self) -> &str {
        display_name(&self.personal_info.name)
    }
}

pub const UNNAMED_CANDIDATE: &str = "(unnamed candidate)";

/// Trimmed name, or the placeholder when there is none.
pub fn display_name(name: &str) -> &str {
    let name = name.trim();
    if name.is_empty() {
        UNNAMED_CANDIDATE
    } else {
        name
    }
}

/// Removes `null` object members and array elements so container defaults apply.
fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(strip_nulls);
        }
        Value::Array(items) => {
            items.retain(|v| !v.is_null());
            items.iter_mut().for_each(strip_nulls);
        }
        _ => {}
    }
}

fn lenient_age<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, found {other}"
        ))),
    }
}
