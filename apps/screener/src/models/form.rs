//! Form collection adapter: flat submission fields → `CvRecord`.
//!
//! Mirrors what the submission form gathers. List-valued text fields are
//! comma-separated; items are trimmed and blanks dropped.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::cv::{
    Achievement, Certification, CvRecord, Education, LanguageSkill, PersonalInfo, Project,
    Skills, SpecialRequirements, WorkExperience,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceRow {
    pub company: String,
    pub title: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationRow {
    pub name: String,
    pub level: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectRow {
    pub name: String,
    pub role: String,
    pub achievements: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageRow {
    pub language: String,
    pub level: String,
    pub certification: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AchievementRow {
    pub name: String,
    pub description: String,
    pub year: String,
}

/// Raw values as typed into the submission form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CvForm {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub degree: String,
    pub major: String,
    pub school: String,
    pub gpa: String,
    pub experience: Vec<ExperienceRow>,
    pub technical_skills: String,
    pub soft_skills: String,
    pub certifications: Vec<CertificationRow>,
    pub projects: Vec<ProjectRow>,
    pub languages: Vec<LanguageRow>,
    pub achievements: Vec<AchievementRow>,
    pub career_objective: String,
    pub interests: String,
    pub travel_willingness: bool,
    pub shift_work: bool,
    pub relocation: bool,
    pub other_requirements: String,
}

impl CvForm {
    /// Converts the submission into a validated `CvRecord`.
    pub fn into_record(self) -> Result<CvRecord, AppError> {
        let record = CvRecord {
            personal_info: PersonalInfo {
                name: self.name.trim().to_string(),
                age: self.age.trim().parse().unwrap_or(0),
                gender: self.gender,
            },
            education: Education {
                degree: self.degree,
                major: self.major,
                school: self.school,
                gpa: self.gpa,
            },
            work_experience: self
                .experience
                .into_iter()
                .map(|row| WorkExperience {
                    company: row.company,
                    title: row.title,
                    duration: row.duration,
                    description: row.description,
                })
                .collect(),
            skills: Skills {
                technical: split_list(&self.technical_skills),
                soft: split_list(&self.soft_skills),
            },
            certifications: self
                .certifications
                .into_iter()
                .map(|row| Certification {
                    name: row.name,
                    level: row.level,
                    year: row.year,
                })
                .collect(),
            projects: self
                .projects
                .into_iter()
                .map(|row| Project {
                    name: row.name,
                    role: row.role,
                    achievements: row.achievements,
                })
                .collect(),
            languages: self
                .languages
                .into_iter()
                .map(|row| LanguageSkill {
                    language: row.language,
                    level: row.level,
                    certification: row.certification,
                })
                .collect(),
            achievements: self
                .achievements
                .into_iter()
                .map(|row| Achievement {
                    name: row.name,
                    description: row.description,
                    year: row.year,
                })
                .collect(),
            career_objective: self.career_objective,
            interests: split_list(&self.interests),
            special_requirements: SpecialRequirements {
                travel_willingness: self.travel_willingness,
                shift_work: self.shift_work,
                relocation: self.relocation,
                others: split_list(&self.other_requirements),
            },
        };
        record.validate()?;
        Ok(record)
    }
}

/// Splits comma-separated input, trimming items and dropping blanks.
pub fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
