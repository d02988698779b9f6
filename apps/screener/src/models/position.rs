//! Position profile: what one job opening requires and how its score is weighted.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;

/// Per-category weights. All seven are expected to sum to 1.0; the six core
/// weights blend the sub-scores and `achievements` scales the bonus separately.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringWeights {
    pub education: f64,
    pub experience: f64,
    pub skills: f64,
    pub certifications: f64,
    pub languages: f64,
    pub objective: f64,
    pub achievements: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            education: 0.15,
            experience: 0.30,
            skills: 0.20,
            certifications: 0.10,
            languages: 0.10,
            objective: 0.10,
            achievements: 0.05,
        }
    }
}

impl ScoringWeights {
    /// Sum of the six weights blended into the 0–5 composite.
    pub fn core_sum(&self) -> f64 {
        self.education
            + self.experience
            + self.skills
            + self.certifications
            + self.languages
            + self.objective
    }

    pub fn total(&self) -> f64 {
        self.core_sum() + self.achievements
    }
}

/// Minimum level for one language. `min_level` is a named tier
/// ("upper intermediate") or free text such as "IELTS 6.5".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageRequirement {
    pub language: String,
    pub min_level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PositionProfile {
    pub position_name: String,
    pub required_degree: String,
    pub required_major: String,
    pub min_experience_years: f64,
    pub required_skills: Vec<String>,
    pub required_certifications: Vec<String>,
    /// Ordered; only the first entry is evaluated by the scorer.
    pub required_languages: Vec<LanguageRequirement>,
    pub career_track: String,
    pub scoring_weights: ScoringWeights,
    pub passing_threshold: f64,
}

impl Default for PositionProfile {
    fn default() -> Self {
        Self {
            position_name: String::new(),
            required_degree: String::new(),
            required_major: String::new(),
            min_experience_years: 0.0,
            required_skills: Vec::new(),
            required_certifications: Vec::new(),
            required_languages: Vec::new(),
            career_track: String::new(),
            scoring_weights: ScoringWeights::default(),
            passing_threshold: 80.0,
        }
    }
}

impl PositionProfile {
    pub fn new(position_name: impl Into<String>) -> Self {
        Self {
            position_name: position_name.into(),
            ..Default::default()
        }
    }

    /// Loads a profile from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path)?;
        let profile: PositionProfile = serde_json::from_str(&text).map_err(|e| {
            AppError::Validation(format!("Invalid position profile '{}': {e}", path.display()))
        })?;
        profile.warn_on_weight_drift();
        Ok(profile)
    }

    /// Resolves a built-in preset key or, failing that, a JSON file path.
    pub fn resolve(key_or_path: &str) -> Result<Self, AppError> {
        if let Some(preset) = PositionPreset::from_key(key_or_path) {
            return Ok(preset.profile());
        }
        let path = Path::new(key_or_path);
        if path.exists() {
            return Self::load(path);
        }
        Err(AppError::NotFound(format!(
            "'{key_or_path}' is neither a preset ({}) nor an existing profile file",
            PositionPreset::ALL
                .iter()
                .map(|p| p.key())
                .collect::<Vec<_>>()
                .join(", ")
        )))
    }

    fn warn_on_weight_drift(&self) {
        let sum = self.scoring_weights.total();
        if (sum - 1.0).abs() > 1e-6 {
            warn!(
                "Scoring weights for '{}' sum to {sum:.3}, not 1.0; totals will be capped at 100",
                self.position_name
            );
        }
    }
}

/// Built-in openings used by the demo flow and the form adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionPreset {
    FrontendDeveloper,
    ProjectManager,
    MarketingSpecialist,
}

impl PositionPreset {
    pub const ALL: [PositionPreset; 3] = [
        PositionPreset::FrontendDeveloper,
        PositionPreset::ProjectManager,
        PositionPreset::MarketingSpecialist,
    ];

    pub fn key(self) -> &'static str {
        match self {
            PositionPreset::FrontendDeveloper => "dev",
            PositionPreset::ProjectManager => "pm",
            PositionPreset::MarketingSpecialist => "marketing",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(key.trim()))
    }

    pub fn profile(self) -> PositionProfile {
        match self {
            PositionPreset::FrontendDeveloper => PositionProfile {
                position_name: "Senior Frontend Developer".to_string(),
                required_degree: "Bachelor".to_string(),
                required_major: "Computer Science".to_string(),
                min_experience_years: 3.0,
                required_skills: strings(&["JavaScript", "React", "CSS", "HTML", "Git"]),
                required_languages: vec![english("upper intermediate")],
                career_track: "Technical leadership in web development".to_string(),
                ..Default::default()
            },
            PositionPreset::ProjectManager => PositionProfile {
                position_name: "Project Manager".to_string(),
                required_degree: "Bachelor".to_string(),
                required_major: "Computer Science".to_string(),
                min_experience_years: 5.0,
                required_skills: strings(&["Project Management", "Agile", "Scrum", "Leadership"]),
                required_languages: vec![english("advanced")],
                career_track: "Project Management leadership".to_string(),
                ..Default::default()
            },
            PositionPreset::MarketingSpecialist => PositionProfile {
                position_name: "Marketing Specialist".to_string(),
                required_degree: "Bachelor".to_string(),
                required_major: "Marketing".to_string(),
                min_experience_years: 2.0,
                required_skills: strings(&["Digital Marketing", "Social Media", "Content Creation"]),
                required_languages: vec![english("intermediate")],
                career_track: "Marketing strategy and execution".to_string(),
                ..Default::default()
            },
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn english(level: &str) -> LanguageRequirement {
    LanguageRequirement {
        language: "English".to_string(),
        min_level: level.to_string(),
    }
}
