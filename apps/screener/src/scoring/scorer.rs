//! CV scorer: binds one position profile, one set of scoring tables and one
//! term matcher, then turns CV records into reports.
//!
//! Scoring is synchronous and pure: a `CvScorer` holds no mutable state and
//! can be shared across tasks behind an `Arc`.

use std::sync::Arc;

use tracing::debug;

use crate::models::cv::CvRecord;
use crate::models::position::{PositionProfile, ScoringWeights};
use crate::scoring::matching::{SubstringMatcher, TermMatcher};
use crate::scoring::report::{
    identify_strengths, identify_weaknesses, Category, Dimension, Report, SubScores,
};
use crate::scoring::rules;
use crate::scoring::tables::ScoringTables;

/// Scale from the 0–5 weighted blend to 0–100.
const SCORE_SCALE: f64 = 20.0;
/// Multiplier applied to `bonus × w_achievements`.
const BONUS_SCALE: f64 = 5.0;
const MAX_TOTAL: i32 = 100;

#[derive(Clone)]
pub struct CvScorer {
    profile: PositionProfile,
    tables: ScoringTables,
    matcher: Arc<dyn TermMatcher>,
}

impl CvScorer {
    /// Default tables and the loose substring matcher.
    pub fn new(profile: PositionProfile) -> Self {
        Self {
            profile,
            tables: ScoringTables::default(),
            matcher: Arc::new(SubstringMatcher),
        }
    }

    pub fn with_tables(mut self, tables: ScoringTables) -> Self {
        self.tables = tables;
        self
    }

    pub fn with_matcher(mut self, matcher: Arc<dyn TermMatcher>) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn profile(&self) -> &PositionProfile {
        &self.profile
    }

    // ────────────────────────────────────────────────────────────────────────
    // Sub-scores
    // ────────────────────────────────────────────────────────────────────────

    pub fn score_education(&self, cv: &CvRecord) -> u8 {
        rules::score_education(&cv.education, &self.profile.required_major, &self.tables)
    }

    pub fn score_experience(&self, cv: &CvRecord) -> u8 {
        rules::score_experience(&cv.work_experience, self.profile.min_experience_years)
    }

    pub fn score_skills(&self, cv: &CvRecord) -> u8 {
        rules::score_skills(
            &cv.skills,
            &self.profile.required_skills,
            self.matcher.as_ref(),
            &self.tables,
        )
    }

    pub fn score_certifications(&self, cv: &CvRecord) -> u8 {
        rules::score_certifications(
            &cv.certifications,
            &self.profile.required_certifications,
            self.matcher.as_ref(),
        )
    }

    pub fn score_languages(&self, cv: &CvRecord) -> u8 {
        rules::score_languages(&cv.languages, &self.profile.required_languages, &self.tables)
    }

    pub fn score_objective(&self, cv: &CvRecord) -> u8 {
        rules::score_objective(
            &cv.career_objective,
            &self.profile.career_track,
            self.matcher.as_ref(),
            &self.tables,
        )
    }

    pub fn sub_scores(&self, cv: &CvRecord) -> SubScores {
        SubScores {
            education: self.score_education(cv),
            experience: self.score_experience(cv),
            skills: self.score_skills(cv),
            certifications: self.score_certifications(cv),
            languages: self.score_languages(cv),
            objective: self.score_objective(cv),
        }
    }

    pub fn bonus(&self, cv: &CvRecord) -> u8 {
        rules::achievement_bonus(cv.achievements.len())
    }

    pub fn category(&self, total: i32) -> Category {
        Category::from_score(total, self.profile.passing_threshold)
    }

    // ────────────────────────────────────────────────────────────────────────
    // Report
    // ────────────────────────────────────────────────────────────────────────

    pub fn generate_report(&self, cv: &CvRecord) -> Report {
        let detailed_scores = self.sub_scores(cv);
        let bonus = self.bonus(cv);
        let total_score = composite_score(&detailed_scores, bonus, &self.profile.scoring_weights);
        let category = self.category(total_score);

        debug!(
            candidate = cv.candidate_name(),
            total_score,
            matcher = self.matcher.name(),
            "Scored CV against '{}'",
            self.profile.position_name
        );

        Report {
            candidate_name: cv.personal_info.name.trim().to_string(),
            position_name: self.profile.position_name.clone(),
            total_score,
            category,
            passing_threshold: self.profile.passing_threshold,
            detailed_scores,
            bonus,
            strengths: identify_strengths(&detailed_scores),
            weaknesses: identify_weaknesses(&detailed_scores),
            recommendation: category.recommendation().to_string(),
        }
    }
}

/// `round((Σ sub-score × weight) × 20 + bonus × w_achievements × 5)`, capped at 100.
/// Not floored: negative weights can yield a negative total.
pub fn composite_score(scores: &SubScores, bonus: u8, weights: &ScoringWeights) -> i32 {
    let blended: f64 = scores
        .iter()
        .map(|(dimension, score)| f64::from(score) * weight_for(weights, dimension))
        .sum();
    let total = blended * SCORE_SCALE + f64::from(bonus) * weights.achievements * BONUS_SCALE;
    (total.round() as i32).min(MAX_TOTAL)
}

fn weight_for(weights: &ScoringWeights, dimension: Dimension) -> f64 {
    match dimension {
        Dimension::Education => weights.education,
        Dimension::Experience => weights.experience,
        Dimension::Skills => weights.skills,
        Dimension::Certifications => weights.certifications,
        Dimension::Languages => weights.languages,
        Dimension::Objective => weights.objective,
    }
}
