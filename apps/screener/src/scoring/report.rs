use serde::{Deserialize, Serialize};

/// The six 0–5 scored dimensions, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Education,
    Experience,
    Skills,
    Certifications,
    Languages,
    Objective,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::Education,
        Dimension::Experience,
        Dimension::Skills,
        Dimension::Certifications,
        Dimension::Languages,
        Dimension::Objective,
    ];

    /// Human-readable name used in strengths, weaknesses and console output.
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Education => "Education",
            Dimension::Experience => "Work experience",
            Dimension::Skills => "Professional skills",
            Dimension::Certifications => "Certifications",
            Dimension::Languages => "Foreign languages",
            Dimension::Objective => "Career orientation",
        }
    }
}

/// Six sub-scores on the 0–5 scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubScores {
    pub education: u8,
    pub experience: u8,
    pub skills: u8,
    pub certifications: u8,
    pub languages: u8,
    pub objective: u8,
}

impl SubScores {
    pub fn get(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Education => self.education,
            Dimension::Experience => self.experience,
            Dimension::Skills => self.skills,
            Dimension::Certifications => self.certifications,
            Dimension::Languages => self.languages,
            Dimension::Objective => self.objective,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, u8)> + '_ {
        Dimension::ALL.into_iter().map(move |d| (d, self.get(d)))
    }
}

/// Outcome tier, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Good,
    Moderate,
    Fail,
}

impl Category {
    /// `total ≥ threshold` → Good, `total ≥ 0.8 × threshold` → Moderate, else Fail.
    pub fn from_score(total: i32, passing_threshold: f64) -> Self {
        let total = f64::from(total);
        if total >= passing_threshold {
            Category::Good
        } else if total >= passing_threshold * 0.8 {
            Category::Moderate
        } else {
            Category::Fail
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Good => "Good",
            Category::Moderate => "Moderate",
            Category::Fail => "Fail",
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            Category::Good => "Proceed to interview stage",
            Category::Moderate => {
                "Consider for interview if there are insufficient stronger candidates"
            }
            Category::Fail => "Not recommended for this position",
        }
    }
}

/// Scoring result for one CV against one position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub candidate_name: String,
    pub position_name: String,
    /// 0–100 under sane weights; capped at 100, never floored.
    pub total_score: i32,
    pub category: Category,
    pub passing_threshold: f64,
    pub detailed_scores: SubScores,
    pub bonus: u8,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendation: String,
}

/// Dimensions scoring 4 or more. A 3 is neither strength nor weakness.
pub fn identify_strengths(scores: &SubScores) -> Vec<String> {
    scores
        .iter()
        .filter(|(_, s)| *s >= 4)
        .map(|(d, _)| d.label().to_string())
        .collect()
}

/// Dimensions scoring 2 or less.
pub fn identify_weaknesses(scores: &SubScores) -> Vec<String> {
    scores
        .iter()
        .filter(|(_, s)| *s <= 2)
        .map(|(d, _)| d.label().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_lower_bounds_inclusive() {
        assert_eq!(Category::from_score(80, 80.0), Category::Good);
        assert_eq!(Category::from_score(64, 80.0), Category::Moderate);
        assert_eq!(Category::from_score(63, 80.0), Category::Fail);
        assert_eq!(Category::from_score(79, 80.0), Category::Moderate);
    }

    #[test]
    fn test_category_fractional_threshold() {
        // 0.8 × 50 = 40
        assert_eq!(Category::from_score(50, 50.0), Category::Good);
        assert_eq!(Category::from_score(40, 50.0), Category::Moderate);
        assert_eq!(Category::from_score(39, 50.0), Category::Fail);
    }

    #[test]
    fn test_strengths_weaknesses_dead_zone() {
        let scores = SubScores {
            education: 3,
            experience: 5,
            skills: 2,
            certifications: 4,
            languages: 0,
            objective: 3,
        };
        assert_eq!(
            identify_strengths(&scores),
            vec!["Work experience", "Certifications"]
        );
        assert_eq!(
            identify_weaknesses(&scores),
            vec!["Professional skills", "Foreign languages"]
        );
    }

    #[test]
    fn test_sub_scores_iterate_in_report_order() {
        let scores = SubScores {
            education: 1,
            experience: 2,
            skills: 3,
            certifications: 4,
            languages: 5,
            objective: 0,
        };
        let values: Vec<u8> = scores.iter().map(|(_, s)| s).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 0]);
    }

    #[test]
    fn test_category_serializes_as_label() {
        assert_eq!(serde_json::to_string(&Category::Moderate).unwrap(), "\"Moderate\"");
    }
}
