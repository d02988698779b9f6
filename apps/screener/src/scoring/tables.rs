//! Static lookup data the scorer is bound to: related study fields, language
//! tiers, test-score bands and ratio thresholds.
//!
//! A `CvScorer` owns one `ScoringTables` value for its lifetime. Alternate
//! tables are built by editing a `ScoringTables::default()` before binding.

use serde::{Deserialize, Serialize};

/// `ratio >= min` (or `score >= min`) earns `score` points. Bands are checked in order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBand {
    pub min: f64,
    pub score: u8,
}

fn band(min: f64, score: u8) -> ScoreBand {
    ScoreBand { min, score }
}

/// Maps a 0–1 match ratio to a 0–5 sub-score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioBands {
    pub bands: Vec<ScoreBand>,
    /// Awarded when the ratio is above zero but below every band.
    pub any_match: u8,
}

impl RatioBands {
    pub fn score(&self, ratio: f64) -> u8 {
        if let Some(b) = self.bands.iter().find(|b| ratio >= b.min) {
            return b.score;
        }
        if ratio > 0.0 {
            self.any_match
        } else {
            0
        }
    }
}

/// How the first number is read out of a certificate text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreToken {
    /// `7.5` → 7.5
    Decimal,
    /// `95` → 95; a decimal point ends the token.
    Integer,
}

/// An external language test recognized inside certification text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageTest {
    /// Lower-case marker searched for in the certification text, e.g. "ielts".
    pub marker: String,
    pub token: ScoreToken,
    /// Checked in order; a score below every band earns 0.
    pub bands: Vec<ScoreBand>,
}

impl LanguageTest {
    pub fn score(&self, value: f64) -> u8 {
        self.bands
            .iter()
            .find(|b| value >= b.min)
            .map(|b| b.score)
            .unwrap_or(0)
    }
}

/// Missing keys in a JSON tables file keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringTables {
    /// Field → related fields, all lower-case. Looked up in both directions.
    pub related_fields: Vec<(String, Vec<String>)>,
    /// Named language tiers, lower-case, with their ordinals.
    pub language_tiers: Vec<(String, u8)>,
    /// Checked in order; the first marker present wins.
    pub language_tests: Vec<LanguageTest>,
    pub skill_bands: RatioBands,
    pub objective_bands: RatioBands,
    /// Career-track tokens must be longer than this many characters to count as keywords.
    pub keyword_min_len: usize,
}

impl Default for ScoringTables {
    fn default() -> Self {
        Self {
            related_fields: vec![
                (
                    "computer science".to_string(),
                    owned(&[
                        "information technology",
                        "software engineering",
                        "information systems",
                    ]),
                ),
                (
                    "finance".to_string(),
                    owned(&["accounting", "banking", "economics"]),
                ),
            ],
            language_tiers: [
                ("beginner", 1),
                ("elementary", 2),
                ("intermediate", 3),
                ("upper intermediate", 4),
                ("advanced", 5),
                ("proficient", 6),
                ("native", 7),
            ]
            .into_iter()
            .map(|(name, ordinal)| (name.to_string(), ordinal))
            .collect(),
            language_tests: vec![
                LanguageTest {
                    marker: "ielts".to_string(),
                    token: ScoreToken::Decimal,
                    bands: vec![band(7.5, 5), band(6.5, 4), band(5.5, 3)],
                },
                LanguageTest {
                    marker: "toefl".to_string(),
                    token: ScoreToken::Integer,
                    bands: vec![band(100.0, 5), band(80.0, 4), band(60.0, 3)],
                },
            ],
            skill_bands: RatioBands {
                bands: vec![band(0.9, 5), band(0.7, 4), band(0.5, 3), band(0.3, 2)],
                any_match: 1,
            },
            objective_bands: RatioBands {
                bands: vec![band(0.7, 5), band(0.4, 3)],
                any_match: 0,
            },
            keyword_min_len: 3,
        }
    }
}

impl ScoringTables {
    /// Ordinal of a named tier; unrecognized names resolve to 0.
    pub fn tier_ordinal(&self, level: &str) -> u8 {
        let level = level.to_lowercase();
        self.language_tiers
            .iter()
            .find(|(name, _)| *name == level)
            .map(|(_, ordinal)| *ordinal)
            .unwrap_or(0)
    }

    /// True when two study fields are equal ignoring case or listed as related.
    pub fn fields_related(&self, a: &str, b: &str) -> bool {
        let a = a.to_lowercase();
        let b = b.to_lowercase();
        if a == b {
            return true;
        }
        let lists = |field: &str, other: &str| {
            self.related_fields
                .iter()
                .any(|(key, related)| key == field && related.iter().any(|r| r == other))
        };
        lists(&a, &b) || lists(&b, &a)
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
