//! Multi-candidate comparison built on top of finished reports.
//!
//! Pairwise records carry the preferred label, the absolute total gap and a
//! signed per-dimension delta (positive = first candidate stronger).

use serde::{Deserialize, Serialize};

use crate::scoring::{Dimension, Report};

/// Signed sub-score differences, first minus second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionDeltas {
    pub education: i32,
    pub experience: i32,
    pub skills: i32,
    pub certifications: i32,
    pub languages: i32,
    pub objective: i32,
}

impl DimensionDeltas {
    pub fn between(a: &Report, b: &Report) -> Self {
        let delta = |d: Dimension| {
            i32::from(a.detailed_scores.get(d)) - i32::from(b.detailed_scores.get(d))
        };
        Self {
            education: delta(Dimension::Education),
            experience: delta(Dimension::Experience),
            skills: delta(Dimension::Skills),
            certifications: delta(Dimension::Certifications),
            languages: delta(Dimension::Languages),
            objective: delta(Dimension::Objective),
        }
    }

    pub fn get(&self, dimension: Dimension) -> i32 {
        match dimension {
            Dimension::Education => self.education,
            Dimension::Experience => self.experience,
            Dimension::Skills => self.skills,
            Dimension::Certifications => self.certifications,
            Dimension::Languages => self.languages,
            Dimension::Objective => self.objective,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairwiseComparison {
    /// e.g. "CV1 vs CV2"
    pub pair_label: String,
    pub preferred: String,
    pub score_gap: u32,
    pub deltas: DimensionDeltas,
}

/// A candidate's place in the ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCandidate {
    pub rank: usize,
    pub label: String,
    pub candidate_name: String,
    pub total_score: i32,
}

/// Compares two reports. Ties go to the second candidate.
pub fn compare_reports(
    a_label: &str,
    a: &Report,
    b_label: &str,
    b: &Report,
) -> PairwiseComparison {
    let preferred = if a.total_score > b.total_score {
        a_label
    } else {
        b_label
    };
    PairwiseComparison {
        pair_label: format!("{a_label} vs {b_label}"),
        preferred: preferred.to_string(),
        score_gap: a.total_score.abs_diff(b.total_score),
        deltas: DimensionDeltas::between(a, b),
    }
}

/// Label used for the report at 0-based `index`.
pub fn candidate_label(index: usize) -> String {
    format!("CV{}", index + 1)
}

/// Every pair `(i, j)` with `i < j`, in input order.
pub fn compare_all(entries: &[(String, Report)]) -> Vec<PairwiseComparison> {
    let mut comparisons = Vec::new();
    for (i, (a_label, a)) in entries.iter().enumerate() {
        for (b_label, b) in entries.iter().skip(i + 1) {
            comparisons.push(compare_reports(a_label, a, b_label, b));
        }
    }
    comparisons
}

/// Candidates ordered by total score, highest first. Ties keep input order.
pub fn rank(entries: &[(String, Report)]) -> Vec<RankedCandidate> {
    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by(|&x, &y| entries[y].1.total_score.cmp(&entries[x].1.total_score));
    order
        .into_iter()
        .enumerate()
        .map(|(position, index)| {
            let (label, report) = &entries[index];
            RankedCandidate {
                rank: position + 1,
                label: label.clone(),
                candidate_name: report.candidate_name.clone(),
                total_score: report.total_score,
            }
        })
        .collect()
}
