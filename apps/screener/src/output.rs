//! Console and JSON rendering for reports, comparisons and reviews.

use serde::Serialize;

use crate::advice::MatchedSolution;
use crate::comparison::{PairwiseComparison, RankedCandidate};
use crate::errors::AppError;
use crate::extraction::insights::CandidateInsights;
use crate::models::cv::display_name;
use crate::models::position::PositionPreset;
use crate::scoring::{Dimension, Report};

pub fn to_json<T: Serialize>(value: &T) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

pub fn render_report(report: &Report, insights: Option<&CandidateInsights>) -> String {
    let mut lines = vec![
        "=== CV EVALUATION REPORT ===".to_string(),
        format!("Candidate: {}", display_name(&report.candidate_name)),
        format!("Position: {}", report.position_name),
        format!(
            "Total Score: {}/100 ({})",
            report.total_score,
            report.category.label()
        ),
        format!("Passing Threshold: {}", report.passing_threshold),
        String::new(),
        "Detailed Scores:".to_string(),
    ];
    lines.extend(
        report
            .detailed_scores
            .iter()
            .map(|(dimension, score)| format!("- {}: {}/5", dimension.label(), score)),
    );
    lines.push(format!("- Achievement bonus: +{}", report.bonus));
    lines.push(String::new());
    lines.push(format!("Strengths: {}", list_or_none(&report.strengths)));
    lines.push(format!("Weaknesses: {}", list_or_none(&report.weaknesses)));

    if let Some(insights) = insights {
        lines.push(String::new());
        lines.push("AI Insights:".to_string());
        lines.push(format!("Strengths: {}", list_or_none(&insights.strengths)));
        lines.push(format!(
            "Areas for improvement: {}",
            list_or_none(&insights.improvements)
        ));
        lines.push(format!("Overall fit: {}", insights.fit));
    }

    lines.push(String::new());
    lines.push(format!("Recommendation: {}", report.recommendation));
    lines.join("\n")
}

fn signed(value: i32) -> String {
    if value > 0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}

pub fn render_comparison(comparison: &PairwiseComparison) -> String {
    let deltas = Dimension::ALL
        .iter()
        .map(|&d| format!("  {}: {}", d.label(), signed(comparison.deltas.get(d))))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "{}\n  Preferred: {}\n  Score gap: {}\n{}",
        comparison.pair_label, comparison.preferred, comparison.score_gap, deltas
    )
}

pub fn render_ranking(ranking: &[RankedCandidate]) -> String {
    ranking
        .iter()
        .map(|r| {
            format!(
                "{}. {} ({}) - {}/100",
                r.rank,
                display_name(&r.candidate_name),
                r.label,
                r.total_score
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_review(matches: &[MatchedSolution]) -> String {
    if matches.is_empty() {
        return "No common CV problems found.".to_string();
    }
    matches
        .iter()
        .map(|m| {
            let solutions = m
                .solutions
                .iter()
                .map(|s| format!("  - {s}"))
                .collect::<Vec<_>>()
                .join("\n");
            format!("[{}] {}\n{}", m.category.label(), m.problem, solutions)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn render_presets() -> String {
    PositionPreset::ALL
        .iter()
        .map(|p| {
            let profile = p.profile();
            format!(
                "{:<10} {} (min {} years; skills: {})",
                p.key(),
                profile.position_name,
                profile.min_experience_years,
                profile.required_skills.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::compare_reports;
    use crate::scoring::report::{Category, SubScores};

    fn report() -> Report {
        let scores = SubScores {
            education: 3,
            experience: 5,
            skills: 3,
            certifications: 5,
            languages: 5,
            objective: 3,
        };
        Report {
            candidate_name: "Nguyen Van A".to_string(),
            position_name: "Senior Frontend Developer".to_string(),
            total_score: 77,
            category: Category::Moderate,
            passing_threshold: 80.0,
            detailed_scores: scores,
            bonus: 0,
            strengths: vec!["Work experience".to_string()],
            weaknesses: Vec::new(),
            recommendation: Category::Moderate.recommendation().to_string(),
        }
    }

    #[test]
    fn test_render_report() {
        let text = render_report(&report(), None);
        assert!(text.starts_with("=== CV EVALUATION REPORT ==="));
        assert!(text.contains("Total Score: 77/100 (Moderate)"));
        assert!(text.contains("Passing Threshold: 80\n"));
        assert!(text.contains("- Work experience: 5/5"));
        assert!(text.contains("- Achievement bonus: +0"));
        assert!(text.contains("Weaknesses: none"));
        assert!(!text.contains("AI Insights"));
    }

    #[test]
    fn test_render_report_with_insights() {
        let insights = CandidateInsights {
            strengths: vec!["React".to_string()],
            improvements: vec!["CSS".to_string()],
            fit: "Good fit".to_string(),
        };
        let text = render_report(&report(), Some(&insights));
        assert!(text.contains("Areas for improvement: CSS"));
        assert!(text.contains("Overall fit: Good fit"));
    }

    #[test]
    fn test_unnamed_candidate_rendered_with_placeholder() {
        let mut anonymous = report();
        anonymous.candidate_name = String::new();
        let text = render_report(&anonymous, None);
        assert!(text.contains("Candidate: (unnamed candidate)"));

        let ranking = render_ranking(&[RankedCandidate {
            rank: 1,
            label: "CV1".to_string(),
            candidate_name: String::new(),
            total_score: 77,
        }]);
        assert_eq!(ranking, "1. (unnamed candidate) (CV1) - 77/100");
    }

    #[test]
    fn test_render_comparison_signs() {
        let mut other = report();
        other.detailed_scores.skills = 5;
        other.total_score = 85;
        let text = render_comparison(&compare_reports("CV1", &report(), "CV2", &other));
        assert!(text.contains("Preferred: CV2"));
        assert!(text.contains("Score gap: 8"));
        assert!(text.contains("Professional skills: -2"));
        assert!(text.contains("Education: 0"));
    }

    #[test]
    fn test_report_json_is_camel_case() {
        let json = to_json(&report()).unwrap();
        assert!(json.contains("\"totalScore\": 77"));
        assert!(json.contains("\"detailedScores\""));
    }

    #[test]
    fn test_presets_listed() {
        let text = render_presets();
        assert!(text.contains("dev"));
        assert!(text.contains("Marketing Specialist"));
    }
}
