//! Sub-score rules. Each returns a 0–5 score and never fails: unreadable
//! free text contributes nothing instead of raising an error.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::cv::{Certification, Education, LanguageSkill, Skills, WorkExperience};
use crate::models::position::LanguageRequirement;
use crate::scoring::matching::TermMatcher;
use crate::scoring::tables::{ScoreToken, ScoringTables};

pub const FULL_MARKS: u8 = 5;
pub const NEAR_MISS: u8 = 3;
pub const MAX_ACHIEVEMENT_BONUS: u8 = 2;

// ASCII digits only; `\d` is Unicode-aware.
static YEARS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+(?:\.[0-9]+)?)(?:\s+|-)?years?").expect("valid regex")
});
static MONTHS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)(?:\s+|-)?months?").expect("valid regex"));
static DECIMAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").expect("valid regex"));
static INTEGER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid regex"));

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

/// Years expressed by one duration text: "2 years 3 months" → 2.25, "2.5 years" → 2.5.
/// Only the first year figure and the first month figure are read.
pub fn parse_duration_years(duration: &str) -> f64 {
    let text = duration.to_lowercase();
    let first_number = |re: &Regex| {
        re.captures(&text)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .unwrap_or(0.0)
    };
    first_number(&*YEARS_RE) + first_number(&*MONTHS_RE) / 12.0
}

/// Total years across all entries. Order does not matter.
pub fn total_experience_years(experience: &[WorkExperience]) -> f64 {
    experience
        .iter()
        .map(|job| parse_duration_years(&job.duration))
        .sum()
}

/// Three-step rule: meets the minimum → 5, within one year → 3, otherwise 0.
pub fn score_experience(experience: &[WorkExperience], min_years: f64) -> u8 {
    let total = total_experience_years(experience);
    if total >= min_years {
        FULL_MARKS
    } else if total >= min_years - 1.0 {
        NEAR_MISS
    } else {
        0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Skills & certifications
// ────────────────────────────────────────────────────────────────────────────

/// Number of required skills matched by any technical or soft skill, either direction.
pub fn count_matched_skills(
    skills: &Skills,
    required: &[String],
    matcher: &dyn TermMatcher,
) -> usize {
    let held: Vec<String> = skills
        .technical
        .iter()
        .chain(skills.soft.iter())
        .map(|s| s.to_lowercase())
        .collect();

    required
        .iter()
        .map(|r| r.to_lowercase())
        .filter(|req| held.iter().any(|skill| matcher.overlaps(skill, req)))
        .count()
}

pub fn score_skills(
    skills: &Skills,
    required: &[String],
    matcher: &dyn TermMatcher,
    tables: &ScoringTables,
) -> u8 {
    if required.is_empty() {
        return FULL_MARKS;
    }
    let matched = count_matched_skills(skills, required, matcher);
    let ratio = matched as f64 / required.len() as f64;
    tables.skill_bands.score(ratio)
}

/// Binary: any held certificate naming any required one → 5, else 0.
pub fn score_certifications(
    certifications: &[Certification],
    required: &[String],
    matcher: &dyn TermMatcher,
) -> u8 {
    if required.is_empty() {
        return FULL_MARKS;
    }
    let held: Vec<String> = certifications.iter().map(|c| c.name.to_lowercase()).collect();
    let satisfied = required.iter().any(|req| {
        let req = req.to_lowercase();
        held.iter().any(|name| matcher.contains(name, &req))
    });
    if satisfied {
        FULL_MARKS
    } else {
        0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Languages
// ────────────────────────────────────────────────────────────────────────────

/// Scores the first language requirement only; later entries are not consulted.
pub fn score_languages(
    languages: &[LanguageSkill],
    required: &[LanguageRequirement],
    tables: &ScoringTables,
) -> u8 {
    let Some(requirement) = required.first() else {
        return FULL_MARKS;
    };
    if required.len() > 1 {
        tracing::debug!(
            "Only the first language requirement ('{}') is scored; {} more ignored",
            requirement.language,
            required.len() - 1
        );
    }

    let wanted = requirement.language.to_lowercase();
    let Some(candidate) = languages
        .iter()
        .find(|l| l.language.to_lowercase() == wanted)
    else {
        return 0;
    };

    if let Some(score) = score_test_certificate(&candidate.certification, tables) {
        return score;
    }

    let held = tables.tier_ordinal(&candidate.level);
    let needed = tables.tier_ordinal(&requirement.min_level);
    if held >= needed {
        FULL_MARKS
    } else if held + 1 >= needed {
        NEAR_MISS
    } else {
        0
    }
}

/// Band score for a recognized test in the certification text.
/// `None` when no test marker is present or the marked text carries no number.
pub fn score_test_certificate(certification: &str, tables: &ScoringTables) -> Option<u8> {
    let text = certification.to_lowercase();
    let test = tables
        .language_tests
        .iter()
        .find(|t| text.contains(&t.marker))?;
    let re = match test.token {
        ScoreToken::Decimal => &*DECIMAL_RE,
        ScoreToken::Integer => &*INTEGER_RE,
    };
    let value = re.find(&text)?.as_str().parse::<f64>().ok()?;
    Some(test.score(value))
}

// ────────────────────────────────────────────────────────────────────────────
// Education, objective, bonus
// ────────────────────────────────────────────────────────────────────────────

/// Exact major → 5; same field ignoring case or a related field → 3; else 0.
pub fn score_education(education: &Education, required_major: &str, tables: &ScoringTables) -> u8 {
    if education.major == required_major {
        FULL_MARKS
    } else if tables.fields_related(&education.major, required_major) {
        NEAR_MISS
    } else {
        0
    }
}

/// Career-track tokens longer than the table's minimum, lower-cased.
pub fn career_keywords(career_track: &str, tables: &ScoringTables) -> Vec<String> {
    career_track
        .to_lowercase()
        .split_whitespace()
        .filter(|w| w.chars().count() > tables.keyword_min_len)
        .map(String::from)
        .collect()
}

pub fn score_objective(
    objective: &str,
    career_track: &str,
    matcher: &dyn TermMatcher,
    tables: &ScoringTables,
) -> u8 {
    let keywords = career_keywords(career_track, tables);
    let objective = objective.to_lowercase();
    let matched = keywords
        .iter()
        .filter(|k| matcher.contains(&objective, k))
        .count();
    let ratio = if keywords.is_empty() {
        0.0
    } else {
        matched as f64 / keywords.len() as f64
    };
    tables.objective_bands.score(ratio)
}

/// Capped count, not a quality judgement.
pub fn achievement_bonus(achievement_count: usize) -> u8 {
    achievement_count.min(MAX_ACHIEVEMENT_BONUS as usize) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::matching::{SubstringMatcher, TokenMatcher};

    fn job(duration: &str) -> WorkExperience {
        WorkExperience {
            duration: duration.to_string(),
            ..Default::default()
        }
    }

    fn skills(technical: &[&str], soft: &[&str]) -> Skills {
        Skills {
            technical: technical.iter().map(|s| s.to_string()).collect(),
            soft: soft.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn required(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn language(name: &str, level: &str, certification: &str) -> LanguageSkill {
        LanguageSkill {
            language: name.to_string(),
            level: level.to_string(),
            certification: certification.to_string(),
        }
    }

    fn needs(language: &str, level: &str) -> Vec<LanguageRequirement> {
        vec![LanguageRequirement {
            language: language.to_string(),
            min_level: level.to_string(),
        }]
    }

    // ── experience ──

    #[test]
    fn test_duration_years_and_months() {
        assert!((parse_duration_years("2 years 3 months") - 2.25).abs() < 1e-9);
    }

    #[test]
    fn test_duration_fractional_years() {
        assert!((parse_duration_years("2.5 years") - 2.5).abs() < 1e-9);
        assert!((parse_duration_years("1 Year") - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_duration_hyphen_and_months_only() {
        assert!((parse_duration_years("3-year contract") - 3.0).abs() < 1e-9);
        assert!((parse_duration_years("18 months") - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_duration_skips_non_ascii_digits() {
        assert!((parse_duration_years("٢ years, then 3 years") - 3.0).abs() < 1e-9);
        assert!((parse_duration_years("٦ months or 6 months") - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_duration_unparseable_is_zero() {
        assert_eq!(parse_duration_years("2021 - present"), 0.0);
        assert_eq!(parse_duration_years(""), 0.0);
        assert_eq!(parse_duration_years("several years"), 0.0);
    }

    #[test]
    fn test_total_is_order_independent() {
        let a = vec![job("1 year"), job("6 months"), job("2.5 years")];
        let mut b = a.clone();
        b.reverse();
        assert!((total_experience_years(&a) - 4.0).abs() < 1e-9);
        assert!((total_experience_years(&a) - total_experience_years(&b)).abs() < 1e-9);
    }

    #[test]
    fn test_experience_step_function() {
        let cv = vec![job("2 years 3 months")];
        assert_eq!(score_experience(&cv, 2.0), 5);
        assert_eq!(score_experience(&cv, 3.0), 3);
        assert_eq!(score_experience(&cv, 3.25), 3);
        assert_eq!(score_experience(&cv, 3.5), 0);
    }

    #[test]
    fn test_no_durations_scores_zero_unless_no_minimum() {
        let cv = vec![job(""), job("2019 - 2021")];
        assert_eq!(total_experience_years(&cv), 0.0);
        assert_eq!(score_experience(&cv, 0.0), 5);
        assert_eq!(score_experience(&cv, 1.0), 3);
        assert_eq!(score_experience(&cv, 2.0), 0);
        assert_eq!(score_experience(&[], 0.0), 5);
    }

    // ── skills ──

    #[test]
    fn test_skills_two_of_five_scores_two() {
        let cv = skills(&["JavaScript", "React", "Node.js"], &[]);
        let req = required(&["JavaScript", "React", "CSS", "HTML", "Git"]);
        let t = ScoringTables::default();
        assert_eq!(count_matched_skills(&cv, &req, &SubstringMatcher), 2);
        assert_eq!(score_skills(&cv, &req, &SubstringMatcher, &t), 2);
    }

    #[test]
    fn test_skills_empty_requirement_is_full() {
        let t = ScoringTables::default();
        assert_eq!(score_skills(&Skills::default(), &[], &SubstringMatcher, &t), 5);
    }

    #[test]
    fn test_skills_bidirectional_and_soft_count() {
        let cv = skills(&["ReactJS"], &["Team Leadership"]);
        let req = required(&["React", "Leadership"]);
        let t = ScoringTables::default();
        assert_eq!(score_skills(&cv, &req, &SubstringMatcher, &t), 5);
    }

    #[test]
    fn test_skills_loose_false_positive_is_kept() {
        let cv = skills(&["JavaScript"], &[]);
        let req = required(&["Java"]);
        let t = ScoringTables::default();
        assert_eq!(score_skills(&cv, &req, &SubstringMatcher, &t), 5);
        assert_eq!(score_skills(&cv, &req, &TokenMatcher, &t), 0);
    }

    #[test]
    fn test_skills_single_match_of_many_scores_one() {
        let cv = skills(&["Git"], &[]);
        let req = required(&["Git", "Docker", "Kubernetes", "Terraform", "Go"]);
        let t = ScoringTables::default();
        assert_eq!(score_skills(&cv, &req, &SubstringMatcher, &t), 1);
    }

    // ── certifications ──

    #[test]
    fn test_certifications_binary() {
        let held = vec![Certification {
            name: "AWS Certified Developer".to_string(),
            ..Default::default()
        }];
        assert_eq!(score_certifications(&held, &[], &SubstringMatcher), 5);
        assert_eq!(
            score_certifications(&held, &required(&["aws certified"]), &SubstringMatcher),
            5
        );
        assert_eq!(
            score_certifications(&held, &required(&["PMP", "CFA"]), &SubstringMatcher),
            0
        );
        assert_eq!(
            score_certifications(&[], &required(&["PMP"]), &SubstringMatcher),
            0
        );
    }

    #[test]
    fn test_certifications_one_direction_only() {
        let held = vec![Certification {
            name: "AWS".to_string(),
            ..Default::default()
        }];
        assert_eq!(
            score_certifications(&held, &required(&["AWS Certified Developer"]), &SubstringMatcher),
            0
        );
    }

    // ── languages ──

    #[test]
    fn test_language_ielts_bands() {
        let t = ScoringTables::default();
        let req = needs("English", "upper intermediate");
        let score = |cert: &str| score_languages(&[language("english", "", cert)], &req, &t);
        assert_eq!(score("IELTS 7.5"), 5);
        assert_eq!(score("IELTS 6.0"), 3);
        assert_eq!(score("IELTS 5.0"), 0);
    }

    #[test]
    fn test_language_toefl_reads_integer() {
        let t = ScoringTables::default();
        let req = needs("English", "advanced");
        let score = |cert: &str| score_languages(&[language("English", "", cert)], &req, &t);
        assert_eq!(score("TOEFL iBT 102"), 5);
        assert_eq!(score("toefl 85"), 4);
        assert_eq!(score("TOEFL 59.9"), 0);
    }

    #[test]
    fn test_language_ielts_marker_wins_over_toefl() {
        let t = ScoringTables::default();
        assert_eq!(score_test_certificate("IELTS 7.0, TOEFL 110", &t), Some(4));
        assert_eq!(score_test_certificate("TOEFL 110", &t), Some(5));
    }

    #[test]
    fn test_language_test_without_number_falls_back_to_tier() {
        let t = ScoringTables::default();
        let req = needs("English", "advanced");
        let cv = [language("English", "upper intermediate", "IELTS (pending)")];
        assert_eq!(score_languages(&cv, &req, &t), 3);
    }

    #[test]
    fn test_language_tier_comparison() {
        let t = ScoringTables::default();
        let req = needs("English", "upper intermediate");
        let score = |level: &str| score_languages(&[language("English", level, "")], &req, &t);
        assert_eq!(score("Advanced"), 5);
        assert_eq!(score("upper intermediate"), 5);
        assert_eq!(score("intermediate"), 3);
        assert_eq!(score("elementary"), 0);
        assert_eq!(score("conversational"), 0);
    }

    #[test]
    fn test_language_missing_and_empty_requirement() {
        let t = ScoringTables::default();
        let cv = [language("Japanese", "N4", "")];
        assert_eq!(score_languages(&cv, &needs("English", "beginner"), &t), 0);
        assert_eq!(score_languages(&cv, &[], &t), 5);
    }

    #[test]
    fn test_language_only_first_requirement_counts() {
        let t = ScoringTables::default();
        let mut req = needs("English", "intermediate");
        req.push(LanguageRequirement {
            language: "French".to_string(),
            min_level: "native".to_string(),
        });
        let cv = [language("English", "advanced", "")];
        assert_eq!(score_languages(&cv, &req, &t), 5);
    }

    #[test]
    fn test_language_unrecognized_requirement_is_met_by_any_level() {
        let t = ScoringTables::default();
        let cv = [language("English", "", "")];
        assert_eq!(score_languages(&cv, &needs("English", "IELTS 6.5"), &t), 5);
    }

    // ── education ──

    #[test]
    fn test_education_exact_related_none() {
        let t = ScoringTables::default();
        let edu = |major: &str| Education {
            major: major.to_string(),
            ..Default::default()
        };
        assert_eq!(score_education(&edu("Computer Science"), "Computer Science", &t), 5);
        assert_eq!(score_education(&edu("computer science"), "Computer Science", &t), 3);
        assert_eq!(score_education(&edu("Information Technology"), "Computer Science", &t), 3);
        assert_eq!(score_education(&edu("Economics"), "Finance", &t), 3);
        assert_eq!(score_education(&edu("Biology"), "Computer Science", &t), 0);
    }

    // ── objective ──

    #[test]
    fn test_career_keywords_drop_short_tokens() {
        let t = ScoringTables::default();
        assert_eq!(
            career_keywords("Technical leadership in web development", &t),
            vec!["technical", "leadership", "development"]
        );
    }

    #[test]
    fn test_objective_ratio_bands() {
        let t = ScoringTables::default();
        let track = "Technical leadership in web development";
        let m = &SubstringMatcher;
        assert_eq!(
            score_objective("Aiming for technical leadership in development teams", track, m, &t),
            5
        );
        assert_eq!(
            score_objective("I want technical leadership", track, m, &t),
            3
        );
        assert_eq!(score_objective("Become a chef", track, m, &t), 0);
    }

    #[test]
    fn test_objective_no_keywords_is_zero() {
        let t = ScoringTables::default();
        assert_eq!(score_objective("anything at all", "IT in HR", &SubstringMatcher, &t), 0);
        assert_eq!(score_objective("anything", "", &SubstringMatcher, &t), 0);
    }

    // ── bonus ──

    #[test]
    fn test_bonus_is_capped() {
        assert_eq!(achievement_bonus(0), 0);
        assert_eq!(achievement_bonus(1), 1);
        assert_eq!(achievement_bonus(5), 2);
    }
}
