//! Command handlers: wire config, loaders, extractor, scorer and output together.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::advice::review_cv;
use crate::cli::{Commands, MatcherKind};
use crate::comparison::{candidate_label, compare_all, rank, PairwiseComparison, RankedCandidate};
use crate::config::Config;
use crate::errors::AppError;
use crate::extraction::criteria::{analyze_cv_for_field, build_field_analysis_prompt};
use crate::extraction::insights::{get_detailed_insights, CandidateInsights};
use crate::extraction::{CvExtractor, GeminiCvExtractor};
use crate::input::{load_cv_source, load_form, load_tables, read_cv_text, CvSource};
use crate::llm_client::{self, LlmClient};
use crate::models::position::PositionProfile;
use crate::output;
use crate::scoring::matching::{SubstringMatcher, TermMatcher, TokenMatcher};
use crate::scoring::{CvScorer, Report};
use crate::screening::{screen_all, screen_one};

#[derive(Serialize)]
struct ScoreOutput<'a> {
    report: &'a Report,
    #[serde(skip_serializing_if = "Option::is_none")]
    insights: Option<&'a CandidateInsights>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CompareOutput {
    reports: Vec<(String, Report)>,
    failures: Vec<(String, String)>,
    comparisons: Vec<PairwiseComparison>,
    ranking: Vec<RankedCandidate>,
}

pub async fn run(command: Commands, config: &Config) -> Result<(), AppError> {
    match command {
        Commands::Score {
            position,
            cv,
            form,
            insights,
            scoring,
            json,
        } => {
            let scorer = build_scorer(&position, scoring.matcher, scoring.tables.as_deref()).await?;
            score(config, &scorer, cv, form, insights, json).await
        }
        Commands::Compare {
            position,
            cvs,
            scoring,
            json,
        } => {
            let scorer = build_scorer(&position, scoring.matcher, scoring.tables.as_deref()).await?;
            compare(config, &scorer, &cvs, json).await
        }
        Commands::Analyze { field, cv } => analyze(config, &field, &cv).await,
        Commands::Review { cv, json } => review(config, &cv, json).await,
        Commands::Presets => {
            println!("{}", output::render_presets());
            Ok(())
        }
    }
}

fn llm_from_config(config: &Config) -> Result<LlmClient, AppError> {
    let key = config
        .require_api_key()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let mut llm = LlmClient::new(key.to_string())
        .map_err(|e| AppError::Llm(format!("Failed to build LLM client: {e}")))?;
    if let Some(base) = &config.gemini_api_base {
        llm = llm.with_base_url(base.clone());
    }
    info!("LLM client initialized (model: {})", llm_client::MODEL);
    Ok(llm)
}

async fn build_scorer(
    position: &str,
    matcher: MatcherKind,
    tables: Option<&Path>,
) -> Result<CvScorer, AppError> {
    let profile = PositionProfile::resolve(position)?;
    let matcher: Arc<dyn TermMatcher> = match matcher {
        MatcherKind::Substring => Arc::new(SubstringMatcher),
        MatcherKind::Token => Arc::new(TokenMatcher),
    };
    let mut scorer = CvScorer::new(profile).with_matcher(matcher);
    if let Some(path) = tables {
        scorer = scorer.with_tables(load_tables(path).await?);
    }
    Ok(scorer)
}

async fn score(
    config: &Config,
    scorer: &CvScorer,
    cv: Option<PathBuf>,
    form: Option<PathBuf>,
    with_insights: bool,
    json: bool,
) -> Result<(), AppError> {
    let source = match (form, cv) {
        (Some(form), _) => CvSource::Record(load_form(&form).await?),
        (None, Some(cv)) => load_cv_source(&cv).await?,
        (None, None) => {
            return Err(AppError::Validation(
                "Either --cv or --form is required".to_string(),
            ))
        }
    };

    let llm = if source.needs_extraction() || with_insights {
        Some(llm_from_config(config)?)
    } else {
        None
    };
    let extractor = llm.clone().map(GeminiCvExtractor::new);
    let candidate = screen_one(
        extractor.as_ref().map(|e| e as &dyn CvExtractor),
        scorer,
        source,
    )
    .await?;

    let position_name = &scorer.profile().position_name;
    let insights = match (&llm, with_insights) {
        (Some(llm), true) => Some(get_detailed_insights(llm, &candidate.cv, position_name).await?),
        _ => None,
    };

    if json {
        println!(
            "{}",
            output::to_json(&ScoreOutput {
                report: &candidate.report,
                insights: insights.as_ref(),
            })?
        );
    } else {
        println!("{}", output::render_report(&candidate.report, insights.as_ref()));
    }
    Ok(())
}

async fn compare(
    config: &Config,
    scorer: &CvScorer,
    cvs: &[PathBuf],
    json: bool,
) -> Result<(), AppError> {
    if cvs.len() < 2 {
        return Err(AppError::Validation(
            "compare needs at least two --cv files".to_string(),
        ));
    }

    let mut sources = Vec::with_capacity(cvs.len());
    for path in cvs {
        sources.push(load_cv_source(path).await?);
    }

    let extractor = if sources.iter().any(CvSource::needs_extraction) {
        Some(GeminiCvExtractor::new(llm_from_config(config)?))
    } else {
        None
    };

    let results = screen_all(
        extractor.as_ref().map(|e| e as &dyn CvExtractor),
        scorer,
        sources,
        config.extraction_concurrency,
    )
    .await;

    let mut reports = Vec::new();
    let mut failures = Vec::new();
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(candidate) => reports.push((candidate_label(index), candidate.report)),
            Err(e) => {
                warn!("{} ({}) was not scored: {e}", candidate_label(index), cvs[index].display());
                failures.push((candidate_label(index), e.to_string()));
            }
        }
    }
    if reports.is_empty() {
        return Err(AppError::Extraction("No CV could be scored".to_string()));
    }

    let comparisons = compare_all(&reports);
    let ranking = rank(&reports);

    if json {
        let out = CompareOutput {
            reports,
            failures,
            comparisons,
            ranking,
        };
        println!("{}", output::to_json(&out)?);
        return Ok(());
    }

    for (label, report) in &reports {
        println!("[{label}]\n{}\n", output::render_report(report, None));
    }
    for (label, error) in &failures {
        println!("[{label}] not scored: {error}\n");
    }
    if !comparisons.is_empty() {
        println!("=== PAIRWISE COMPARISON ===");
        for comparison in &comparisons {
            println!("{}", output::render_comparison(comparison));
        }
        println!();
    }
    println!("=== RANKING ===\n{}", output::render_ranking(&ranking));
    Ok(())
}

async fn analyze(config: &Config, field: &str, cv: &Path) -> Result<(), AppError> {
    let text = read_cv_text(cv).await?;
    // Resolve the field before demanding an API key.
    build_field_analysis_prompt(&text, field)?;
    let llm = llm_from_config(config)?;
    println!("{}", analyze_cv_for_field(&llm, &text, field).await?);
    Ok(())
}

async fn review(config: &Config, cv: &Path, json: bool) -> Result<(), AppError> {
    let text = read_cv_text(cv).await?;
    let llm = llm_from_config(config)?;
    let matches = review_cv(&llm, &text).await?;
    if json {
        println!("{}", output::to_json(&matches)?);
    } else {
        println!("{}", output::render_review(&matches));
    }
    Ok(())
}
