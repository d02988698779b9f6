//! Batch screening: extract (when needed) and score many candidates.
//!
//! Extractions run with bounded concurrency; results come back in input
//! order. Each candidate succeeds or fails on its own.

use futures::{stream, StreamExt};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extraction::CvExtractor;
use crate::input::CvSource;
use crate::models::cv::CvRecord;
use crate::scoring::{CvScorer, Report};

/// A candidate that made it through extraction and scoring.
#[derive(Debug, Clone)]
pub struct ScreenedCandidate {
    pub cv: CvRecord,
    pub report: Report,
}

/// Runs one candidate's extract → score pipeline.
pub async fn screen_one(
    extractor: Option<&dyn CvExtractor>,
    scorer: &CvScorer,
    source: CvSource,
) -> Result<ScreenedCandidate, AppError> {
    let cv = match source {
        CvSource::Record(cv) => cv,
        CvSource::Text(text) => {
            let extractor = extractor.ok_or_else(|| {
                AppError::Validation(
                    "Raw CV text needs the language API; set GEMINI_API_KEY or supply a JSON CV"
                        .to_string(),
                )
            })?;
            extractor.extract(&text).await?
        }
    };
    let report = scorer.generate_report(&cv);
    Ok(ScreenedCandidate { cv, report })
}

/// Screens every source, at most `concurrency` extractions in flight.
/// The i-th result always belongs to the i-th source.
pub async fn screen_all(
    extractor: Option<&dyn CvExtractor>,
    scorer: &CvScorer,
    sources: Vec<CvSource>,
    concurrency: usize,
) -> Vec<Result<ScreenedCandidate, AppError>> {
    let total = sources.len();
    info!(
        "Screening {} candidate(s) for '{}' (concurrency {})",
        total,
        scorer.profile().position_name,
        concurrency.max(1)
    );

    let results: Vec<Result<ScreenedCandidate, AppError>> =
        stream::iter(sources.into_iter().enumerate())
            .map(|(index, source)| async move {
                let result = screen_one(extractor, scorer, source).await;
                if let Err(e) = &result {
                    warn!("Candidate {} of {} failed: {}", index + 1, total, e);
                }
                result
            })
            .buffered(concurrency.max(1))
            .collect()
            .await;

    let succeeded = results.iter().filter(|r| r.is_ok()).count();
    info!("Screening finished: {succeeded}/{total} scored");
    results
}
