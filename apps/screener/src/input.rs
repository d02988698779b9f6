//! CV and form loading from disk.
//!
//! `.json` files are structured CV records; `.pdf` files go through PDF text
//! extraction; anything else is read as plain text for the extractor.

use std::path::Path;

use tokio::fs;
use tracing::debug;

use crate::errors::AppError;
use crate::models::cv::CvRecord;
use crate::models::form::CvForm;
use crate::scoring::tables::ScoringTables;

/// One candidate as handed to the screening pipeline.
#[derive(Debug, Clone)]
pub enum CvSource {
    /// Already structured; scored directly.
    Record(CvRecord),
    /// Raw CV text; needs extraction first.
    Text(String),
}

impl CvSource {
    pub fn needs_extraction(&self) -> bool {
        matches!(self, CvSource::Text(_))
    }
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default()
}

/// Loads one CV file into a record or raw text, by extension.
pub async fn load_cv_source(path: &Path) -> Result<CvSource, AppError> {
    if extension(path) == "json" {
        let text = fs::read_to_string(path).await?;
        let record = CvRecord::from_json_str(&text).map_err(|e| match e {
            AppError::Validation(msg) => {
                AppError::Validation(format!("{}: {msg}", path.display()))
            }
            other => other,
        })?;
        debug!("Loaded structured CV from {}", path.display());
        return Ok(CvSource::Record(record));
    }
    Ok(CvSource::Text(read_cv_text(path).await?))
}

/// Reads a CV file as text. PDFs are converted; other files are read verbatim.
pub async fn read_cv_text(path: &Path) -> Result<String, AppError> {
    let text = if extension(path) == "pdf" {
        let bytes = fs::read(path).await?;
        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            AppError::Extraction(format!(
                "Failed to extract text from PDF '{}': {e}",
                path.display()
            ))
        })?
    } else {
        fs::read_to_string(path).await?
    };

    if text.trim().is_empty() {
        return Err(AppError::Validation(format!(
            "CV file '{}' contains no text",
            path.display()
        )));
    }
    debug!("Read {} characters from {}", text.len(), path.display());
    Ok(text)
}

/// Loads a JSON form submission and converts it into a CV record.
pub async fn load_form(path: &Path) -> Result<CvRecord, AppError> {
    let text = fs::read_to_string(path).await?;
    let form: CvForm = serde_json::from_str(&text)?;
    form.into_record()
}

/// Loads scoring tables; keys absent from the file keep their defaults.
pub async fn load_tables(path: &Path) -> Result<ScoringTables, AppError> {
    let text = fs::read_to_string(path).await?;
    serde_json::from_str(&text).map_err(|e| {
        AppError::Validation(format!("Invalid scoring tables '{}': {e}", path.display()))
    })
}
