use anyhow::{Context, Result};

const DEFAULT_EXTRACTION_CONCURRENCY: usize = 4;

/// Application configuration loaded from environment variables.
/// The Gemini key is only demanded by commands that reach the language API.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    /// Overrides the Gemini API root, e.g. for a proxy.
    pub gemini_api_base: Option<String>,
    pub extraction_concurrency: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let extraction_concurrency = match std::env::var("EXTRACTION_CONCURRENCY") {
            Ok(raw) => raw
                .parse::<usize>()
                .context("EXTRACTION_CONCURRENCY must be a positive integer")?
                .max(1),
            Err(_) => DEFAULT_EXTRACTION_CONCURRENCY,
        };

        Ok(Config {
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()),
            gemini_api_base: std::env::var("GEMINI_API_BASE").ok().filter(|b| !b.is_empty()),
            extraction_concurrency,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Returns the Gemini API key or a descriptive error when it is not configured.
    pub fn require_api_key(&self) -> Result<&str> {
        self.gemini_api_key
            .as_deref()
            .with_context(|| "Required environment variable 'GEMINI_API_KEY' is not set".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_reported_by_name() {
        let config = Config {
            gemini_api_key: None,
            gemini_api_base: None,
            extraction_concurrency: 4,
            rust_log: "info".to_string(),
        };
        let err = config.require_api_key().unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_present_key_is_returned() {
        let config = Config {
            gemini_api_key: Some("k-123".to_string()),
            gemini_api_base: None,
            extraction_concurrency: 2,
            rust_log: "debug".to_string(),
        };
        assert_eq!(config.require_api_key().unwrap(), "k-123");
    }
}
