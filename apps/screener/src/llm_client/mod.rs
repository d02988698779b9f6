/// LLM Client: the single point of entry for all Gemini API calls in the screener.
///
/// No other module may call the generative-language API directly.
/// Extraction, insights, field analysis and CV review all go through here.
///
/// Model: gemini-1.5-flash (hardcoded, not configurable)
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for all LLM calls.
pub const MODEL: &str = "gemini-1.5-flash";
const MAX_OUTPUT_TOKENS: u32 = 4096;
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("LLM response contained no JSON object")]
    MissingJson,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl LlmResponse {
    /// Extracts the text of the first part of the first candidate.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.iter().find_map(|p| p.text.as_deref()))
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// The single LLM client used by every collaborator that needs the language API.
/// Wraps Gemini `generateContent` with retry logic and structured output helpers.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()?;
        Ok(Self {
            client,
            api_key,
            base_url: GEMINI_API_BASE.to_string(),
        })
    }

    /// Points the client at a different API root (proxies, local gateways).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            MODEL
        )
    }

    /// Makes a raw call to the Gemini API, returning the full response object.
    /// Retries on 429 (rate limit) and 5xx errors with exponential backoff.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<LlmResponse, LlmError> {
        let request_body = GenerateRequest {
            system_instruction: Content {
                role: None,
                parts: vec![RequestPart { text: system }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let url = self.endpoint();
        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&url)
                .query(&[("key", self.api_key.as_str())])
                .header("content-type", "application/json")
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<GeminiError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let llm_response: LlmResponse = response.json().await?;

            if let Some(usage) = &llm_response.usage_metadata {
                debug!(
                    "LLM call succeeded: prompt_tokens={}, output_tokens={}",
                    usage.prompt_token_count, usage.candidates_token_count
                );
            }

            return Ok(llm_response);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }

    /// Calls the LLM and returns the text of the first candidate.
    pub async fn call_text(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        let response = self.call(prompt, system).await?;
        response
            .text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }

    /// Calls the LLM and deserializes the JSON object embedded in its text response.
    /// The prompt must instruct the model to return a JSON object.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
    ) -> Result<T, LlmError> {
        let text = self.call_text(prompt, system).await?;
        parse_json_payload(&text)
    }
}

/// Parses the JSON object carried by an LLM text response.
/// Tolerates code fences and prose around the object.
pub fn parse_json_payload<T: DeserializeOwned>(text: &str) -> Result<T, LlmError> {
    let object = extract_json_object(strip_json_fences(text)).ok_or(LlmError::MissingJson)?;
    serde_json::from_str(object).map_err(LlmError::Parse)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

/// Returns the span from the first `{` to the last `}`.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}
