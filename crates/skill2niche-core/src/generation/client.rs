//! HTTP client for the Google Generative AI `generateContent` endpoint.

use std::time::Duration;

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::{json, Value};

use super::{ApiError, ApiResult};

/// Default API base URL.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model used for all three generation calls.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Configuration for the Gemini client.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key; requests fail with [`ApiError::InvalidConfig`] while empty.
    pub api_key: String,
    /// Model to use (e.g., "gemini-3-flash-preview").
    pub model: String,
    /// Base URL up to and excluding `/models`.
    pub base_url: String,
    /// Whole-request timeout. `None` waits until the server answers.
    pub timeout: Option<Duration>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_API_BASE.to_string(),
            timeout: None,
        }
    }
}

/// Google error response format.
#[derive(Debug, Deserialize)]
struct GoogleError {
    code: Option<u16>,
    message: String,
    status: Option<String>,
}

/// Google error wrapper.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: GoogleError,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Prompt feedback (for blocked prompts).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// Non-streaming Google Generative AI client.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the HTTP client cannot be built.
    pub fn new(config: GeminiConfig) -> ApiResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { client, config })
    }

    /// The configured model name.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Sends a single-turn prompt and returns the concatenated response text.
    ///
    /// With `schema` set, the service is asked for `application/json` output
    /// conforming to it.
    pub async fn generate_text(&self, prompt: &str, schema: Option<&Value>) -> ApiResult<String> {
        if self.config.api_key.is_empty() {
            return Err(ApiError::InvalidConfig(
                "API key is not set (use --api-key or GEMINI_API_KEY)".to_string(),
            ));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            API_KEY_HEADER,
            HeaderValue::from_str(&self.config.api_key)
                .map_err(|_| ApiError::InvalidConfig("Invalid API key".to_string()))?,
        );

        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        );
        let body = build_request_body(prompt, schema);

        debug!("POST {url} (structured: {})", schema.is_some());
        let response = self
            .client
            .post(&url)
            .headers(headers)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            if let Ok(error_response) = serde_json::from_str::<ErrorResponse>(&text) {
                return Err(ApiError::ApiResponse {
                    status: error_response.error.code.unwrap_or(status.as_u16()),
                    message: error_response.error.message,
                    error_type: error_response.error.status,
                });
            }
            return Err(ApiError::ApiResponse {
                status: status.as_u16(),
                message: text,
                error_type: None,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)
            .map_err(|e| ApiError::Parse(format!("unexpected response envelope: {e}")))?;
        extract_text(parsed)
    }
}

fn build_request_body(prompt: &str, schema: Option<&Value>) -> Value {
    let mut body = json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": prompt }]
        }]
    });

    if let Some(schema) = schema {
        body["generationConfig"] = json!({
            "responseMimeType": "application/json",
            "responseSchema": schema,
        });
    }

    body
}

fn extract_text(response: GenerateContentResponse) -> ApiResult<String> {
    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(ApiError::Blocked(reason));
    }

    let Some(candidate) = response.candidates.into_iter().next() else {
        return Err(ApiError::EmptyResponse);
    };

    if candidate.finish_reason.as_deref() == Some("SAFETY") {
        return Err(ApiError::Blocked("SAFETY".to_string()));
    }

    Ok(candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect::<String>())
        .unwrap_or_default())
}
