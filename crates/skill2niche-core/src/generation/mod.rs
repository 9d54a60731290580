//! Generation client: prompts, response schemas and parsing.
//!
//! Three calls are made against a hosted text-generation model:
//!
//! | Call      | Response                     | Schema enforced |
//! |-----------|------------------------------|-----------------|
//! | ideas     | JSON array of idea drafts    | yes             |
//! | blueprint | JSON object                  | yes             |
//! | workflow  | opaque n8n workflow document | no              |
//!
//! Any failure is total: either the whole parsed result is returned or an
//! [`ApiError`].

mod client;
pub mod prompts;

pub use client::{GeminiClient, GeminiConfig, DEFAULT_API_BASE, DEFAULT_MODEL};

use log::debug;
use thiserror::Error;

use crate::models::{Blueprint, Idea, IdeaDraft, Niche, Profile};

/// Consecutive generated items attributed to the same niche.
pub const IDEAS_PER_NICHE: usize = 4;

/// Errors from generation calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network request failed.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error ({status}): {message}")]
    ApiResponse {
        /// HTTP status code.
        status: u16,
        /// Error message from API.
        message: String,
        /// Error status name (if provided).
        error_type: Option<String>,
    },

    /// The prompt or response was blocked by the service.
    #[error("Response blocked: {0}")]
    Blocked(String),

    /// The service returned no candidates.
    #[error("Empty response from model")]
    EmptyResponse,

    /// Failed to parse the model output into the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The request cannot be built from the given input.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for generation operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// High-level generation operations over a [`GeminiClient`].
#[derive(Debug, Clone)]
pub struct Generator {
    client: GeminiClient,
}

impl Generator {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    /// Generates ideas for the selected niches.
    ///
    /// Each item gets a fresh id and is attributed to its niche in groups of
    /// [`IDEAS_PER_NICHE`].
    pub async fn generate_ideas(&self, profile: &Profile, niches: &[Niche]) -> ApiResult<Vec<Idea>> {
        if niches.is_empty() {
            return Err(ApiError::InvalidRequest(
                "at least one niche is required".to_string(),
            ));
        }

        let prompt = prompts::idea_prompt(profile, niches);
        let text = self
            .client
            .generate_text(&prompt, Some(&prompts::idea_schema()))
            .await?;
        let ideas = parse_ideas(&text, niches)?;
        debug!("Generated {} ideas for {} niches", ideas.len(), niches.len());
        Ok(ideas)
    }

    /// Generates a blueprint for one idea.
    pub async fn generate_blueprint(&self, idea: &Idea, profile: &Profile) -> ApiResult<Blueprint> {
        let prompt = prompts::blueprint_prompt(idea, profile);
        let text = self
            .client
            .generate_text(&prompt, Some(&prompts::blueprint_schema()))
            .await?;
        parse_blueprint(&text)
    }

    /// Generates an importable workflow document for one idea.
    ///
    /// The text is returned trimmed and otherwise untouched.
    pub async fn generate_workflow_json(&self, idea: &Idea) -> ApiResult<String> {
        let prompt = prompts::workflow_prompt(idea);
        let text = self.client.generate_text(&prompt, None).await?;
        let text = text.trim().to_string();
        if serde_json::from_str::<serde_json::Value>(&text).is_err() {
            debug!("Workflow document for idea {} is not strict JSON", idea.id);
        }
        Ok(text)
    }
}

/// Parses an idea-list response and attributes each item to a niche.
pub fn parse_ideas(text: &str, niches: &[Niche]) -> ApiResult<Vec<Idea>> {
    let body = strip_code_fence(text);
    let body = if body.is_empty() { "[]" } else { body };
    let drafts: Vec<IdeaDraft> = serde_json::from_str(body)
        .map_err(|e| ApiError::Parse(format!("idea list: {e}")))?;
    Ok(assign_niches(drafts, niches))
}

/// Parses a blueprint response. Empty text is a parse error.
pub fn parse_blueprint(text: &str) -> ApiResult<Blueprint> {
    let body = strip_code_fence(text);
    let body = if body.is_empty() { "{}" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Parse(format!("blueprint: {e}")))
}

/// Turns drafts into ideas: item `i` belongs to
/// `niches[(i / IDEAS_PER_NICHE) % niches.len()]`.
///
/// Returns no ideas when `niches` is empty.
pub fn assign_niches(drafts: Vec<IdeaDraft>, niches: &[Niche]) -> Vec<Idea> {
    if niches.is_empty() {
        return Vec::new();
    }
    drafts
        .into_iter()
        .enumerate()
        .map(|(idx, draft)| {
            let niche = &niches[(idx / IDEAS_PER_NICHE) % niches.len()];
            Idea::from_draft(draft, niche.id.clone())
        })
        .collect()
}

// Models occasionally wrap JSON in a markdown fence despite the mime type.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map_or(trimmed, str::trim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn drafts(n: usize) -> Vec<IdeaDraft> {
        (0..n)
            .map(|i| IdeaDraft {
                title: format!("Idea {i}"),
                problem_statement: "p".to_string(),
                outcome: "o".to_string(),
                monetization_model: "Retainer".to_string(),
                target_client: "c".to_string(),
                icp_descriptions: vec![],
                outreach_angles: vec![],
            })
            .collect()
    }

    #[test]
    fn test_two_niches_eight_items() {
        let niches = vec![
            catalog::find_niche("1").unwrap(),
            catalog::find_niche("2").unwrap(),
        ];
        let ideas = assign_niches(drafts(8), &niches);

        let ids: Vec<&str> = ideas.iter().map(|i| i.niche_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "1", "1", "1", "2", "2", "2", "2"]);
    }

    #[test]
    fn test_assignment_wraps_when_fewer_niches_than_groups() {
        let niches = vec![
            catalog::find_niche("3").unwrap(),
            catalog::find_niche("5").unwrap(),
        ];
        let ideas = assign_niches(drafts(10), &niches);

        assert_eq!(ideas[8].niche_id, "3");
        assert_eq!(ideas[9].niche_id, "3");
    }

    #[test]
    fn test_assignment_with_no_niches_is_empty() {
        assert!(assign_niches(drafts(3), &[]).is_empty());
    }

    #[test]
    fn test_parse_ideas_empty_text_is_empty_list() {
        let niches = vec![catalog::find_niche("1").unwrap()];
        assert!(parse_ideas("  ", &niches).unwrap().is_empty());
    }

    #[test]
    fn test_parse_ideas_rejects_malformed_json() {
        let niches = vec![catalog::find_niche("1").unwrap()];
        assert!(matches!(
            parse_ideas("not json", &niches),
            Err(ApiError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_ideas_rejects_missing_required_field() {
        let niches = vec![catalog::find_niche("1").unwrap()];
        let text = r#"[{"title": "only a title"}]"#;
        assert!(parse_ideas(text, &niches).is_err());
    }

    #[test]
    fn test_parse_blueprint_empty_text_fails() {
        assert!(matches!(parse_blueprint(""), Err(ApiError::Parse(_))));
    }

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("```json\n[1]\n```"), "[1]");
        assert_eq!(strip_code_fence("```\n{}\n```"), "{}");
        assert_eq!(strip_code_fence(" [2] "), "[2]");
    }
}
