//! AI-written listing summaries
//!
//! Summaries are an optional enrichment: every failure collapses to a
//! fixed sentence so the original description always renders.

use std::time::Duration;

use async_trait::async_trait;
use nearby_core::Space;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, instrument, warn};

use crate::error::{Error, Result};

/// Shown when the service is reachable but produced nothing usable
pub const FALLBACK_SUMMARY: &str =
    "Experience luxury and convenience in this meticulously curated space.";

/// Shown when no API key is configured
pub const MISSING_KEY_SUMMARY: &str = "AI Summary unavailable: API Key not configured.";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    pub api_key: Option<String>,
    pub model: String,
    /// Base URL of the generative language API
    pub endpoint: String,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.5-flash".to_string(),
            endpoint: "https://generativelanguage.googleapis.com".to_string(),
        }
    }
}

/// Anything that can write a promotional blurb for a listing
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Never fails; returns a fallback sentence instead
    async fn summarize(&self, space: &Space) -> String;
}

/// Copywriting prompt for a listing
pub fn build_prompt(space: &Space) -> String {
    format!(
        "You are a high-end real estate copywriter.\n\
         Write a short, punchy, and persuasive summary (max 50 words) for a space rental listing.\n\
         Highlight the unique selling points based on this data:\n\
         Title: {}\n\
         Category: {}\n\
         Location: {}\n\
         Amenities: {}\n\
         Description: {}\n\
         \n\
         Tone: Sophisticated, inviting, and professional.",
        space.title,
        space.category,
        space.location,
        space.amenities.join(", "),
        space.description,
    )
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateResponse {
    fn text(self) -> Option<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .filter_map(|p| p.text)
            .collect();

        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

/// Client for the Gemini `generateContent` endpoint
pub struct GeminiClient {
    client: reqwest::Client,
    config: SummaryConfig,
}

impl GeminiClient {
    pub fn new(config: SummaryConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client, config })
    }

    pub fn has_api_key(&self) -> bool {
        self.config
            .api_key
            .as_deref()
            .is_some_and(|k| !k.trim().is_empty())
    }

    /// Send `prompt` and return the generated text, if any
    #[instrument(skip(self, prompt), fields(model = %self.config.model))]
    pub async fn generate(&self, prompt: &str) -> Result<Option<String>> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(Error::NotConfigured("summary API key"))?;

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        );
        let body = json!({ "contents": [{ "parts": [{ "text": prompt }] }] });

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        debug!("Summary generated");
        Ok(parsed.text())
    }
}

#[async_trait]
impl SummaryProvider for GeminiClient {
    async fn summarize(&self, space: &Space) -> String {
        if !self.has_api_key() {
            return MISSING_KEY_SUMMARY.to_string();
        }

        match self.generate(&build_prompt(space)).await {
            Ok(Some(text)) => text,
            Ok(None) => FALLBACK_SUMMARY.to_string(),
            Err(e) => {
                warn!(space_id = %space.id, error = %e, "Summary request failed");
                FALLBACK_SUMMARY.to_string()
            }
        }
    }
}

/// Provider used when summaries are switched off
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSummary;

#[async_trait]
impl SummaryProvider for NoSummary {
    async fn summarize(&self, _space: &Space) -> String {
        MISSING_KEY_SUMMARY.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::serve_once;
    use nearby_core::seed;

    fn client(endpoint: String, api_key: Option<&str>) -> GeminiClient {
        GeminiClient::new(SummaryConfig {
            api_key: api_key.map(str::to_string),
            endpoint,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_prompt_mentions_listing() {
        let space = seed::spaces().remove(1);
        let prompt = build_prompt(&space);
        assert!(prompt.contains("Title: The Industrial Loft Event Hall"));
        assert!(prompt.contains("Category: Event Spaces"));
        assert!(prompt.contains("Catering Kitchen, Projector System"));
        assert!(prompt.contains("max 50 words"));
    }

    #[tokio::test]
    async fn test_missing_key() {
        let client = client("http://127.0.0.1:9".to_string(), None);
        let space = seed::spaces().remove(0);
        assert_eq!(client.summarize(&space).await, MISSING_KEY_SUMMARY);
        assert!(matches!(
            client.generate("hi").await,
            Err(Error::NotConfigured(_))
        ));
    }

    #[tokio::test]
    async fn test_generated_text_returned() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"A sunlit loft "},{"text":"for bold launches."}]}}]}"#;
        let (base, request) = serve_once(200, body).await;
        let client = client(base, Some("test-key"));

        let summary = client.summarize(&seed::spaces().remove(1)).await;
        assert_eq!(summary, "A sunlit loft for bold launches.");

        let request = request.await.unwrap();
        assert!(request.starts_with("POST /v1beta/models/gemini-2.5-flash:generateContent?key=test-key"));
        assert!(request.contains("Industrial Loft"));
    }

    #[tokio::test]
    async fn test_api_error_falls_back() {
        let (base, _request) = serve_once(500, r#"{"error":"boom"}"#).await;
        let client = client(base, Some("test-key"));
        assert_eq!(
            client.summarize(&seed::spaces().remove(0)).await,
            FALLBACK_SUMMARY
        );
    }

    #[tokio::test]
    async fn test_empty_candidates_fall_back() {
        let (base, _request) = serve_once(200, r#"{"candidates":[]}"#).await;
        let client = client(base, Some("test-key"));
        assert_eq!(
            client.summarize(&seed::spaces().remove(0)).await,
            FALLBACK_SUMMARY
        );
    }

    #[tokio::test]
    async fn test_no_summary_provider() {
        assert_eq!(
            NoSummary.summarize(&seed::spaces().remove(0)).await,
            MISSING_KEY_SUMMARY
        );
    }
}
