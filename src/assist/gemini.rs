//! Gemini `generateContent` REST transport.
//!
//! Owns request serialization, HTTP error mapping, and response decoding.
//! Fallback behavior on failure lives in the parent module — this client
//! reports errors, it does not hide them.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Thin client for one Gemini model.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: &str, model: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            client,
            api_key: api_key.to_string(),
            model: model.to_string(),
        })
    }

    /// Send one prompt and return the concatenated candidate text, which
    /// may be empty if the model returned nothing.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{API_BASE}/{}:generateContent", self.model);
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .context("request to AI service failed")?;

        anyhow::ensure!(
            response.status().is_success(),
            "AI service returned HTTP {}",
            response.status()
        );

        let decoded: GenerateContentResponse = response
            .json()
            .await
            .context("failed to decode AI service response")?;

        Ok(extract_text(&decoded))
    }
}

fn extract_text(response: &GenerateContentResponse) -> String {
    response
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .map(|p| p.text.as_str())
                .collect::<String>()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_candidate_text() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "<p>Step one."}, {"text": " Step two.</p>"}]}}
            ]
        }"#;
        let decoded: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(extract_text(&decoded), "<p>Step one. Step two.</p>");
    }

    #[test]
    fn missing_candidates_yield_empty_text() {
        let decoded: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(extract_text(&decoded), "");
    }
}
