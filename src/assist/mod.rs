//! Best-effort AI enrichment: entry drafting and dashboard summaries.
//!
//! Every path out of this module is a displayable string. A missing API
//! key, a transport failure, or an empty model response all resolve to a
//! fixed fallback message — the assistant is never load-bearing for the
//! store, and no call is retried.

pub mod gemini;

use std::time::Duration;

use crate::config::AssistConfig;
use gemini::GeminiClient;

const DRAFT_DISABLED: &str = "<p>AI suggestions are disabled (missing API key).</p>";
const DRAFT_EMPTY: &str = "<p>Could not generate a response.</p>";
const DRAFT_FAILED: &str = "<p>Error communicating with AI service.</p>";

const SUMMARY_DISABLED: &str = "AI summary is disabled (missing API key).";
const SUMMARY_NO_ENTRIES: &str = "No entries available to summarize.";
const SUMMARY_EMPTY: &str = "Could not generate summary.";
const SUMMARY_FAILED: &str = "Error communicating with AI service to generate summary.";

/// Facade over the Gemini client. `None` inside means the assistant is
/// disabled (no API key) and every call short-circuits to its fallback.
pub struct Assistant {
    client: Option<GeminiClient>,
}

impl Assistant {
    pub fn new(config: &AssistConfig) -> Self {
        let client = if config.api_key.is_empty() {
            None
        } else {
            GeminiClient::new(
                &config.api_key,
                &config.model,
                Duration::from_secs(config.timeout_secs),
            )
            .map_err(|e| tracing::warn!(error = %e, "assistant disabled"))
            .ok()
        };
        Self { client }
    }

    /// Draft an answer body for a knowledge-base question. Returns HTML
    /// using simple tags, or a fallback message.
    pub async fn draft_answer(&self, question: &str, context: Option<&str>) -> String {
        let Some(client) = &self.client else {
            return DRAFT_DISABLED.to_string();
        };

        match client.generate(&draft_prompt(question, context)).await {
            Ok(text) if text.is_empty() => DRAFT_EMPTY.to_string(),
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "draft generation failed");
                DRAFT_FAILED.to_string()
            }
        }
    }

    /// Summarize the visible article titles in two or three sentences, or
    /// return a fallback message.
    pub async fn summarize(&self, titles: &[String]) -> String {
        let Some(client) = &self.client else {
            return SUMMARY_DISABLED.to_string();
        };
        if titles.is_empty() {
            return SUMMARY_NO_ENTRIES.to_string();
        }

        match client.generate(&summary_prompt(titles)).await {
            Ok(text) if text.is_empty() => SUMMARY_EMPTY.to_string(),
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "summary generation failed");
                SUMMARY_FAILED.to_string()
            }
        }
    }
}

fn draft_prompt(question: &str, context: Option<&str>) -> String {
    let context_line = context
        .map(|c| format!("\nContext provided: {c}\n"))
        .unwrap_or_default();
    format!(
        "You are a senior IT support specialist.\n\
         Provide a technical, concise, and professional answer (or draft) for the \
         following knowledge base entry title/question.\n\n\
         Question: {question}\n\
         {context_line}\n\
         Format the response as valid HTML using simple tags (e.g., <p>, <ul>, <ol>, \
         <li>, <strong>, <em>, <br>).\n\
         Do not include outer code fences or the <html>/<body> tags. Just the content body.\n\
         Ensure the tone is suitable for an IT knowledge base."
    )
}

fn summary_prompt(titles: &[String]) -> String {
    let listing: String = titles
        .iter()
        .map(|t| format!("- {t}\n"))
        .collect();
    format!(
        "You are an intelligent IT knowledge base assistant.\n\n\
         Analyze the following list of knowledge base article titles currently \
         visible in the dashboard:\n{listing}\n\
         Provide a high-level, concise summary (max 2-3 sentences) of the topics and \
         technical solutions available in this list. Focus on grouping common themes. \
         Do not list every single title. Keep it professional and helpful."
    )
}
