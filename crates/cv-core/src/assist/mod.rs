//! External refinement cascade.
//!
//! A parse request may consult up to two language-model vendors, in order,
//! one attempt each. The first vendor whose output merges into a
//! schema-valid, non-empty record wins; every failure mode (missing key,
//! timeout, bad JSON, empty output) is logged and swallowed, and the
//! heuristic-only result is the final fallback. Nothing in this module ever
//! raises to the caller.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::AssistConfig;
use crate::merge::merge;
use crate::schema::{validate_strict_schema, StructuredCv};

pub mod gemini;
pub mod openai;
pub mod prompts;

#[derive(Debug, Error)]
pub enum AssistError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("vendor returned empty content")]
    EmptyContent,
}

/// One external structured-parse vendor. Implementations make a single
/// attempt per call — the cascade never retries.
#[async_trait]
pub trait AssistProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn parse(&self, cv_text: &str, language_hint: Option<&str>)
        -> Result<Value, AssistError>;
}

/// Builds the vendor list from configuration: Gemini first, then OpenAI.
/// A vendor without credentials is simply absent from the cascade.
pub fn providers_from_config(config: &AssistConfig) -> Vec<Box<dyn AssistProvider>> {
    let mut providers: Vec<Box<dyn AssistProvider>> = Vec::new();
    if let Some(key) = &config.gemini_api_key {
        providers.push(Box::new(gemini::GeminiProvider::new(key.clone(), config.timeout_secs)));
    }
    if let Some(key) = &config.openai_api_key {
        providers.push(Box::new(openai::OpenAiProvider::new(key.clone(), config.timeout_secs)));
    }
    providers
}

/// Runs the cascade and merges. Total: always returns a usable record.
pub async fn refine(
    heuristic: StructuredCv,
    cv_text: &str,
    language_hint: Option<&str>,
    providers: &[Box<dyn AssistProvider>],
) -> StructuredCv {
    for provider in providers {
        match provider.parse(cv_text, language_hint).await {
            Ok(external) => {
                let candidate = merge(heuristic.clone(), Some(external));
                let shape = serde_json::to_value(&candidate).unwrap_or(Value::Null);
                if validate_strict_schema(&shape) && !candidate.is_empty() {
                    debug!(provider = provider.name(), "external refinement accepted");
                    return candidate;
                }
                warn!(provider = provider.name(), "external result empty after merge, trying next");
            }
            Err(e) => {
                warn!(provider = provider.name(), error = %e, "external refinement failed");
            }
        }
    }
    merge(heuristic, None)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from vendor output.
pub(crate) fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(str::trim)
            .unwrap_or_else(|| stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(str::trim)
            .unwrap_or_else(|| stripped.trim_start())
    } else {
        text
    }
}
