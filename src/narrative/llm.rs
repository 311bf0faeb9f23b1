//! LLM-backed event narratives
//!
//! Supports Anthropic, OpenAI and OpenAI-compatible chat APIs.

use super::NarrativeProvider;
use crate::config::LlmConfig;
use crate::error::{EdgeError, Result};
use crate::types::{EventContext, PoliticalEvent};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub struct LlmNarrative {
    http: Client,
    provider: LlmProvider,
}

#[derive(Debug, Clone)]
pub enum LlmProvider {
    Anthropic {
        api_key: String,
        model: String,
    },
    OpenAI {
        api_key: String,
        model: String,
        base_url: String,
    },
    /// OpenAI-compatible API (Ollama, vLLM, etc.)
    Compatible {
        api_key: Option<String>,
        model: String,
        base_url: String,
    },
}

// ============ Request/Response types ============

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct OpenAIRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    choices: Vec<OpenAIChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIResponseMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponseMessage {
    content: String,
}

#[derive(Debug, Serialize)]
struct AnthropicRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<AnthropicContent>,
}

#[derive(Debug, Deserialize)]
struct AnthropicContent {
    text: String,
}

impl LlmNarrative {
    pub fn new(provider: LlmProvider) -> Result<Self> {
        let http = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self { http, provider })
    }

    pub fn from_config(config: &LlmConfig) -> Result<Self> {
        let provider = match config.provider.to_lowercase().as_str() {
            "anthropic" | "claude" => LlmProvider::Anthropic {
                api_key: config.api_key.clone(),
                model: config
                    .model
                    .clone()
                    .unwrap_or_else(|| "claude-sonnet-4-20250514".to_string()),
            },
            "openai" | "gpt" => LlmProvider::OpenAI {
                api_key: config.api_key.clone(),
                model: config.model.clone().unwrap_or_else(|| "gpt-4o-mini".to_string()),
                base_url: config
                    .base_url
                    .clone()
                    .unwrap_or_else(|| "https://api.openai.com".to_string()),
            },
            "compatible" | "custom" | "ollama" => LlmProvider::Compatible {
                api_key: if config.api_key.is_empty() {
                    None
                } else {
                    Some(config.api_key.clone())
                },
                model: config.model.clone().ok_or_else(|| {
                    EdgeError::Config("model required for compatible provider".into())
                })?,
                base_url: config.base_url.clone().ok_or_else(|| {
                    EdgeError::Config("base_url required for compatible provider".into())
                })?,
            },
            _ => {
                return Err(EdgeError::Config(format!(
                    "Unknown LLM provider: {}",
                    config.provider
                )))
            }
        };

        if matches!(
            provider,
            LlmProvider::Anthropic { .. } | LlmProvider::OpenAI { .. }
        ) && config.api_key.is_empty()
        {
            return Err(EdgeError::Config(format!(
                "api_key required for {} provider",
                config.provider
            )));
        }

        Self::new(provider)
    }

    pub fn provider(&self) -> &LlmProvider {
        &self.provider
    }

    pub(crate) fn build_prompt(event: &PoliticalEvent, context: &EventContext) -> String {
        format!(
            r#"You are a political economist advising a systematic trading desk.

Event: {}
Type: {} event from {}
Date: {}
Certainty: {:.0}%
Impact timeline: {}

Historical pattern: similar events showed {}% correlation with predicted outcomes.
Last comparable event moved the market {:+.1}%.
Key risk factor: {}

Write a 2-3 sentence assessment of the likely market impact. Plain text only."#,
            event.description,
            event.event_type,
            event.country,
            event.date,
            event.certainty * 100.0,
            event.horizon,
            context.historical_correlation,
            context.market_precedent * 100.0,
            context.risk_factor,
        )
    }

    async fn call_openai_compatible(
        &self,
        base_url: &str,
        api_key: Option<&str>,
        model: &str,
        prompt: &str,
    ) -> Result<String> {
        let request = OpenAIRequest {
            model: model.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        let mut req = self
            .http
            .post(format!("{}/v1/chat/completions", base_url.trim_end_matches('/')))
            .header("content-type", "application/json");

        if let Some(key) = api_key {
            req = req.header("Authorization", format!("Bearer {}", key));
        }

        let resp = req.json(&request).send().await?.error_for_status()?;
        let text = resp.text().await?;
        tracing::debug!("LLM raw response: {}", truncate(&text, 500));

        parse_openai_response(&text)
    }

    async fn call_anthropic(&self, api_key: &str, model: &str, prompt: &str) -> Result<String> {
        let request = AnthropicRequest {
            model: model.to_string(),
            max_tokens: 400,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        let text = self
            .http
            .post("https://api.anthropic.com/v1/messages")
            .header("x-api-key", api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        parse_anthropic_response(&text)
    }
}

fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn non_empty(text: &str, source: &str) -> Result<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(EdgeError::Api(format!("Empty response from {}", source)))
    } else {
        Ok(trimmed.to_string())
    }
}

pub(crate) fn parse_openai_response(raw: &str) -> Result<String> {
    let response: OpenAIResponse = serde_json::from_str(raw).map_err(|e| {
        EdgeError::Api(format!(
            "JSON parse error: {} - response: {}",
            e,
            truncate(raw, 200)
        ))
    })?;

    let content = response
        .choices
        .first()
        .map(|c| c.message.content.as_str())
        .unwrap_or_default();
    non_empty(content, "LLM")
}

pub(crate) fn parse_anthropic_response(raw: &str) -> Result<String> {
    let response: AnthropicResponse = serde_json::from_str(raw)?;
    let content = response
        .content
        .first()
        .map(|c| c.text.as_str())
        .unwrap_or_default();
    non_empty(content, "Anthropic")
}

#[async_trait]
impl NarrativeProvider for LlmNarrative {
    async fn describe(&self, event: &PoliticalEvent, context: &EventContext) -> Result<String> {
        let prompt = Self::build_prompt(event, context);

        match &self.provider {
            LlmProvider::Anthropic { api_key, model } => {
                self.call_anthropic(api_key, model, &prompt).await
            }
            LlmProvider::OpenAI {
                api_key,
                model,
                base_url,
            } => {
                self.call_openai_compatible(base_url, Some(api_key), model, &prompt)
                    .await
            }
            LlmProvider::Compatible {
                api_key,
                model,
                base_url,
            } => {
                self.call_openai_compatible(base_url, api_key.as_deref(), model, &prompt)
                    .await
            }
        }
    }

    fn name(&self) -> &str {
        match &self.provider {
            LlmProvider::Anthropic { .. } => "Claude",
            LlmProvider::OpenAI { .. } => "GPT",
            LlmProvider::Compatible { model, .. } => model,
        }
    }
}
