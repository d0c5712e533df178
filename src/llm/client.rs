//! HTTP client for OpenAI-compatible chat completion endpoints

use crate::config::AiConfig;
use crate::error::{Result, ResumeInsightError};
use log::debug;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

/// Thin wrapper over reqwest for a single chat-completion call. Holds the
/// resolved endpoint, model, and key so callers only pass prompt text.
pub struct LlmClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl LlmClient {
    pub fn new(config: &AiConfig, api_key: Option<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ResumeInsightError::LlmService(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
        })
    }

    /// Whether a call can be attempted at all. An empty endpoint means the
    /// AI stage is configured off.
    pub fn is_configured(&self) -> bool {
        !self.endpoint.is_empty()
    }

    /// Send one system+user exchange and return the assistant's text.
    pub async fn chat(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        if !self.is_configured() {
            return Err(ResumeInsightError::LlmService(
                "No LLM endpoint configured".to_string(),
            ));
        }

        let url = format!("{}/v1/chat/completions", self.endpoint);
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_prompt },
            ],
            "temperature": 0.3,
        });

        debug!("Sending chat completion request to {}", url);

        let mut request = self.http.post(&url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ResumeInsightError::LlmService(format!(
                "LLM service returned {}: {}",
                status, detail
            )));
        }

        let parsed: ChatResponse = response.json().await?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                ResumeInsightError::LlmService("LLM response contained no choices".to_string())
            })?;

        debug!("Received {} chars from LLM", content.len());
        Ok(content)
    }
}
