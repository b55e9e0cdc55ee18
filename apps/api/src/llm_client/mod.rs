//! LLM Client: the single point of entry for all OpenAI calls in the HR desk.
//!
//! ARCHITECTURAL RULE: No other module may call the provider directly.
//! Flows go through `gateway::CompletionGateway`, which goes through here.
//!
//! Model: gpt-4o-mini (hardcoded, not configurable)

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::gateway::Message;

/// The model used for every completion.
pub const MODEL: &str = "gpt-4o-mini";
pub const TEMPERATURE: f32 = 0.7;
pub const MAX_TOKENS: u32 = 1000;

/// A failed provider call, before classification.
///
/// `status` is the HTTP status when the provider answered; transport-level
/// failures (timeouts, refused connections) carry `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("provider error{}: {message}", status_suffix(.status))]
pub struct ProviderError {
    pub status: Option<u16>,
    pub message: String,
}

impl ProviderError {
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    fn from_transport(e: reqwest::Error) -> Self {
        let message = if e.is_timeout() {
            format!("Request timeout: {e}")
        } else if e.is_connect() || e.is_request() {
            format!("network error: {e}")
        } else if e.is_decode() {
            format!("malformed completion payload: {e}")
        } else {
            e.to_string()
        };
        Self::new(e.status().map(|s| s.as_u16()), message)
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (status {s})")).unwrap_or_default()
}

/// Body of `POST /chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: &'static str,
    pub messages: Vec<Message>,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl ChatRequest {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            model: MODEL,
            messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: Option<CompletionMessage>,
}

/// The chosen message as the provider sent it. Fields other than role and
/// content (refusal, tool calls, ...) ride along in `extra`.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionMessage {
    pub role: String,
    pub content: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// The first choice's message, if the provider sent one.
    pub fn first_message(self) -> Option<CompletionMessage> {
        self.choices.into_iter().next().and_then(|c| c.message)
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

/// A hosted chat-completion backend. Implement this to swap providers (or to
/// script responses in tests) without touching the gateway or its callers.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Whether a credential is configured. Checked before every call.
    fn has_credentials(&self) -> bool;

    /// One attempt. No retries happen here.
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ProviderError>;
}

/// OpenAI chat-completions client. Built once at startup and shared.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl LlmClient {
    pub fn new(api_key: Option<String>, base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            api_key,
        })
    }
}

#[async_trait]
impl CompletionProvider for LlmClient {
    fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::new(None, "OpenAI API key is not configured"))?;

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(ProviderError::from_transport)?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::new(
                Some(status.as_u16()),
                error_message(&body, status),
            ));
        }

        response
            .json::<ChatResponse>()
            .await
            .map_err(ProviderError::from_transport)
    }
}

/// Pulls `error.message` out of an OpenAI error body, falling back to the raw
/// body or the status reason.
fn error_message(body: &str, status: reqwest::StatusCode) -> String {
    if let Ok(parsed) = serde_json::from_str::<OpenAiError>(body) {
        return parsed.error.message;
    }
    if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unknown provider error")
            .to_string()
    } else {
        body.to_string()
    }
}
