//! Chat-completion collaborator
//!
//! The match orchestrator only needs "system prompt + user prompt in, text
//! out". The [`ChatClient`] trait keeps it decoupled from any vendor wire
//! format; [`OpenAiChatClient`] implements it against the OpenAI
//! chat-completions endpoint (or any compatible server via the base URL).

use crate::config::ChatConfig;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

const COMPLETIONS_PATH: &str = "/v1/chat/completions";
const CHAT_TIMEOUT_SECS: u64 = 30;

/// An interface for sending chat-style prompts to a language model and
/// receiving text responses.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Sends a `system` context message followed by a `user` prompt and
    /// returns the assistant's response text.
    async fn complete(&self, system: &str, user: &str) -> Result<String, AppError>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Minimal subset of the chat-completions response we care about.
#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// HTTP client for the OpenAI chat-completions API
pub struct OpenAiChatClient {
    http: Client,
    api_key: String,
    model: String,
    max_tokens: u32,
    url: String,
}

impl OpenAiChatClient {
    /// Creates a new chat client from the chat section of the configuration
    pub fn new(config: &ChatConfig) -> Self {
        let url = format!("{}{}", config.base_url.trim_end_matches('/'), COMPLETIONS_PATH);

        Self {
            http: Client::builder()
                .user_agent(USER_AGENT)
                .timeout(Duration::from_secs(CHAT_TIMEOUT_SECS))
                .build()
                .expect("Failed to create HTTP client"),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            url,
        }
    }
}

#[async_trait]
impl ChatClient for OpenAiChatClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, AppError> {
        let request = ChatRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
        };

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::ChatCompletion(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Chat API returned {status}: {body}");
            return Err(AppError::ChatCompletion(format!("API returned {status}")));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::ChatCompletion(format!("failed to parse response: {e}")))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AppError::ChatCompletion("response carried no choices".to_string()))
    }
}
