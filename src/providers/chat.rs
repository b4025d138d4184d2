// src/providers/chat.rs
//! Shared client for the OpenAI-compatible chat-completion shape. OpenAI
//! and DeepSeek differ only in endpoint and label, so they share the wire
//! types, the error mapping, and the POST itself.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ProviderError;
use crate::providers::SYSTEM_PROMPT;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const MAX_TOKENS: u32 = 2000;

#[derive(Debug, Serialize)]
pub(crate) struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoice {
    pub message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: Option<String>,
}

pub(crate) fn build_request<'a>(model: &'a str, content: &str) -> ChatCompletionRequest<'a> {
    ChatCompletionRequest {
        model,
        messages: vec![
            ChatMessage {
                role: "system",
                content: SYSTEM_PROMPT.to_string(),
            },
            ChatMessage {
                role: "user",
                content: format!("Job Posting:\n{}", content),
            },
        ],
        temperature: 0.1,
        max_tokens: MAX_TOKENS,
    }
}

/// POST the extraction prompt to a chat-completion endpoint and return the
/// first choice's content.
pub(crate) async fn request_completion(
    provider: &'static str,
    endpoint: &str,
    api_key: &str,
    model: &str,
    content: &str,
) -> Result<String, ProviderError> {
    debug!("Calling {} chat completion endpoint", provider);

    let client = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_default();

    let response = client
        .post(endpoint)
        .bearer_auth(api_key)
        .json(&build_request(model, content))
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout(provider)
            } else if e.is_connect() {
                ProviderError::ConnectionRefused(provider)
            } else {
                ProviderError::Api {
                    provider,
                    detail: e.to_string(),
                }
            }
        })?;

    let status = response.status();
    match status.as_u16() {
        401 => return Err(ProviderError::AuthInvalid(provider)),
        429 => return Err(ProviderError::RateLimited(provider)),
        code if !status.is_success() => {
            let detail = response
                .text()
                .await
                .ok()
                .and_then(|body| serde_json::from_str::<ApiErrorBody>(&body).ok())
                .and_then(|body| body.error)
                .and_then(|error| error.message)
                .unwrap_or_else(|| format!("HTTP {}", code));
            return Err(ProviderError::Api { provider, detail });
        }
        _ => {}
    }

    let body: ChatCompletionResponse = response.json().await.map_err(|e| ProviderError::Api {
        provider,
        detail: e.to_string(),
    })?;

    body.choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| ProviderError::Api {
            provider,
            detail: "response contained no completion".to_string(),
        })
}
