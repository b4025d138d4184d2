// src/providers/openai.rs
use crate::errors::ProviderError;
use crate::providers::chat;

const ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Run the extraction prompt against OpenAI and return the raw completion
pub async fn extract(api_key: &str, model: &str, content: &str) -> Result<String, ProviderError> {
    chat::request_completion("OpenAI", ENDPOINT, api_key, model, content).await
}
