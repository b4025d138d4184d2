// src/providers/deepseek.rs
use crate::errors::ProviderError;
use crate::providers::chat;

const ENDPOINT: &str = "https://api.deepseek.com/v1/chat/completions";

/// Run the extraction prompt against DeepSeek and return the raw completion
pub async fn extract(api_key: &str, model: &str, content: &str) -> Result<String, ProviderError> {
    chat::request_completion("DeepSeek", ENDPOINT, api_key, model, content).await
}
