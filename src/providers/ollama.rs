// src/providers/ollama.rs
//! Client for a local Ollama server: one-shot generation plus the model
//! listing used by the frontend's model picker.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ProviderError;
use crate::providers::SYSTEM_PROMPT;

const PROVIDER: &str = "Ollama";
const GENERATE_TIMEOUT: Duration = Duration::from_secs(120);
const LIST_TIMEOUT: Duration = Duration::from_secs(10);

/// Request body for `/api/generate`
#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
    options: GenerationOptions,
}

#[derive(Debug, Serialize)]
struct GenerationOptions {
    temperature: f32,
    top_p: f32,
}

#[derive(Debug, Deserialize)]
struct GenerationResponse {
    #[serde(default)]
    response: String,
}

/// One entry from `/api/tags`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub modified_at: String,
}

#[derive(Debug, Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<ModelInfo>,
}

/// Run the extraction prompt against a local model and return its raw output
pub async fn generate(base_url: &str, model: &str, content: &str) -> Result<String, ProviderError> {
    let url = format!("{}/api/generate", base_url.trim_end_matches('/'));
    let request = GenerationRequest {
        model,
        prompt: format!("{}\n\nJob Posting:\n{}", SYSTEM_PROMPT, content),
        stream: false,
        options: GenerationOptions {
            temperature: 0.1,
            top_p: 0.9,
        },
    };

    debug!("Calling Ollama generate endpoint: {}", url);

    let client = Client::builder()
        .timeout(GENERATE_TIMEOUT)
        .build()
        .unwrap_or_default();

    let response = client
        .post(&url)
        .json(&request)
        .send()
        .await
        .map_err(classify_transport_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(ProviderError::HttpStatus {
            provider: PROVIDER,
            status: status.as_u16(),
        });
    }

    let body: GenerationResponse = response.json().await.map_err(|e| ProviderError::Api {
        provider: PROVIDER,
        detail: e.to_string(),
    })?;

    Ok(body.response)
}

/// List models available on the server via `/api/tags`
pub async fn list_models(base_url: &str) -> Result<Vec<ModelInfo>, ProviderError> {
    let url = format!("{}/api/tags", base_url.trim_end_matches('/'));

    let client = Client::builder()
        .timeout(LIST_TIMEOUT)
        .build()
        .unwrap_or_default();

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| ProviderError::ListFailed(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ProviderError::ListFailed(format!(
            "Failed to fetch models: {}",
            status.as_u16()
        )));
    }

    let body: TagsResponse = response
        .json()
        .await
        .map_err(|e| ProviderError::ListFailed(e.to_string()))?;

    Ok(body.models)
}

fn classify_transport_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout(PROVIDER)
    } else if e.is_connect() {
        ProviderError::ConnectionRefused(PROVIDER)
    } else {
        ProviderError::Api {
            provider: PROVIDER,
            detail: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_request_wire_shape() {
        let request = GenerationRequest {
            model: "llama2",
            prompt: format!("{}\n\nJob Posting:\n{}", SYSTEM_PROMPT, "Welder wanted"),
            stream: false,
            options: GenerationOptions {
                temperature: 0.1,
                top_p: 0.9,
            },
        };
        let value = serde_json::to_value(&request).expect("serialize");

        assert_eq!(value["model"], "llama2");
        assert_eq!(value["stream"], false);
        let temperature = value["options"]["temperature"].as_f64().expect("number");
        assert!((temperature - 0.1).abs() < 1e-6);
        let top_p = value["options"]["top_p"].as_f64().expect("number");
        assert!((top_p - 0.9).abs() < 1e-6);
        let prompt = value["prompt"].as_str().expect("prompt is a string");
        assert!(prompt.starts_with("You are a job posting analyzer."));
        assert!(prompt.ends_with("Job Posting:\nWelder wanted"));
    }

    #[test]
    fn test_tags_response_tolerates_missing_fields() {
        let body: TagsResponse =
            serde_json::from_str(r#"{"models": [{"name": "mistral:7b"}]}"#).expect("parse");
        assert_eq!(body.models.len(), 1);
        assert_eq!(body.models[0].name, "mistral:7b");
        assert_eq!(body.models[0].size, 0);
        assert_eq!(body.models[0].modified_at, "");
    }
}
