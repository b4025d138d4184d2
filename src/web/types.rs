// src/web/types.rs
//! Wire types for the HTTP surface. Success envelopes mirror the shapes
//! the frontend already consumes; every failure is the same
//! `{success: false, error}` body with status 400.

use rocket::serde::{Deserialize, Serialize};

use crate::extraction::InputKind;
use crate::providers::{ModelInfo, ProviderKind};
use crate::types::JobPosting;

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ConfigResponse {
    pub ollama: OllamaStatus,
    pub openai: HostedStatus,
    pub deepseek: HostedStatus,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct OllamaStatus {
    pub default_model: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct HostedStatus {
    pub default_model: String,
    pub api_key_configured: bool,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ModelsResponse {
    pub success: bool,
    pub models: Vec<ModelInfo>,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct ExtractRequest {
    #[serde(default = "default_provider")]
    pub provider: ProviderKind,
    #[serde(default)]
    pub config: Option<ModelOverride>,
    #[serde(default = "default_input_type")]
    pub input_type: InputKind,
    #[serde(default)]
    pub content: String,
}

fn default_provider() -> ProviderKind {
    ProviderKind::Ollama
}

fn default_input_type() -> InputKind {
    InputKind::Text
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct ModelOverride {
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ExtractResponse {
    pub success: bool,
    pub data: JobPosting,
    pub provider: &'static str,
    pub content_length: usize,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct UrlPreviewRequest {
    #[serde(default)]
    pub url: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct UrlPreviewResponse {
    pub success: bool,
    pub title: String,
    pub preview: String,
    pub length: usize,
    pub url: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
