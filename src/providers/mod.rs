// src/providers/mod.rs
//! AI provider gateway.
//!
//! The provider set is closed and small, so dispatch is a plain enum match
//! over three fixed call strategies rather than any plugin machinery:
//! - Ollama: local generation server
//! - OpenAI: hosted chat-completion API
//! - DeepSeek: hosted chat-completion API, OpenAI-compatible shape

pub mod chat;
pub mod deepseek;
pub mod ollama;
pub mod openai;

use serde::Deserialize;

use crate::config::AppConfig;
use crate::errors::ProviderError;

pub use ollama::ModelInfo;

/// The extraction instruction every provider is held to. Frozen: the
/// response-normalization contract depends on this exact wording.
pub const SYSTEM_PROMPT: &str = r#"You are a job posting analyzer. Extract key information from the following job posting and return it as a valid JSON object with these fields:

{
  "jobTitle": "string",
  "company": "string",
  "location": "string",
  "workType": "string (remote/hybrid/onsite)",
  "employmentType": "string (full-time/part-time/contract)",
  "contractType": "string (ex: 'A durée indéterminée', 'Intérimaire', 'A durée déterminée', 'Contrat de remplacement', 'Autonome', 'Apprentissage', etc. ou null si non mentionné)",
  "salaryRange": {
    "min": "number or null",
    "max": "number or null",
    "currency": "string"
  },
  "experience": {
    "yearsRequired": "number or null",
    "level": "string (entry/mid/senior/executive)"
  },
  "skills": ["array of required skills"],
  "qualifications": ["array of required qualifications"],
  "driverLicense": "string (Code Permis de conduire / Libellé permis, ou null si non mentionné)",
  "educationLevel": "string ( null si non mentionné)",
  "benefits": ["array of benefits mentioned"],
  "department": "string",
  "industry": "string",
  "description": "string (brief summary)"
}

Return only the JSON object, no additional text or formatting."#;

/// Supported providers, as named on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Ollama,
    OpenAi,
    DeepSeek,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Ollama => "ollama",
            ProviderKind::OpenAi => "openai",
            ProviderKind::DeepSeek => "deepseek",
        }
    }
}

/// Request-scoped facade over the three call strategies.
///
/// Holds nothing but a borrow of the process configuration; each call
/// builds its own client with the timeout that operation needs.
pub struct ProviderGateway<'a> {
    config: &'a AppConfig,
}

impl<'a> ProviderGateway<'a> {
    pub fn new(config: &'a AppConfig) -> Self {
        Self { config }
    }

    /// Send the extraction prompt plus `content` to the selected provider
    /// and return its raw textual output.
    ///
    /// `model` overrides the configured default when present. Hosted
    /// providers fail with [`ProviderError::NotConfigured`] before any
    /// network I/O when no credential is configured.
    pub async fn call(
        &self,
        provider: ProviderKind,
        model: Option<&str>,
        content: &str,
    ) -> Result<String, ProviderError> {
        match provider {
            ProviderKind::Ollama => {
                let model = model.unwrap_or(&self.config.ollama.default_model);
                ollama::generate(&self.config.ollama.base_url, model, content).await
            }
            ProviderKind::OpenAi => {
                let api_key = self
                    .config
                    .openai
                    .api_key
                    .as_deref()
                    .filter(|k| !k.is_empty())
                    .ok_or(ProviderError::NotConfigured("OpenAI"))?;
                let model = model.unwrap_or(&self.config.openai.default_model);
                openai::extract(api_key, model, content).await
            }
            ProviderKind::DeepSeek => {
                let api_key = self
                    .config
                    .deepseek
                    .api_key
                    .as_deref()
                    .filter(|k| !k.is_empty())
                    .ok_or(ProviderError::NotConfigured("DeepSeek"))?;
                let model = model.unwrap_or(&self.config.deepseek.default_model);
                deepseek::extract(api_key, model, content).await
            }
        }
    }

    /// List models available on the configured Ollama server
    pub async fn list_ollama_models(&self) -> Result<Vec<ModelInfo>, ProviderError> {
        ollama::list_models(&self.config.ollama.base_url).await
    }
}
