// src/config.rs
//! Process-wide configuration, read from the environment exactly once at
//! startup and handed to the server as immutable managed state.

use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub ollama: OllamaConfig,
    pub openai: HostedConfig,
    pub deepseek: HostedConfig,
    pub cors_proxy_api_key: Option<String>,
    pub port: u16,
    pub debug: bool,
}

/// Local Ollama server settings
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    pub base_url: String,
    pub default_model: String,
}

/// Hosted provider settings; the key stays optional so the server can start
/// without it and report `api_key_configured: false` instead
#[derive(Debug, Clone)]
pub struct HostedConfig {
    pub api_key: Option<String>,
    pub default_model: String,
}

impl HostedConfig {
    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

impl AppConfig {
    /// Load all configuration from environment variables
    pub fn from_env() -> Self {
        let ollama_host = env::var("OLLAMA_HOST").unwrap_or_else(|_| "localhost".to_string());
        let ollama_port = env::var("OLLAMA_PORT").unwrap_or_else(|_| "11434".to_string());
        let ollama_base_url = env::var("OLLAMA_BASE_URL")
            .unwrap_or_else(|_| format!("http://{}:{}", ollama_host, ollama_port));

        Self {
            ollama: OllamaConfig {
                base_url: ollama_base_url,
                default_model: env::var("OLLAMA_DEFAULT_MODEL")
                    .unwrap_or_else(|_| "llama2".to_string()),
            },
            openai: HostedConfig {
                api_key: env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
                default_model: env::var("OPENAI_DEFAULT_MODEL")
                    .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            },
            deepseek: HostedConfig {
                api_key: env::var("DEEPSEEK_API_KEY").ok().filter(|k| !k.is_empty()),
                default_model: env::var("DEEPSEEK_DEFAULT_MODEL")
                    .unwrap_or_else(|_| "deepseek-chat".to_string()),
            },
            cors_proxy_api_key: env::var("CORS_PROXY_API_KEY").ok().filter(|k| !k.is_empty()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            debug: env::var("APP_ENV")
                .map(|v| v == "development")
                .unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hosted_config_reports_configured_state() {
        let missing = HostedConfig {
            api_key: None,
            default_model: "gpt-4o-mini".to_string(),
        };
        assert!(!missing.is_configured());

        let empty = HostedConfig {
            api_key: Some(String::new()),
            default_model: "gpt-4o-mini".to_string(),
        };
        assert!(!empty.is_configured());

        let present = HostedConfig {
            api_key: Some("sk-test".to_string()),
            default_model: "gpt-4o-mini".to_string(),
        };
        assert!(present.is_configured());
    }
}
