// src/extraction/mod.rs
//! Content extraction: turn a request payload (raw text, URL, or base64
//! PDF) into one plain-text string for the AI providers.

pub mod pdf;
pub mod webpage;

use reqwest::Client;
use serde::Deserialize;

use crate::errors::ExtractionError;

/// How the payload should be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    Url,
    Pdf,
}

/// One extraction job, constructed per request and discarded after use
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    pub kind: InputKind,
    pub payload: String,
}

/// Extracts plain text from any supported input kind.
///
/// Owns a pooled HTTP client with a browser-like User-Agent; only the URL
/// kind ever touches the network.
pub struct ContentExtractor {
    client: Client,
    proxy_api_key: Option<String>,
    proxy_prefixes: Vec<String>,
}

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

impl ContentExtractor {
    pub fn new(proxy_api_key: Option<String>) -> Self {
        Self::with_proxy_prefixes(proxy_api_key, webpage::default_proxy_prefixes())
    }

    /// Build an extractor with an explicit proxy fallback chain; each prefix
    /// is completed by appending the percent-encoded target URL.
    pub fn with_proxy_prefixes(proxy_api_key: Option<String>, proxy_prefixes: Vec<String>) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            proxy_api_key,
            proxy_prefixes,
        }
    }

    /// Produce a single non-empty text string, or the documented
    /// [`ExtractionError`] for the input kind. Each kind reports a blank
    /// payload with its own message; raw text passes through untouched.
    pub async fn extract(&self, request: &ExtractionRequest) -> Result<String, ExtractionError> {
        match request.kind {
            InputKind::Text => {
                if request.payload.trim().is_empty() {
                    return Err(ExtractionError::EmptyContent);
                }
                Ok(request.payload.clone())
            }
            InputKind::Url => {
                if request.payload.trim().is_empty() {
                    return Err(ExtractionError::MissingUrl);
                }
                self.extract_from_url(request.payload.trim()).await
            }
            InputKind::Pdf => {
                if request.payload.trim().is_empty() {
                    return Err(ExtractionError::MissingPdf);
                }
                pdf::extract_text(&request.payload)
            }
        }
    }
}
