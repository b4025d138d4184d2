// src/errors.rs
//! Error taxonomies for the job analyzer, one enum per concern.

use thiserror::Error;

/// Errors raised while turning an input payload into plain text
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Text input was blank
    #[error("No content provided")]
    EmptyContent,

    /// URL input was blank
    #[error("No URL provided")]
    MissingUrl,

    /// PDF input was blank
    #[error("No PDF data provided")]
    MissingPdf,

    /// Direct fetch and every proxy fallback failed
    #[error("Unable to fetch content from URL")]
    UnreachableUrl,

    /// Page fetched but fewer than the minimum characters survived cleanup
    #[error("Insufficient content extracted from URL")]
    InsufficientContent,

    /// PDF parsed but contained no extractable text
    #[error("No text could be extracted from the PDF")]
    NoTextExtracted,

    /// Payload was not valid base64
    #[error("PDF processing error: {0}")]
    InvalidPayload(String),

    /// The PDF bytes could not be parsed
    #[error("PDF extraction error: {0}")]
    Pdf(String),
}

/// Errors raised by an upstream AI provider call
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("{0} request timed out")]
    Timeout(&'static str),

    #[error("Cannot connect to {0} server")]
    ConnectionRefused(&'static str),

    #[error("{provider} API error: {status}")]
    HttpStatus { provider: &'static str, status: u16 },

    #[error("Invalid {0} API key")]
    AuthInvalid(&'static str),

    #[error("{0} rate limit exceeded")]
    RateLimited(&'static str),

    #[error("{provider} API error: {detail}")]
    Api {
        provider: &'static str,
        detail: String,
    },

    #[error("{0} API key not configured in server")]
    NotConfigured(&'static str),

    #[error("Error fetching Ollama models: {0}")]
    ListFailed(String),
}

/// Errors raised while recovering a structured record from raw model output
#[derive(Error, Debug)]
pub enum NormalizationError {
    #[error("Invalid JSON response from AI: {0}")]
    InvalidJson(String),
}
