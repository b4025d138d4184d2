// src/web/handlers.rs
//! Handler bodies for the API routes. Each handler runs the fallible part
//! through anyhow, logs the full chain server-side, and converts any
//! failure into the 400 `{success: false, error}` envelope.

use anyhow::Result;
use rocket::response::status::BadRequest;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::extraction::{ContentExtractor, ExtractionRequest, InputKind};
use crate::normalizer;
use crate::providers::ProviderGateway;
use crate::web::types::*;

type ApiResult<T> = Result<Json<T>, BadRequest<Json<ErrorBody>>>;

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "Job Analyzer API is running".to_string(),
    })
}

pub async fn config_handler(config: &State<AppConfig>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        ollama: OllamaStatus {
            default_model: config.ollama.default_model.clone(),
        },
        openai: HostedStatus {
            default_model: config.openai.default_model.clone(),
            api_key_configured: config.openai.is_configured(),
        },
        deepseek: HostedStatus {
            default_model: config.deepseek.default_model.clone(),
            api_key_configured: config.deepseek.is_configured(),
        },
    })
}

pub async fn ollama_models_handler(config: &State<AppConfig>) -> ApiResult<ModelsResponse> {
    let gateway = ProviderGateway::new(config);
    match gateway.list_ollama_models().await {
        Ok(models) => Ok(Json(ModelsResponse {
            success: true,
            models,
        })),
        Err(e) => {
            error!("Failed to list Ollama models: {}", e);
            Err(BadRequest(Json(ErrorBody::new(e.to_string()))))
        }
    }
}

pub async fn extract_handler(
    request: Json<ExtractRequest>,
    config: &State<AppConfig>,
) -> ApiResult<ExtractResponse> {
    match run_extraction(request.into_inner(), config).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            error!("Job extraction failed: {:#}", e);
            Err(BadRequest(Json(ErrorBody::new(e.to_string()))))
        }
    }
}

async fn run_extraction(request: ExtractRequest, config: &AppConfig) -> Result<ExtractResponse> {
    let extractor = ContentExtractor::new(config.cors_proxy_api_key.clone());
    let content = extractor
        .extract(&ExtractionRequest {
            kind: request.input_type,
            payload: request.content,
        })
        .await?;

    let content_length = content.chars().count();
    info!(
        "Extracted {} chars of content, calling provider {}",
        content_length,
        request.provider.as_str()
    );

    let model = request.config.as_ref().and_then(|c| c.model.as_deref());
    let gateway = ProviderGateway::new(config);
    let raw_output = gateway.call(request.provider, model, &content).await?;

    let data = normalizer::normalize(&raw_output)?;

    info!(
        "Extraction complete via {}: job title {:?}",
        request.provider.as_str(),
        data.job_title
    );

    Ok(ExtractResponse {
        success: true,
        data,
        provider: request.provider.as_str(),
        content_length,
    })
}

pub async fn url_preview_handler(
    request: Json<UrlPreviewRequest>,
    config: &State<AppConfig>,
) -> ApiResult<UrlPreviewResponse> {
    match run_url_preview(request.into_inner(), config).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            error!("URL preview failed: {:#}", e);
            Err(BadRequest(Json(ErrorBody::new(e.to_string()))))
        }
    }
}

async fn run_url_preview(
    request: UrlPreviewRequest,
    config: &AppConfig,
) -> Result<UrlPreviewResponse> {
    let extractor = ContentExtractor::new(config.cors_proxy_api_key.clone());
    let content = extractor
        .extract(&ExtractionRequest {
            kind: InputKind::Url,
            payload: request.url.clone(),
        })
        .await?;

    let title = extractor
        .page_title(&request.url)
        .await
        .unwrap_or_else(|| "Job Posting".to_string());

    Ok(UrlPreviewResponse {
        success: true,
        title,
        preview: preview_snippet(&content),
        length: content.chars().count(),
        url: request.url,
    })
}

const PREVIEW_CHARS: usize = 300;

fn preview_snippet(content: &str) -> String {
    if content.chars().count() > PREVIEW_CHARS {
        let mut snippet: String = content.chars().take(PREVIEW_CHARS).collect();
        snippet.push_str("...");
        snippet
    } else {
        content.to_string()
    }
}
