// src/web/mod.rs
//! HTTP surface: route declarations, CORS fairing, error catchers, and the
//! server entry point. Handler bodies live in `handlers`.

pub mod handlers;
pub mod types;

pub use types::*;

use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::response::status::BadRequest;
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Request, Response, State};
use tracing::info;

use crate::config::AppConfig;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

#[get("/health")]
pub async fn health() -> Json<HealthResponse> {
    handlers::health_handler().await
}

#[get("/config")]
pub async fn get_config(config: &State<AppConfig>) -> Json<ConfigResponse> {
    handlers::config_handler(config).await
}

#[post("/ollama/models")]
pub async fn ollama_models(
    config: &State<AppConfig>,
) -> Result<Json<ModelsResponse>, BadRequest<Json<ErrorBody>>> {
    handlers::ollama_models_handler(config).await
}

#[post("/extract", data = "<request>")]
pub async fn extract(
    request: Json<ExtractRequest>,
    config: &State<AppConfig>,
) -> Result<Json<ExtractResponse>, BadRequest<Json<ErrorBody>>> {
    handlers::extract_handler(request, config).await
}

#[post("/url-preview", data = "<request>")]
pub async fn url_preview(
    request: Json<UrlPreviewRequest>,
    config: &State<AppConfig>,
) -> Result<Json<UrlPreviewResponse>, BadRequest<Json<ErrorBody>>> {
    handlers::url_preview_handler(request, config).await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers

#[rocket::catch(404)]
pub fn not_found() -> Json<ErrorBody> {
    Json(ErrorBody::new("Resource not found"))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<serde_json::Value> {
    // Generic on purpose: nothing internal leaks past this point
    Json(serde_json::json!({"error": "Internal server error"}))
}

// Main server start function
pub async fn start_web_server(config: AppConfig) -> Result<()> {
    info!("Starting Job Analyzer API server");
    info!("Ollama: {}", config.ollama.base_url);
    info!(
        "OpenAI key configured: {}, DeepSeek key configured: {}",
        config.openai.is_configured(),
        config.deepseek.is_configured()
    );
    info!("Server: http://0.0.0.0:{}", config.port);

    let figment = rocket::Config::figment()
        .merge(("port", config.port))
        .merge(("address", "0.0.0.0"));

    let _rocket = rocket::custom(figment)
        .attach(Cors)
        .manage(config)
        .register("/", catchers![not_found, internal_error])
        .mount(
            "/api",
            routes![health, get_config, ollama_models, extract, url_preview, options],
        )
        .launch()
        .await?;

    Ok(())
}
