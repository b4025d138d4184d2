// src/lib.rs
pub mod config;
pub mod errors;
pub mod extraction;
pub mod normalizer;
pub mod providers;
pub mod types;
pub mod web;

pub use config::AppConfig;
pub use web::start_web_server;
