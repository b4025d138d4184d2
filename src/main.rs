use anyhow::Result;
use job_analyzer::{start_web_server, AppConfig};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env();

    let default_filter = if config.debug {
        "job_analyzer=debug,rocket::server=off"
    } else {
        "job_analyzer=info,rocket::server=off"
    };

    Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new(default_filter)))
        .init();

    start_web_server(config).await
}
