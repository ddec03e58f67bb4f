//! HTTP server for the Performance Financial Engine.
//!
//! Usage: `perf-engine [CONFIG_DIR]`. The bind address is read from
//! `PERF_ENGINE_ADDR` and log filtering from `RUST_LOG`.

use std::error::Error;

use perf_engine::api::{AppState, create_router};
use perf_engine::config::ConfigLoader;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG_DIR: &str = "./config/cims";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,perf_engine=debug"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_DIR.to_string());
    let addr = std::env::var("PERF_ENGINE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir)?;
    tracing::info!(
        config_dir = %config_dir,
        engine = %config.engine().name,
        config_version = %config.engine().version,
        presets = config.config().presets().len(),
        default_preset = %config.config().default_preset(),
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(addr = %local_addr, "Listening");

    axum::serve(listener, router).await?;
    Ok(())
}
