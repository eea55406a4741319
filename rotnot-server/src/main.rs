// RotNot API server - food detection and recipe generation

use rotnot_server::{http, AppState, ServerConfig};
use tower_http::cors::CorsLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("Starting RotNot API...");

    let config = ServerConfig::from_env();
    config.validate().map_err(anyhow::Error::msg)?;
    info!("Model path: {}", config.model_path.display());

    let bind_addr = config.bind_addr();
    let state = AppState::new(config);

    // The browser frontend runs on a separate origin, so CORS stays open.
    let app = http::create_router(state).layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("RotNot API listening on {}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
