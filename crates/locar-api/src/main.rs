//! # locar-api — Binary Entry Point
//!
//! Starts the Axum HTTP server. Binds to `PORT` (default 8080).

use locar_lookup::{LookupClient, LookupConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let config = LookupConfig::from_env().map_err(|e| {
        tracing::error!("Invalid lookup configuration: {e}");
        e
    })?;
    tracing::info!(?config, "lookup providers configured");
    let lookup = LookupClient::new(config)?;

    let app = locar_api::app(locar_api::AppState::new(lookup));

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("locar API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
