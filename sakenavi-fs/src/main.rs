//! sakenavi-fs - Sake Flavor Search Service
//!
//! Fetches the Sakenowa reference datasets once at startup, then serves the
//! region, producer, brand cascade and per-brand flavor summaries over a
//! JSON API.

use anyhow::{Context, Result};
use tracing::info;

use sakenavi_fs::services::SakenowaClient;
use sakenavi_fs::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!(
        "Starting sakenavi-fs (flavor search) v{}",
        env!("CARGO_PKG_VERSION")
    );

    let config = sakenavi_common::config::load_config()?;

    let client = SakenowaClient::new(&config.sakenowa)
        .context("Sakenowa client creation failed")?;

    info!(base_url = %config.sakenowa.base_url, "Fetching Sakenowa reference data");
    let snapshot = client
        .fetch_snapshot()
        .await
        .context("Sakenowa reference data unavailable, refusing to start")?;

    info!(
        areas = snapshot.areas().len(),
        breweries = snapshot.breweries().len(),
        brands = snapshot.brands().len(),
        flavor_charts = snapshot.flavor_chart_count(),
        "Reference snapshot ready"
    );

    let state = AppState::new(snapshot);
    let app = sakenavi_fs::build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Listening on http://{}", config.bind_addr);
    info!("Health check: http://{}/health", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
