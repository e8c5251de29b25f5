use anyhow::Context;
use car_chooser::config::Config;
use car_chooser::dataset::loader::load_dataset;
use car_chooser::server::build_router;
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    // 1. Dataset (fail fast):
    let dataset = load_dataset(&config.data, config.row_limit)
        .with_context(|| format!("cannot load listings from {}", config.data.display()))?;
    if dataset.is_empty() {
        tracing::warn!("Dataset is empty, every search will return no results");
    }

    // 2. HTTP Router:
    let settings = config.search_settings();
    tracing::info!(
        "Ranking: {}, deduplication: {}",
        settings.ranking,
        if settings.dedup { "on" } else { "off" }
    );
    let app = build_router(Arc::new(dataset), settings);

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
