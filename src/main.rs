mod core;
mod features;
mod modules;
mod shared;

use crate::core::config::Config;
use crate::features::catalog::ItemCatalogClient;
use crate::features::geodata::GeoDataClient;
use crate::features::geolocation::GeolocationProbe;
use crate::features::registration::handlers::run_form;
use crate::features::registration::SubmissionAssembler;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main())
}

async fn async_main() -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!("Configuration loaded successfully");

    // One shared HTTP client for every external collaborator
    let http_client = reqwest::Client::builder()
        .user_agent("Ecopoint/0.1 (collection-point-registration)")
        .timeout(config.backend.request_timeout)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;

    let geodata = GeoDataClient::new(&config.geodata, http_client.clone());
    let catalog_client = ItemCatalogClient::new(&config.backend, http_client.clone());
    let probe = GeolocationProbe::new(&config.geolocation, http_client.clone());
    let assembler = SubmissionAssembler::new(&config.backend, http_client);
    tracing::info!(
        "Clients initialized (backend: {}, geodata: {})",
        config.backend.base_url,
        config.geodata.base_url
    );

    run_form(&config, &geodata, &catalog_client, &probe, &assembler).await?;

    Ok(())
}
