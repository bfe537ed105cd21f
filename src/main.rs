use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portfolio_store::portfolio::adapter::outgoing::FileDurableStore;
use portfolio_store::portfolio::application::services::PortfolioStore;
use portfolio_store::shared::config::PortfolioConfig;

#[cfg(not(tarpaulin_include))]
fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = PortfolioConfig::from_env().context("Invalid portfolio configuration")?;
    info!(data_dir = %config.data_dir.display(), "Opening portfolio store");

    if config.storage_quota_bytes.is_some() {
        warn!("PORTFOLIO_STORAGE_QUOTA_BYTES only applies to the in-memory store, ignoring");
    }

    let durable = FileDurableStore::new(&config.data_dir);
    let store = PortfolioStore::open(durable, config.store_settings())
        .context("Failed to open portfolio store")?;

    let view = serde_json::to_string_pretty(&store.view())
        .context("Failed to render portfolio view")?;
    println!("{view}");

    Ok(())
}
