//! Network Registry API - Main Entry Point

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use validator::Validate;

use network_registry::domain::gateways::NetworkRegistry;
use network_registry::infrastructure::driven_adapters::config::AppConfig;
use network_registry::infrastructure::driven_adapters::network_registry::StaticNetworkRegistry;
use network_registry::infrastructure::driving_adapters::api_rest::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "network_registry=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    config.validate()?;
    tracing::info!(
        api_base_url = config.environment.api_base_url.as_deref().unwrap_or("<unset>"),
        signer_configured = config.has_signer(),
        "Configuration loaded successfully"
    );

    // Build the registry once; it is read-only from here on
    let network_registry: Arc<dyn NetworkRegistry> = Arc::new(StaticNetworkRegistry::builtin()?);
    let default_network = network_registry.default_network();
    tracing::info!(
        networks = network_registry.networks().len(),
        default_chain_id = default_network.chain_id(),
        default_network = default_network.name(),
        "Network registry ready"
    );

    // Build router
    let app = api_rest::router(AppState::new(network_registry));

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
