//! List Supported Networks Use Case
//!
//! Retrieves every registered network, sorted by chain ID.

use std::sync::Arc;

use crate::domain::gateways::NetworkRegistry;
use crate::domain::models::network::NetworkDescriptor;

/// Use case for listing all supported networks
pub struct ListSupportedNetworksUseCase {
    network_registry: Arc<dyn NetworkRegistry>,
}

impl ListSupportedNetworksUseCase {
    /// Create a new ListSupportedNetworksUseCase
    #[must_use]
    pub fn new(network_registry: Arc<dyn NetworkRegistry>) -> Self {
        Self { network_registry }
    }

    /// Execute the use case
    #[must_use]
    pub fn execute(&self) -> Vec<NetworkDescriptor> {
        tracing::debug!("Listing supported networks");

        let networks: Vec<NetworkDescriptor> =
            self.network_registry.networks().into_iter().copied().collect();

        tracing::debug!(count = networks.len(), "Found supported networks");
        networks
    }
}
