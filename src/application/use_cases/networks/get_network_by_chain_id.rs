//! Get Network By Chain ID Use Case
//!
//! Resolves a chain identifier to its network descriptor.

use std::sync::Arc;

use crate::domain::gateways::NetworkRegistry;
use crate::domain::models::network::NetworkDescriptor;
use crate::shared::errors::UseCaseError;

/// Use case for getting a network by chain ID
pub struct GetNetworkByChainIdUseCase {
    network_registry: Arc<dyn NetworkRegistry>,
}

impl GetNetworkByChainIdUseCase {
    /// Create a new GetNetworkByChainIdUseCase
    #[must_use]
    pub fn new(network_registry: Arc<dyn NetworkRegistry>) -> Self {
        Self { network_registry }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::UnsupportedNetwork` if no network is registered under `chain_id`.
    pub fn execute(&self, chain_id: i64) -> Result<NetworkDescriptor, UseCaseError> {
        tracing::debug!(chain_id, "Getting network by chain ID");

        let network = self.network_registry.lookup(chain_id).copied().ok_or_else(|| {
            tracing::warn!(chain_id, "Network not supported");
            UseCaseError::UnsupportedNetwork(chain_id)
        })?;

        tracing::debug!(chain_id, name = network.name(), "Network found");
        Ok(network)
    }
}
