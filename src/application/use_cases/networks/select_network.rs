//! Select Network Use Case
//!
//! Picks the network a caller should connect to: the one it asked for, or the
//! default network when it did not ask for any.

use std::sync::Arc;

use crate::domain::gateways::NetworkRegistry;
use crate::domain::models::network::NetworkDescriptor;
use crate::shared::errors::UseCaseError;

/// Use case for selecting a network with fallback to the default
pub struct SelectNetworkUseCase {
    network_registry: Arc<dyn NetworkRegistry>,
}

impl SelectNetworkUseCase {
    /// Create a new SelectNetworkUseCase
    #[must_use]
    pub fn new(network_registry: Arc<dyn NetworkRegistry>) -> Self {
        Self { network_registry }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::UnsupportedNetwork` if an explicit `chain_id` is
    /// given and not registered. An unsupported selection never falls back.
    pub fn execute(&self, chain_id: Option<i64>) -> Result<NetworkDescriptor, UseCaseError> {
        let Some(chain_id) = chain_id else {
            let network = *self.network_registry.default_network();
            tracing::debug!(chain_id = network.chain_id(), "No network requested, using default");
            return Ok(network);
        };

        self.network_registry.lookup(chain_id).copied().ok_or_else(|| {
            tracing::warn!(chain_id, "Requested network not supported");
            UseCaseError::UnsupportedNetwork(chain_id)
        })
    }
}
