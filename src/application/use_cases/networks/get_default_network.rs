//! Get Default Network Use Case
//!
//! Returns the network used when the caller makes no explicit selection.

use std::sync::Arc;

use crate::domain::gateways::NetworkRegistry;
use crate::domain::models::network::NetworkDescriptor;

/// Use case for getting the default network
pub struct GetDefaultNetworkUseCase {
    network_registry: Arc<dyn NetworkRegistry>,
}

impl GetDefaultNetworkUseCase {
    /// Create a new GetDefaultNetworkUseCase
    #[must_use]
    pub fn new(network_registry: Arc<dyn NetworkRegistry>) -> Self {
        Self { network_registry }
    }

    /// Execute the use case
    #[must_use]
    pub fn execute(&self) -> NetworkDescriptor {
        let network = *self.network_registry.default_network();
        tracing::debug!(chain_id = network.chain_id(), "Resolved default network");
        network
    }
}
