//! Check Network Support Use Case

use std::sync::Arc;

use crate::domain::gateways::NetworkRegistry;

/// Use case answering whether a chain ID is supported
pub struct CheckNetworkSupportUseCase {
    network_registry: Arc<dyn NetworkRegistry>,
}

impl CheckNetworkSupportUseCase {
    /// Create a new CheckNetworkSupportUseCase
    #[must_use]
    pub fn new(network_registry: Arc<dyn NetworkRegistry>) -> Self {
        Self { network_registry }
    }

    /// Execute the use case. Never fails.
    #[must_use]
    pub fn execute(&self, chain_id: i64) -> bool {
        let supported = self.network_registry.is_supported(chain_id);
        tracing::debug!(chain_id, supported, "Checked network support");
        supported
    }
}
