//! In-Memory Network Registry Implementation
//!
//! Implements the NetworkRegistry trait over a fixed descriptor table.

use std::collections::HashMap;

use crate::domain::gateways::NetworkRegistry;
use crate::domain::models::network::NetworkDescriptor;
use crate::shared::errors::DomainError;

use super::known_networks::{DEFAULT_CHAIN_ID, KNOWN_NETWORKS};

/// Read-only registry built once from a static descriptor table
#[derive(Debug, Clone)]
pub struct StaticNetworkRegistry {
    networks: HashMap<u64, &'static NetworkDescriptor>,
    default_network: &'static NetworkDescriptor,
}

impl StaticNetworkRegistry {
    /// Build a registry from `descriptors`, designating `default_chain_id` as default
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if any descriptor is invalid, a chain id is
    /// registered twice, or the default chain id is not among the descriptors.
    pub fn new(
        descriptors: &'static [NetworkDescriptor],
        default_chain_id: u64,
    ) -> Result<Self, DomainError> {
        let mut networks = HashMap::with_capacity(descriptors.len());

        for descriptor in descriptors {
            descriptor.validate()?;

            if networks.insert(descriptor.chain_id(), descriptor).is_some() {
                return Err(DomainError::DuplicateChainId(descriptor.chain_id()));
            }
        }

        let default_network = networks
            .get(&default_chain_id)
            .copied()
            .ok_or(DomainError::UnknownDefaultNetwork(default_chain_id))?;

        tracing::debug!(
            count = networks.len(),
            default_chain_id,
            "Network registry initialized"
        );

        Ok(Self {
            networks,
            default_network,
        })
    }

    /// Build the registry from the networks the application ships with
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if the built-in table violates a registry invariant.
    pub fn builtin() -> Result<Self, DomainError> {
        Self::new(KNOWN_NETWORKS, DEFAULT_CHAIN_ID)
    }
}

impl NetworkRegistry for StaticNetworkRegistry {
    fn lookup(&self, chain_id: i64) -> Option<&NetworkDescriptor> {
        let key = u64::try_from(chain_id).ok()?;
        self.networks.get(&key).copied()
    }

    fn default_network(&self) -> &NetworkDescriptor {
        self.default_network
    }

    fn networks(&self) -> Vec<&NetworkDescriptor> {
        let mut networks: Vec<&NetworkDescriptor> = self.networks.values().copied().collect();
        networks.sort_by_key(|n| n.chain_id());
        networks
    }
}
