//! Network Registry Gateway
//!
//! Read-only contract for resolving chain identifiers to network descriptors.

use crate::domain::models::network::NetworkDescriptor;

/// Registry trait for network lookups
///
/// Implementations are immutable once built, so every method is a pure
/// in-memory read that is safe to call from any number of threads.
pub trait NetworkRegistry: Send + Sync {
    /// Find the descriptor registered under `chain_id`
    ///
    /// Any integer is accepted; values that are not registered (including
    /// zero and negatives) yield `None`.
    fn lookup(&self, chain_id: i64) -> Option<&NetworkDescriptor>;

    /// Whether a descriptor is registered under `chain_id`
    fn is_supported(&self, chain_id: i64) -> bool {
        self.lookup(chain_id).is_some()
    }

    /// The network used when the caller makes no explicit selection
    fn default_network(&self) -> &NetworkDescriptor;

    /// All registered networks, sorted by chain id ascending
    fn networks(&self) -> Vec<&NetworkDescriptor>;
}
