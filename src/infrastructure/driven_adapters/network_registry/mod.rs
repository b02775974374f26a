//! Network Registry Adapters

pub mod in_memory;
pub mod known_networks;

pub use in_memory::StaticNetworkRegistry;
pub use known_networks::{DEFAULT_CHAIN_ID, KNOWN_NETWORKS};
