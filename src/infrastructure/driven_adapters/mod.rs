//! Driven Adapters
//!
//! Implementations of gateway traits and external concerns:
//! - The built-in network registry
//! - Configuration

pub mod config;
pub mod network_registry;

pub use config::AppConfig;
pub use network_registry::StaticNetworkRegistry;
