//! Domain Layer
//!
//! Contains the network descriptor model and the registry gateway trait (port).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::network_registry::NetworkRegistry;
pub use models::network::{NativeCurrency, NetworkDescriptor, NetworkDescriptorData};
