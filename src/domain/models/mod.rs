//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod network;

pub use network::{NativeCurrency, NetworkDescriptor, NetworkDescriptorData};
