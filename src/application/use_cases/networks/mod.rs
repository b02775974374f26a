//! Network Use Cases
//!
//! Read operations over the network registry.

mod check_network_support;
mod get_default_network;
mod get_network_by_chain_id;
mod list_supported_networks;
mod select_network;

pub use check_network_support::CheckNetworkSupportUseCase;
pub use get_default_network::GetDefaultNetworkUseCase;
pub use get_network_by_chain_id::GetNetworkByChainIdUseCase;
pub use list_supported_networks::ListSupportedNetworksUseCase;
pub use select_network::SelectNetworkUseCase;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::domain::gateways::NetworkRegistry;
    use crate::domain::models::network::{NativeCurrency, NetworkDescriptor, NetworkDescriptorData};

    pub const LOCAL: NetworkDescriptor = NetworkDescriptor::new(NetworkDescriptorData {
        chain_id: 31337,
        chain_id_hex: "0x7a69",
        name: "Anvil",
        native_currency: NativeCurrency {
            name: "Ether",
            symbol: "ETH",
            decimals: 18,
        },
        rpc_urls: &["http://localhost:8545"],
        block_explorer_urls: &[],
        test_net: true,
    });

    pub const SEPOLIA: NetworkDescriptor = NetworkDescriptor::new(NetworkDescriptorData {
        chain_id: 11_155_111,
        chain_id_hex: "0xaa36a7",
        name: "Sepolia",
        native_currency: NativeCurrency {
            name: "Sepolia Ether",
            symbol: "ETH",
            decimals: 18,
        },
        rpc_urls: &["https://rpc.sepolia.org"],
        block_explorer_urls: &["https://sepolia.etherscan.io"],
        test_net: true,
    });

    /// Two-network registry with `SEPOLIA` as default
    pub struct MockNetworkRegistry {
        networks: Vec<NetworkDescriptor>,
    }

    impl MockNetworkRegistry {
        pub fn new() -> Self {
            Self {
                networks: vec![LOCAL, SEPOLIA],
            }
        }
    }

    impl NetworkRegistry for MockNetworkRegistry {
        fn lookup(&self, chain_id: i64) -> Option<&NetworkDescriptor> {
            self.networks
                .iter()
                .find(|n| i64::try_from(n.chain_id()).ok() == Some(chain_id))
        }

        fn default_network(&self) -> &NetworkDescriptor {
            &self.networks[1]
        }

        fn networks(&self) -> Vec<&NetworkDescriptor> {
            self.networks.iter().collect()
        }
    }
}
