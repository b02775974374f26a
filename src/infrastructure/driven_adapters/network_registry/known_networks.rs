//! Built-in Network Table
//!
//! The networks the application ships with.

use crate::domain::models::network::{NativeCurrency, NetworkDescriptor, NetworkDescriptorData};

pub const HARDHAT_LOCAL: NetworkDescriptor = NetworkDescriptor::new(NetworkDescriptorData {
    chain_id: 1337,
    chain_id_hex: "0x539",
    name: "Hardhat Local",
    native_currency: NativeCurrency {
        name: "Ether",
        symbol: "ETH",
        decimals: 18,
    },
    rpc_urls: &["http://127.0.0.1:8545"],
    block_explorer_urls: &[],
    test_net: true,
});

pub const MONAD_TESTNET: NetworkDescriptor = NetworkDescriptor::new(NetworkDescriptorData {
    chain_id: 10143,
    chain_id_hex: "0x279f",
    name: "Monad Testnet",
    native_currency: NativeCurrency {
        name: "Monad",
        symbol: "MON",
        decimals: 18,
    },
    rpc_urls: &["https://testnet-rpc.monad.xyz"],
    block_explorer_urls: &["https://testnet.monadexplorer.com"],
    test_net: true,
});

/// Every network the registry is populated with at start-up
pub static KNOWN_NETWORKS: &[NetworkDescriptor] = &[HARDHAT_LOCAL, MONAD_TESTNET];

/// Chain id of the network used when no explicit selection is made
pub const DEFAULT_CHAIN_ID: u64 = 10143;
