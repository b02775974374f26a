//! Network DTOs
//!
//! Data transfer objects for network API endpoints, including the parameter
//! shapes wallet providers expect for adding and switching networks.

use serde::{Deserialize, Serialize};

use crate::domain::models::network::{NativeCurrency, NetworkDescriptor};

/// Query for `GET /networks/select`
///
/// `chainId` is optional; when absent the default network is selected. The raw
/// text is parsed the same way as a path chain ID.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectNetworkQuery {
    pub chain_id: Option<String>,
}

/// Native currency DTO
#[derive(Debug, Clone, Serialize)]
pub struct NativeCurrencyDto {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

impl From<&NativeCurrency> for NativeCurrencyDto {
    fn from(currency: &NativeCurrency) -> Self {
        Self {
            name: currency.name.to_string(),
            symbol: currency.symbol.to_string(),
            decimals: currency.decimals,
        }
    }
}

/// Network response DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkResponseDto {
    pub chain_id: u64,
    pub chain_id_hex: String,
    pub name: String,
    pub native_currency: NativeCurrencyDto,
    pub rpc_urls: Vec<String>,
    pub block_explorer_urls: Vec<String>,
    pub test_net: bool,
}

impl From<&NetworkDescriptor> for NetworkResponseDto {
    fn from(network: &NetworkDescriptor) -> Self {
        Self {
            chain_id: network.chain_id(),
            chain_id_hex: network.chain_id_hex().to_string(),
            name: network.name().to_string(),
            native_currency: NativeCurrencyDto::from(network.native_currency()),
            rpc_urls: to_owned_urls(network.rpc_urls()),
            block_explorer_urls: to_owned_urls(network.block_explorer_urls()),
            test_net: network.test_net(),
        }
    }
}

impl From<NetworkDescriptor> for NetworkResponseDto {
    fn from(network: NetworkDescriptor) -> Self {
        Self::from(&network)
    }
}

/// Support check response DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSupportDto {
    pub chain_id: i64,
    pub supported: bool,
}

/// `wallet_addEthereumChain` parameter (EIP-3085)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddEthereumChainParameterDto {
    pub chain_id: String,
    pub chain_name: String,
    pub native_currency: NativeCurrencyDto,
    pub rpc_urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_explorer_urls: Option<Vec<String>>,
}

impl From<&NetworkDescriptor> for AddEthereumChainParameterDto {
    fn from(network: &NetworkDescriptor) -> Self {
        let explorers = network.block_explorer_urls();

        Self {
            chain_id: network.chain_id_hex().to_string(),
            chain_name: network.name().to_string(),
            native_currency: NativeCurrencyDto::from(network.native_currency()),
            rpc_urls: to_owned_urls(network.rpc_urls()),
            block_explorer_urls: (!explorers.is_empty()).then(|| to_owned_urls(explorers)),
        }
    }
}

/// `wallet_switchEthereumChain` parameter (EIP-3326)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchEthereumChainParameterDto {
    pub chain_id: String,
}

impl From<&NetworkDescriptor> for SwitchEthereumChainParameterDto {
    fn from(network: &NetworkDescriptor) -> Self {
        Self {
            chain_id: network.chain_id_hex().to_string(),
        }
    }
}

fn to_owned_urls(urls: &[&str]) -> Vec<String> {
    urls.iter().map(ToString::to_string).collect()
}
