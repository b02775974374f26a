//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod network;

pub use network::{
    AddEthereumChainParameterDto, NativeCurrencyDto, NetworkResponseDto, NetworkSupportDto,
    SelectNetworkQuery, SwitchEthereumChainParameterDto,
};
