//! Network Domain Model
//!
//! Describes one blockchain network known to the registry.

use crate::shared::errors::DomainError;

/// Base unit of a network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeCurrency {
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
}

/// Data required to declare a NetworkDescriptor
#[derive(Debug, Clone, Copy)]
pub struct NetworkDescriptorData {
    pub chain_id: u64,
    pub chain_id_hex: &'static str,
    pub name: &'static str,
    pub native_currency: NativeCurrency,
    pub rpc_urls: &'static [&'static str],
    pub block_explorer_urls: &'static [&'static str],
    pub test_net: bool,
}

/// Immutable description of a blockchain network and how to reach it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkDescriptor {
    chain_id: u64,
    chain_id_hex: &'static str,
    name: &'static str,
    native_currency: NativeCurrency,
    rpc_urls: &'static [&'static str],
    block_explorer_urls: &'static [&'static str],
    test_net: bool,
}

impl NetworkDescriptor {
    /// Declare a descriptor. Usable in `const` context so tables can live in static memory.
    #[must_use]
    pub const fn new(data: NetworkDescriptorData) -> Self {
        Self {
            chain_id: data.chain_id,
            chain_id_hex: data.chain_id_hex,
            name: data.name,
            native_currency: data.native_currency,
            rpc_urls: data.rpc_urls,
            block_explorer_urls: data.block_explorer_urls,
            test_net: data.test_net,
        }
    }

    /// Check the descriptor's own invariants
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingRpcEndpoint` when no RPC URL is declared and
    /// `DomainError::ChainIdMismatch` when the hex id does not encode `chain_id`.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.rpc_urls.is_empty() {
            return Err(DomainError::MissingRpcEndpoint(self.chain_id));
        }

        match parse_chain_id_hex(self.chain_id_hex) {
            Ok(parsed) if parsed == self.chain_id => Ok(()),
            _ => Err(DomainError::ChainIdMismatch {
                chain_id: self.chain_id,
                chain_id_hex: self.chain_id_hex.to_string(),
            }),
        }
    }

    // Getters

    #[must_use]
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    #[must_use]
    pub fn chain_id_hex(&self) -> &'static str {
        self.chain_id_hex
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn native_currency(&self) -> &NativeCurrency {
        &self.native_currency
    }

    #[must_use]
    pub fn rpc_urls(&self) -> &'static [&'static str] {
        self.rpc_urls
    }

    /// Preferred RPC endpoint (first declared)
    #[must_use]
    pub fn preferred_rpc_url(&self) -> Option<&'static str> {
        self.rpc_urls.first().copied()
    }

    #[must_use]
    pub fn block_explorer_urls(&self) -> &'static [&'static str] {
        self.block_explorer_urls
    }

    #[must_use]
    pub fn test_net(&self) -> bool {
        self.test_net
    }
}

/// Parse a `0x`-prefixed hexadecimal chain id
///
/// # Errors
///
/// Returns `DomainError::InvalidChainId` if the prefix is missing, the digits are
/// not hexadecimal, or the value does not fit in 64 bits.
pub fn parse_chain_id_hex(raw: &str) -> Result<u64, DomainError> {
    let digits = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .ok_or_else(|| DomainError::InvalidChainId(raw.to_string()))?;

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(DomainError::InvalidChainId(raw.to_string()));
    }

    u64::from_str_radix(digits, 16).map_err(|_| DomainError::InvalidChainId(raw.to_string()))
}

/// Parse a chain id supplied by a caller: either a signed decimal integer or a
/// `0x`-prefixed hex string.
///
/// Negative and zero values are accepted here; they are simply never registered.
///
/// # Errors
///
/// Returns `DomainError::InvalidChainId` if the text is neither form or is out of
/// the signed 64-bit range.
pub fn parse_chain_id(raw: &str) -> Result<i64, DomainError> {
    let raw = raw.trim();

    if raw.starts_with("0x") || raw.starts_with("0X") {
        let value = parse_chain_id_hex(raw)?;
        return i64::try_from(value).map_err(|_| DomainError::InvalidChainId(raw.to_string()));
    }

    raw.parse::<i64>()
        .map_err(|_| DomainError::InvalidChainId(raw.to_string()))
}
