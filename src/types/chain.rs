//! Chain identifiers and per-chain conventions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Supported chains.
///
/// The set is closed: adding a chain means adding a variant here, a native
/// asset row in the token table and a validator arm in `chains::accounts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainId {
    Solana,
    Ethereum,
    Polygon,
    Arbitrum,
    Optimism,
    Base,
    Near,
    Bitcoin,
    Zcash,
    Aptos,
    Sui,
    Cosmos,
    Osmosis,
    Injective,
    Celestia,
    Sei,
    Dydx,
}

/// Chain family, used to pick address and transaction conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainFamily {
    Solana,
    Evm,
    Near,
    Bitcoin,
    Aptos,
    Sui,
    Cosmos,
}

impl ChainId {
    /// Every supported chain, in declaration order.
    pub const ALL: [ChainId; 17] = [
        ChainId::Solana,
        ChainId::Ethereum,
        ChainId::Polygon,
        ChainId::Arbitrum,
        ChainId::Optimism,
        ChainId::Base,
        ChainId::Near,
        ChainId::Bitcoin,
        ChainId::Zcash,
        ChainId::Aptos,
        ChainId::Sui,
        ChainId::Cosmos,
        ChainId::Osmosis,
        ChainId::Injective,
        ChainId::Celestia,
        ChainId::Sei,
        ChainId::Dydx,
    ];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChainId::Solana => "solana",
            ChainId::Ethereum => "ethereum",
            ChainId::Polygon => "polygon",
            ChainId::Arbitrum => "arbitrum",
            ChainId::Optimism => "optimism",
            ChainId::Base => "base",
            ChainId::Near => "near",
            ChainId::Bitcoin => "bitcoin",
            ChainId::Zcash => "zcash",
            ChainId::Aptos => "aptos",
            ChainId::Sui => "sui",
            ChainId::Cosmos => "cosmos",
            ChainId::Osmosis => "osmosis",
            ChainId::Injective => "injective",
            ChainId::Celestia => "celestia",
            ChainId::Sei => "sei",
            ChainId::Dydx => "dydx",
        }
    }

    /// Family this chain belongs to.
    pub fn family(&self) -> ChainFamily {
        match self {
            ChainId::Solana => ChainFamily::Solana,
            ChainId::Ethereum
            | ChainId::Polygon
            | ChainId::Arbitrum
            | ChainId::Optimism
            | ChainId::Base => ChainFamily::Evm,
            ChainId::Near => ChainFamily::Near,
            // Zcash transparent addresses share Bitcoin's base58check layout.
            ChainId::Bitcoin | ChainId::Zcash => ChainFamily::Bitcoin,
            ChainId::Aptos => ChainFamily::Aptos,
            ChainId::Sui => ChainFamily::Sui,
            ChainId::Cosmos
            | ChainId::Osmosis
            | ChainId::Injective
            | ChainId::Celestia
            | ChainId::Sei
            | ChainId::Dydx => ChainFamily::Cosmos,
        }
    }

    /// EIP-155 chain id for EVM chains.
    pub fn evm_chain_id(&self) -> Option<u64> {
        match self {
            ChainId::Ethereum => Some(1),
            ChainId::Polygon => Some(137),
            ChainId::Arbitrum => Some(42161),
            ChainId::Optimism => Some(10),
            ChainId::Base => Some(8453),
            _ => None,
        }
    }

    /// Whether the chain accepts EIP-1559 fee-market transactions.
    pub fn supports_fee_market(&self) -> bool {
        self.family() == ChainFamily::Evm
    }

    /// Whether token addresses on this chain must be compared byte-for-byte.
    ///
    /// Hex-addressed chains are case-insensitive; base58, bech32 and NEAR
    /// account ids are not.
    pub fn address_case_sensitive(&self) -> bool {
        !matches!(self.family(), ChainFamily::Evm | ChainFamily::Aptos | ChainFamily::Sui)
    }

    /// Bech32 human-readable prefix for Cosmos-SDK chains.
    pub fn bech32_hrp(&self) -> Option<&'static str> {
        match self {
            ChainId::Cosmos => Some("cosmos"),
            ChainId::Osmosis => Some("osmo"),
            ChainId::Injective => Some("inj"),
            ChainId::Celestia => Some("celestia"),
            ChainId::Sei => Some("sei"),
            ChainId::Dydx => Some("dydx"),
            _ => None,
        }
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChainId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "solana" | "sol" => Ok(ChainId::Solana),
            "ethereum" | "eth" | "mainnet" => Ok(ChainId::Ethereum),
            "polygon" | "matic" => Ok(ChainId::Polygon),
            "arbitrum" | "arb" => Ok(ChainId::Arbitrum),
            "optimism" | "op" => Ok(ChainId::Optimism),
            "base" => Ok(ChainId::Base),
            "near" => Ok(ChainId::Near),
            "bitcoin" | "btc" => Ok(ChainId::Bitcoin),
            "zcash" | "zec" => Ok(ChainId::Zcash),
            "aptos" => Ok(ChainId::Aptos),
            "sui" => Ok(ChainId::Sui),
            "cosmos" | "cosmoshub" => Ok(ChainId::Cosmos),
            "osmosis" => Ok(ChainId::Osmosis),
            "injective" => Ok(ChainId::Injective),
            "celestia" => Ok(ChainId::Celestia),
            "sei" => Ok(ChainId::Sei),
            "dydx" => Ok(ChainId::Dydx),
            _ => Err(AppError::UnknownChain(s.to_string())),
        }
    }
}
