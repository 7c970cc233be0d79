//! Asset-related types.

use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

use crate::types::ChainId;

/// Symbolic reference to an asset on a chain.
///
/// Symbols compare case-insensitively when resolved through the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetRef {
    /// Token symbol (e.g., "USDC", "sol").
    pub symbol: String,
    /// Chain the asset lives on.
    pub chain: ChainId,
}

impl AssetRef {
    pub fn new(symbol: impl Into<String>, chain: ChainId) -> Self {
        Self { symbol: symbol.into(), chain }
    }
}

/// Canonical on-chain identity of an asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetInfo {
    /// Chain the asset lives on.
    pub chain: ChainId,
    /// Canonical token symbol.
    pub symbol: String,
    /// Human-readable name.
    pub name: String,
    /// Contract, mint or denom (None for the chain's native asset).
    pub address: Option<String>,
    /// Number of decimals.
    pub decimals: u8,
}

impl AssetInfo {
    /// Whether this is the chain's native asset.
    pub fn is_native(&self) -> bool {
        self.address.is_none()
    }

    pub fn asset_ref(&self) -> AssetRef {
        AssetRef::new(self.symbol.clone(), self.chain)
    }
}

/// Format a U256 value with decimals to a human-readable string.
pub fn format_units(value: U256, decimals: u8) -> String {
    if value == U256::ZERO {
        return "0".to_string();
    }

    let value_str = value.to_string();
    let decimals = decimals as usize;

    if decimals == 0 {
        return value_str;
    }

    let len = value_str.len();
    if len <= decimals {
        // Value is less than 1, pad with zeros
        let zeros = decimals - len;
        let decimal_part = value_str.trim_end_matches('0');
        format!("0.{}{}", "0".repeat(zeros), decimal_part)
    } else {
        let (integer, decimal) = value_str.split_at(len - decimals);
        let decimal = decimal.trim_end_matches('0');
        if decimal.is_empty() {
            integer.to_string()
        } else {
            format!("{}.{}", integer, decimal)
        }
    }
}

/// Parse a human-readable amount string to U256 with decimals.
///
/// Rejects fractional digits beyond the asset's precision instead of
/// truncating them, so a caller can never silently lose part of an amount.
pub fn parse_units(amount: &str, decimals: u8) -> Result<U256, String> {
    let amount = amount.trim();

    if amount.is_empty() {
        return Err("Amount cannot be empty".to_string());
    }

    if amount.starts_with('-') {
        return Err("Amount cannot be negative".to_string());
    }

    let decimals = decimals as usize;
    let (integer, fraction) = match amount.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (amount, ""),
    };

    if integer.is_empty() && fraction.is_empty() {
        return Err("Invalid amount format".to_string());
    }
    if !integer.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return Err(format!("Invalid amount: {}", amount));
    }
    if fraction.len() > decimals {
        return Err(format!("Amount has more than {} fractional digits", decimals));
    }

    let digits = format!("{}{}{}", integer, fraction, "0".repeat(decimals - fraction.len()));
    U256::from_str_radix(&digits, 10).map_err(|e| format!("Invalid amount: {}", e))
}
