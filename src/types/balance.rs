//! Ledger balance snapshot types.
//!
//! Snapshots arrive in the shape a ledger RPC reports pre/post token balances.
//! Two layouts are accepted:
//!
//! - flat: `{"accountIndex": 1, "mint": "...", "amount": "123", "decimals": 6}`
//! - Solana RPC: `{"accountIndex": 1, "mint": "...", "uiTokenAmount": {"amount": "123", "decimals": 6}}`
//!
//! Raw amounts are decimal strings and are parsed straight into [`U256`];
//! they never pass through a float or a 64-bit integer.

use alloy::primitives::U256;
use serde::{Deserialize, Serialize, Serializer};

/// One token-account balance at a snapshot point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawBalanceEntry")]
pub struct BalanceEntry {
    /// Index of the account in the transaction's account list.
    pub account_index: u32,
    /// Mint (Solana) or contract identifier of the token.
    pub mint: String,
    /// Balance in the token's smallest unit.
    #[serde(rename = "amount", serialize_with = "serialize_decimal")]
    pub raw_amount: U256,
    /// Decimals reported alongside the balance.
    pub decimals: u8,
}

impl BalanceEntry {
    pub fn new(account_index: u32, mint: impl Into<String>, raw_amount: U256, decimals: u8) -> Self {
        Self { account_index, mint: mint.into(), raw_amount, decimals }
    }
}

/// Net positive balance change inferred from two snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedTransfer {
    /// Mint or contract that was credited.
    pub mint: String,
    /// Credited amount in the token's smallest unit.
    #[serde(serialize_with = "serialize_decimal")]
    pub amount: U256,
    /// Account index of the credited post-balance entry.
    pub account_index: u32,
}

/// Amount block of the Solana RPC token balance shape.
#[derive(Debug, Clone, Deserialize)]
struct UiTokenAmount {
    amount: String,
    decimals: u8,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBalanceEntry {
    account_index: u32,
    #[serde(alias = "contract")]
    mint: String,
    #[serde(default)]
    amount: Option<String>,
    #[serde(default)]
    decimals: Option<u8>,
    #[serde(default)]
    ui_token_amount: Option<UiTokenAmount>,
}

impl TryFrom<RawBalanceEntry> for BalanceEntry {
    type Error = String;

    fn try_from(raw: RawBalanceEntry) -> Result<Self, Self::Error> {
        let (amount, decimals) = match (raw.ui_token_amount, raw.amount, raw.decimals) {
            (Some(ui), _, _) => (ui.amount, ui.decimals),
            (None, Some(amount), Some(decimals)) => (amount, decimals),
            _ => {
                return Err(format!(
                    "balance entry {} for {} has no amount/decimals",
                    raw.account_index, raw.mint
                ))
            }
        };

        Ok(Self {
            account_index: raw.account_index,
            raw_amount: parse_raw_amount(&amount)?,
            mint: raw.mint,
            decimals,
        })
    }
}

/// Parse a raw on-chain amount given as a base-10 string.
///
/// Only ASCII digits are accepted; signs, exponents and `0x` prefixes are
/// rejected.
pub fn parse_raw_amount(amount: &str) -> Result<U256, String> {
    let amount = amount.trim();
    if amount.is_empty() || !amount.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("Invalid raw amount: '{}'", amount));
    }
    U256::from_str_radix(amount, 10).map_err(|e| format!("Invalid raw amount '{}': {}", amount, e))
}

fn serialize_decimal<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_string())
}
