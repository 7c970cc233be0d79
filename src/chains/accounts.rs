//! Per-chain account and address validation.
//!
//! Every validator is a total predicate over a string: it never panics and
//! never errors. [`validate_address`] wraps the predicate for callers that
//! want an [`AppError::InvalidAccount`] instead of a boolean.

use alloy::primitives::Address;
use bitcoin::bech32::{primitives::decode::CheckedHrpstring, Bech32};
use bitcoin::{address::NetworkUnchecked, Network};
use serde::Serialize;

use crate::{
    chains::near,
    error::{AppError, Result},
    types::ChainId,
};

/// Outcome of classifying an address string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    /// NEAR implicit (public-key derived) account.
    Implicit,
    /// NEAR human-readable account.
    Named,
    /// Syntactically valid address on a chain without account kinds.
    Valid,
    Invalid,
}

impl AccountKind {
    pub fn is_valid(&self) -> bool {
        !matches!(self, AccountKind::Invalid)
    }
}

/// Address syntax rules, one variant per address scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressValidator {
    Near,
    Evm,
    Solana,
    Bitcoin,
    Zcash,
    Aptos,
    Sui,
    Cosmos { hrp: &'static str },
}

impl AddressValidator {
    /// Select the validator for a chain.
    pub fn for_chain(chain: ChainId) -> Self {
        match chain {
            ChainId::Near => AddressValidator::Near,
            ChainId::Ethereum
            | ChainId::Polygon
            | ChainId::Arbitrum
            | ChainId::Optimism
            | ChainId::Base => AddressValidator::Evm,
            ChainId::Solana => AddressValidator::Solana,
            ChainId::Bitcoin => AddressValidator::Bitcoin,
            ChainId::Zcash => AddressValidator::Zcash,
            ChainId::Aptos => AddressValidator::Aptos,
            ChainId::Sui => AddressValidator::Sui,
            ChainId::Cosmos => AddressValidator::Cosmos { hrp: "cosmos" },
            ChainId::Osmosis => AddressValidator::Cosmos { hrp: "osmo" },
            ChainId::Injective => AddressValidator::Cosmos { hrp: "inj" },
            ChainId::Celestia => AddressValidator::Cosmos { hrp: "celestia" },
            ChainId::Sei => AddressValidator::Cosmos { hrp: "sei" },
            ChainId::Dydx => AddressValidator::Cosmos { hrp: "dydx" },
        }
    }

    /// Classify `address` under this validator's rules.
    pub fn classify(&self, address: &str) -> AccountKind {
        match self {
            AddressValidator::Near => {
                if near::is_implicit_account(address) {
                    AccountKind::Implicit
                } else if near::is_named_account(address) {
                    AccountKind::Named
                } else {
                    AccountKind::Invalid
                }
            }
            AddressValidator::Evm => valid_if(is_evm_address(address)),
            AddressValidator::Solana => valid_if(is_solana_address(address)),
            AddressValidator::Bitcoin => valid_if(is_bitcoin_address(address)),
            AddressValidator::Zcash => valid_if(is_zcash_address(address)),
            AddressValidator::Aptos => valid_if(is_hex_account(address, 1, 64)),
            AddressValidator::Sui => valid_if(is_hex_account(address, 64, 64)),
            AddressValidator::Cosmos { hrp } => valid_if(is_cosmos_address(address, hrp)),
        }
    }

    pub fn is_valid(&self, address: &str) -> bool {
        self.classify(address).is_valid()
    }
}

fn valid_if(ok: bool) -> AccountKind {
    if ok {
        AccountKind::Valid
    } else {
        AccountKind::Invalid
    }
}

/// Classify `address` on `chain`.
pub fn classify_address(chain: ChainId, address: &str) -> AccountKind {
    AddressValidator::for_chain(chain).classify(address)
}

/// Whether `address` is syntactically valid on `chain`.
pub fn is_valid_address(chain: ChainId, address: &str) -> bool {
    classify_address(chain, address).is_valid()
}

/// Classify `address`, failing with [`AppError::InvalidAccount`] when invalid.
pub fn validate_address(chain: ChainId, address: &str) -> Result<AccountKind> {
    match classify_address(chain, address) {
        AccountKind::Invalid => {
            tracing::debug!(chain = %chain, address = %address, "Rejected address");
            Err(AppError::InvalidAccount { chain, address: address.to_string() })
        }
        kind => Ok(kind),
    }
}

// ============================================================================
// EVM
// ============================================================================

/// `0x` + 40 hex characters; mixed-case input must carry a valid EIP-55 checksum.
pub fn is_evm_address(address: &str) -> bool {
    let Some(hex) = address.strip_prefix("0x") else {
        return false;
    };
    if hex.len() != 40 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return false;
    }

    let has_lower = hex.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = hex.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return Address::parse_checksummed(address, None).is_ok();
    }
    true
}

// ============================================================================
// Solana
// ============================================================================

/// Base58 string decoding to a 32-byte public key.
pub fn is_solana_address(address: &str) -> bool {
    if !(32..=44).contains(&address.len()) {
        return false;
    }
    bs58::decode(address).into_vec().is_ok_and(|bytes| bytes.len() == 32)
}

// ============================================================================
// UTXO chains
// ============================================================================

const ZEC_T1_VERSION: [u8; 2] = [0x1c, 0xb8];
const ZEC_T3_VERSION: [u8; 2] = [0x1c, 0xbd];
const ZEC_SAPLING_HRP: &str = "zs";
const ZEC_SAPLING_LEN: usize = 43;

/// Legacy base58check (P2PKH/P2SH) or segwit bech32/bech32m mainnet address.
pub fn is_bitcoin_address(address: &str) -> bool {
    address
        .parse::<bitcoin::Address<NetworkUnchecked>>()
        .is_ok_and(|parsed| parsed.require_network(Network::Bitcoin).is_ok())
}

/// Classic (non-`m`) bech32 string, returned as lowercase hrp and payload bytes.
fn decode_bech32(address: &str) -> Option<(String, Vec<u8>)> {
    let checked = CheckedHrpstring::new::<Bech32>(address).ok()?;
    Some((checked.hrp().to_lowercase(), checked.byte_iter().collect()))
}

/// Transparent (`t1`/`t3`) or Sapling shielded (`zs1`) Zcash address.
pub fn is_zcash_address(address: &str) -> bool {
    if address.starts_with("zs1") {
        return decode_bech32(address)
            .is_some_and(|(hrp, payload)| hrp == ZEC_SAPLING_HRP && payload.len() == ZEC_SAPLING_LEN);
    }

    match bs58::decode(address).with_check(None).into_vec() {
        Ok(payload) => {
            payload.len() == 22 && (payload[..2] == ZEC_T1_VERSION || payload[..2] == ZEC_T3_VERSION)
        }
        Err(_) => false,
    }
}

// ============================================================================
// Move chains
// ============================================================================

/// `0x` followed by between `min` and `max` hex characters.
fn is_hex_account(address: &str, min: usize, max: usize) -> bool {
    address.strip_prefix("0x").is_some_and(|hex| {
        (min..=max).contains(&hex.len()) && hex.bytes().all(|b| b.is_ascii_hexdigit())
    })
}

// ============================================================================
// Cosmos SDK
// ============================================================================

/// Bech32 account with the chain's prefix and a 20- or 32-byte payload.
pub fn is_cosmos_address(address: &str, hrp: &str) -> bool {
    decode_bech32(address)
        .is_some_and(|(prefix, payload)| prefix == hrp && matches!(payload.len(), 20 | 32))
}
