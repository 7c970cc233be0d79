//! Token Registry service.
//!
//! Indexes the compiled-in token table by symbol and by address. The index is
//! built once per process and never mutated, so lookups need no locking.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use crate::chains::{TokenRow, TOKENS};
use crate::error::{AppError, Result};
use crate::types::{AssetInfo, AssetRef, ChainId};

// ============================================================================
// Index
// ============================================================================

/// Lookup tables over the token table.
struct IndexState {
    /// Row index by (chain, symbol_uppercase).
    by_symbol: HashMap<(ChainId, String), usize>,
    /// Row index by (chain, normalized address).
    by_address: HashMap<(ChainId, String), usize>,
    /// Row indexes per chain, in table order (native first).
    by_chain: HashMap<ChainId, Vec<usize>>,
}

impl IndexState {
    fn build(rows: &[TokenRow]) -> Self {
        let mut state = Self {
            by_symbol: HashMap::with_capacity(rows.len()),
            by_address: HashMap::with_capacity(rows.len()),
            by_chain: HashMap::new(),
        };
        for (i, row) in rows.iter().enumerate() {
            state.insert(i, row);
        }
        state
    }

    /// Insert a row into every index.
    fn insert(&mut self, i: usize, row: &TokenRow) {
        self.by_symbol.insert((row.chain, row.symbol.to_uppercase()), i);
        if let Some(address) = row.address {
            self.by_address.insert((row.chain, normalize_address(row.chain, address)), i);
        }
        self.by_chain.entry(row.chain).or_default().push(i);
    }
}

fn normalize_address(chain: ChainId, address: &str) -> String {
    if chain.address_case_sensitive() {
        address.to_string()
    } else {
        address.to_lowercase()
    }
}

// ============================================================================
// Token Registry
// ============================================================================

/// Read-only registry of known assets per chain.
///
/// Provides:
/// - symbol lookups (case-insensitive), never defaulting on a miss
/// - reverse lookups by contract/mint/denom
/// - per-chain listings with the native asset first
pub struct TokenRegistry {
    rows: &'static [TokenRow],
    index: IndexState,
}

impl TokenRegistry {
    /// Build a registry over `rows`.
    ///
    /// `rows` must hold a native row first for every chain it mentions.
    pub(crate) fn new(rows: &'static [TokenRow]) -> Self {
        Self { rows, index: IndexState::build(rows) }
    }

    /// Process-wide registry over the compiled-in table.
    pub fn global() -> &'static TokenRegistry {
        static REGISTRY: OnceLock<TokenRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            let registry = TokenRegistry::new(TOKENS);
            debug!("Indexed {} tokens across {} chains", TOKENS.len(), registry.index.by_chain.len());
            registry
        })
    }

    fn info(&self, i: usize) -> AssetInfo {
        let row = &self.rows[i];
        AssetInfo {
            chain: row.chain,
            symbol: row.symbol.to_string(),
            name: row.name.to_string(),
            address: row.address.map(str::to_string),
            decimals: row.decimals,
        }
    }

    fn find(&self, symbol: &str, chain: ChainId) -> Option<usize> {
        self.index.by_symbol.get(&(chain, symbol.trim().to_uppercase())).copied()
    }

    /// Resolve `symbol` on `chain`.
    ///
    /// # Errors
    /// [`AppError::UnknownAsset`] when the pair is not in the table.
    pub fn get_asset(&self, symbol: &str, chain: ChainId) -> Result<AssetInfo> {
        match self.find(symbol, chain) {
            Some(i) => Ok(self.info(i)),
            None => {
                debug!(symbol = %symbol, chain = %chain, "Asset not in registry");
                Err(AppError::UnknownAsset { symbol: symbol.to_string(), chain })
            }
        }
    }

    /// Resolve an [`AssetRef`].
    pub fn resolve(&self, asset: &AssetRef) -> Result<AssetInfo> {
        self.get_asset(&asset.symbol, asset.chain)
    }

    /// Decimals of `symbol` on `chain`.
    ///
    /// There is no fallback value: an unknown pair is an error.
    pub fn get_token_decimals(&self, symbol: &str, chain: ChainId) -> Result<u8> {
        self.get_asset(symbol, chain).map(|info| info.decimals)
    }

    /// Native asset of `chain`.
    ///
    /// Always `Some` for the compiled-in table; `None` only for a table that
    /// does not list `chain`.
    pub fn get_native_token(&self, chain: ChainId) -> Option<AssetInfo> {
        let first = self.index.by_chain.get(&chain)?.first()?;
        Some(self.info(*first)).filter(AssetInfo::is_native)
    }

    /// Reverse lookup by contract, mint or denom.
    ///
    /// Returns `None` for addresses not in the table, including native
    /// placeholders such as the zero address.
    pub fn get_token_by_address(&self, address: &str, chain: ChainId) -> Option<AssetInfo> {
        let key = (chain, normalize_address(chain, address.trim()));
        let found = self.index.by_address.get(&key).map(|&i| self.info(i));
        debug!(address = %address, chain = %chain, found = found.is_some(), "Reverse token lookup");
        found
    }

    /// Whether `symbol` is known on `chain`.
    pub fn is_known_token(&self, symbol: &str, chain: ChainId) -> bool {
        self.find(symbol, chain).is_some()
    }

    /// Every known asset on `chain`, native first.
    pub fn get_tokens_for_chain(&self, chain: ChainId) -> Vec<AssetInfo> {
        self.index
            .by_chain
            .get(&chain)
            .map(|rows| rows.iter().map(|&i| self.info(i)).collect())
            .unwrap_or_default()
    }

    /// Chains with at least one registered asset, in declaration order.
    pub fn supported_chains(&self) -> Vec<ChainId> {
        ChainId::ALL.into_iter().filter(|chain| self.index.by_chain.contains_key(chain)).collect()
    }
}

// ============================================================================
// Free functions over the global registry
// ============================================================================

/// Resolve `symbol` on `chain` in the global registry.
pub fn get_asset(symbol: &str, chain: ChainId) -> Result<AssetInfo> {
    TokenRegistry::global().get_asset(symbol, chain)
}

/// Decimals of `symbol` on `chain` in the global registry.
pub fn get_token_decimals(symbol: &str, chain: ChainId) -> Result<u8> {
    TokenRegistry::global().get_token_decimals(symbol, chain)
}

pub fn get_native_token(chain: ChainId) -> Option<AssetInfo> {
    TokenRegistry::global().get_native_token(chain)
}

pub fn get_token_by_address(address: &str, chain: ChainId) -> Option<AssetInfo> {
    TokenRegistry::global().get_token_by_address(address, chain)
}

pub fn is_known_token(symbol: &str, chain: ChainId) -> bool {
    TokenRegistry::global().is_known_token(symbol, chain)
}

pub fn get_tokens_for_chain(chain: ChainId) -> Vec<AssetInfo> {
    TokenRegistry::global().get_tokens_for_chain(chain)
}
