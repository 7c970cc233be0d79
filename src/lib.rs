//! Swap Asset Core
//!
//! Asset layer of a multi-chain swap SDK.
//!
//! # Features
//!
//! - **Token Registry**: symbol/chain to address and decimals, with reverse lookups
//! - **Address Validation**: per-chain account syntax, including NEAR implicit and named accounts
//! - **Transfer Detection**: inbound transfers inferred from pre/post balance snapshots
//! - **Transaction Encoding**: RLP signing payloads for legacy and fee-market EVM transactions
//!
//! A stdio MCP server exposing these operations ships as the `swap-asset-core` binary.
//!
//! # Example
//!
//! ```rust,ignore
//! use swap_asset_core::{services::token_registry::get_token_decimals, ChainId};
//!
//! let decimals = get_token_decimals("USDC", ChainId::Solana)?;
//! assert_eq!(decimals, 6);
//! ```

pub mod chains;
pub mod config;
pub mod encoding;
pub mod error;
pub mod mcp;
pub mod services;
pub mod types;

pub use chains::{classify_address, is_valid_address, validate_address, AccountKind, REGISTRY_VERSION};
pub use config::Config;
pub use error::{AppError, Result};
pub use mcp::SwapAssetServer;
pub use services::TokenRegistry;
pub use types::*;
