//! Error types and handling module.
//!
//! Defines all application-specific error types and conversions.

use rmcp::ErrorData as McpError;
use thiserror::Error;

use crate::types::ChainId;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport errors talking to the swap aggregator.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Chain name not in the supported set.
    #[error("Unknown chain: {0}")]
    UnknownChain(String),

    /// Symbol/chain pair absent from the registry.
    #[error("Unknown asset: {symbol} on {chain}")]
    UnknownAsset { symbol: String, chain: ChainId },

    /// Address fails the chain's syntax rules.
    #[error("Invalid {chain} account: {address}")]
    InvalidAccount { chain: ChainId, address: String },

    /// Swap aggregator answered with a non-success status.
    #[error("Swap adapter error ({status}): {message}")]
    Adapter { status: u16, message: String },

    /// Transaction payload could not be encoded or decoded.
    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl AppError {
    /// Whether retrying the same request may succeed.
    ///
    /// Only upstream rate limiting, server-side failures and transport errors
    /// qualify; everything else is a property of the input.
    pub fn is_retryable(&self) -> bool {
        match self {
            AppError::Adapter { status, .. } => *status == 429 || *status >= 500,
            AppError::Transport(_) => true,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Transport(err.to_string())
    }
}

impl From<alloy::hex::FromHexError> for AppError {
    fn from(err: alloy::hex::FromHexError) -> Self {
        AppError::Parse(err.to_string())
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

impl From<alloy_rlp::Error> for AppError {
    fn from(err: alloy_rlp::Error) -> Self {
        AppError::Encoding(err.to_string())
    }
}

impl From<AppError> for McpError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::UnknownChain(_)
            | AppError::UnknownAsset { .. }
            | AppError::InvalidAccount { .. }
            | AppError::Parse(_)
            | AppError::Encoding(_) => McpError::invalid_params(err.to_string(), None),
            AppError::Config(_) => McpError::invalid_request(err.to_string(), None),
            _ => McpError::internal_error(err.to_string(), None),
        }
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;
