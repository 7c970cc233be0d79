//! MCP server module.
//!
//! Contains the MCP server implementation with tool handlers.

pub mod server;

pub use server::SwapAssetServer;
pub use server::{
    DetectInboundTransferInput, EncodeTransactionInput, GetAssetInput, GetSwapQuoteInput,
    GetTokenByAddressInput, ListChainTokensInput, ValidateAddressInput,
};
