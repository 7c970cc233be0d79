//! Business logic services module.

pub mod swap;
pub mod token_registry;
pub mod transfer;

pub use swap::{HttpSwapAdapter, QuoteParams, QuoteResult, SwapAdapter, SwapService};
pub use token_registry::TokenRegistry;
pub use transfer::{
    balance_deltas, balances_from_value, detect_inbound_transfer, detect_inbound_transfer_for_mint,
    parse_token_balances,
};
