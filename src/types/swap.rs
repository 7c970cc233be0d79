//! Swap adapter request/response types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::AssetRef;

/// Quote request sent to the swap aggregator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequest {
    /// Asset being sold.
    pub source_asset: AssetRef,
    /// Asset being bought.
    pub dest_asset: AssetRef,
    /// Amount to swap in the source asset's smallest unit (decimal string).
    pub amount: String,
    /// Sender address on the source chain.
    pub sender: String,
    /// Alternate recipient on the destination chain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stealth_receiver: Option<String>,
    /// Slippage tolerance as a percentage (e.g., 0.5 for 0.5%).
    pub slippage_tolerance: Decimal,
}

/// Quote returned by the swap aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapQuote {
    /// Expected output in the destination asset's smallest unit.
    pub expected_output: String,
    /// Estimated gas units.
    pub gas_estimate: String,
    /// Calldata to submit (hex encoded).
    pub calldata: String,
}
