//! Balance-diff transfer detection.
//!
//! Infers an inbound token transfer by comparing the pre- and post-execution
//! balance snapshots of a transaction. Post entries are matched to pre entries
//! by account index only; a missing pre entry counts as a zero balance.
//!
//! When several accounts are credited, the first positive delta in post order
//! is reported, not the largest. Use [`balance_deltas`] to see all of them.

use alloy::primitives::U256;
use tracing::{debug, warn};

use crate::error::{AppError, Result};
use crate::types::{BalanceEntry, DetectedTransfer};

/// Detect the first inbound transfer between two snapshots.
///
/// Returns `None` when either snapshot is absent or no balance increased.
pub fn detect_inbound_transfer(
    pre: Option<&[BalanceEntry]>,
    post: Option<&[BalanceEntry]>,
) -> Option<DetectedTransfer> {
    let (pre, post) = (pre?, post?);
    let found = positive_deltas(pre, post).next();
    debug!(detected = ?found, "Balance diff");
    found
}

/// Like [`detect_inbound_transfer`], restricted to post entries for `mint`.
pub fn detect_inbound_transfer_for_mint(
    pre: Option<&[BalanceEntry]>,
    post: Option<&[BalanceEntry]>,
    mint: &str,
) -> Option<DetectedTransfer> {
    let (pre, post) = (pre?, post?);
    positive_deltas(pre, post).find(|transfer| transfer.mint == mint)
}

/// Every positive balance change, in post order.
pub fn balance_deltas(pre: &[BalanceEntry], post: &[BalanceEntry]) -> Vec<DetectedTransfer> {
    positive_deltas(pre, post).collect()
}

fn positive_deltas<'a>(
    pre: &'a [BalanceEntry],
    post: &'a [BalanceEntry],
) -> impl Iterator<Item = DetectedTransfer> + 'a {
    post.iter().filter_map(move |entry| {
        let before = matching_pre(pre, entry).map_or(U256::ZERO, |p| p.raw_amount);
        if entry.raw_amount <= before {
            return None;
        }
        Some(DetectedTransfer {
            mint: entry.mint.clone(),
            amount: entry.raw_amount - before,
            account_index: entry.account_index,
        })
    })
}

fn matching_pre<'a>(pre: &'a [BalanceEntry], entry: &BalanceEntry) -> Option<&'a BalanceEntry> {
    pre.iter().find(|p| p.account_index == entry.account_index)
}

/// Parse a balance snapshot from JSON.
///
/// `null` yields `None`. Array elements that do not describe a balance are
/// skipped with a warning; anything other than an array or `null` is an
/// error.
pub fn parse_token_balances(json: &str) -> Result<Option<Vec<BalanceEntry>>> {
    balances_from_value(serde_json::from_str(json)?)
}

/// [`parse_token_balances`] over an already-parsed JSON value.
pub fn balances_from_value(value: serde_json::Value) -> Result<Option<Vec<BalanceEntry>>> {
    let items = match value {
        serde_json::Value::Null => return Ok(None),
        serde_json::Value::Array(items) => items,
        other => {
            return Err(AppError::Parse(format!(
                "Balance snapshot must be an array or null, got {}",
                json_kind(&other)
            )))
        }
    };

    let mut entries = Vec::with_capacity(items.len());
    for (position, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<BalanceEntry>(item) {
            Ok(entry) => entries.push(entry),
            Err(e) => warn!("Skipping malformed balance entry at position {}: {}", position, e),
        }
    }
    Ok(Some(entries))
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
