//! Swap quote service.
//!
//! Resolves symbolic assets through the registry, converts the human amount
//! with the registry's decimals, validates the participating addresses and
//! forwards a [`SwapRequest`] to a [`SwapAdapter`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    chains::validate_address,
    config::Config,
    error::{AppError, Result},
    services::TokenRegistry,
    types::{format_units, parse_raw_amount, parse_units, AssetRef, SwapQuote, SwapRequest},
};

/// Upper bound of the slippage tolerance, in percent.
const MAX_SLIPPAGE_PERCENT: u32 = 50;

// ============================================================================
// Adapter
// ============================================================================

/// Client of an external swap aggregator.
#[async_trait]
pub trait SwapAdapter: Send + Sync {
    /// Request a quote for `request`.
    ///
    /// # Errors
    /// [`AppError::Adapter`] when the aggregator answers with a non-success
    /// status, [`AppError::Transport`] when it cannot be reached.
    async fn quote(&self, request: &SwapRequest) -> Result<SwapQuote>;
}

/// [`SwapAdapter`] speaking JSON over HTTP.
///
/// `POST {base_url}/quote` with the request as body.
#[derive(Clone)]
pub struct HttpSwapAdapter {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpSwapAdapter {
    /// Create a new adapter.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(base_url: &str, api_key: Option<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_string(), api_key })
    }

    /// Build an adapter from configuration, or `None` when no endpoint is set.
    pub fn from_config(config: &Config) -> Result<Option<Self>> {
        config
            .swap_api_url
            .as_deref()
            .map(|url| Self::new(url, config.swap_api_key.clone(), config.swap_api_timeout))
            .transpose()
    }

    pub fn quote_url(&self) -> String {
        format!("{}/quote", self.base_url)
    }
}

#[async_trait]
impl SwapAdapter for HttpSwapAdapter {
    async fn quote(&self, request: &SwapRequest) -> Result<SwapQuote> {
        let url = self.quote_url();
        tracing::info!(url = %url, "Requesting swap quote");

        let mut builder = self.client.post(&url).json(request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Swap adapter rejected quote request");
            tracing::debug!(body = %truncate(&body, MAX_LOGGED_BODY), "Swap adapter error body");
            return Err(adapter_error(status));
        }

        response
            .json::<SwapQuote>()
            .await
            .map_err(|e| AppError::Parse(format!("Failed to parse swap quote: {}", e)))
    }
}

const MAX_LOGGED_BODY: usize = 256;

/// Error for a non-success status, carrying its reason phrase.
fn adapter_error(status: reqwest::StatusCode) -> AppError {
    AppError::Adapter {
        status: status.as_u16(),
        message: status.canonical_reason().unwrap_or("Unknown status").to_string(),
    }
}

fn truncate(text: &str, max_chars: usize) -> &str {
    text.char_indices().nth(max_chars).map_or(text, |(end, _)| &text[..end])
}

// ============================================================================
// Service
// ============================================================================

/// Parameters of a quote in human terms.
#[derive(Debug, Clone)]
pub struct QuoteParams {
    pub source: AssetRef,
    pub dest: AssetRef,
    /// Human-readable amount of the source asset (e.g., "1.5").
    pub amount: String,
    pub sender: String,
    pub stealth_receiver: Option<String>,
    /// Percentage, 0 to 50.
    pub slippage_tolerance: Decimal,
}

/// Quote together with the request that produced it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResult {
    pub request: SwapRequest,
    pub quote: SwapQuote,
    /// Expected output in destination units (e.g., "1520.25").
    pub expected_output_formatted: String,
}

/// Service for obtaining swap quotes.
#[derive(Clone)]
pub struct SwapService {
    adapter: Arc<dyn SwapAdapter>,
    registry: &'static TokenRegistry,
}

impl SwapService {
    /// Create a new swap service over the global registry.
    pub fn new(adapter: Arc<dyn SwapAdapter>) -> Self {
        Self { adapter, registry: TokenRegistry::global() }
    }

    /// Validate `params`, build the adapter request and fetch a quote.
    pub async fn quote(&self, params: QuoteParams) -> Result<QuoteResult> {
        let request = self.build_request(&params)?;
        tracing::info!(
            source = %params.source.symbol,
            source_chain = %params.source.chain,
            dest = %params.dest.symbol,
            dest_chain = %params.dest.chain,
            amount = %request.amount,
            "Quoting swap"
        );

        let quote = self.adapter.quote(&request).await?;

        let dest = self.registry.resolve(&params.dest)?;
        let expected = parse_raw_amount(&quote.expected_output).map_err(AppError::Parse)?;
        let expected_output_formatted = format_units(expected, dest.decimals);

        Ok(QuoteResult { request, quote, expected_output_formatted })
    }

    /// Build the adapter request for `params` without contacting the adapter.
    pub fn build_request(&self, params: &QuoteParams) -> Result<SwapRequest> {
        let source = self.registry.resolve(&params.source)?;
        let dest = self.registry.resolve(&params.dest)?;
        if source == dest {
            return Err(AppError::Parse("Source and destination assets are the same".to_string()));
        }

        let amount = parse_units(&params.amount, source.decimals).map_err(AppError::Parse)?;
        if amount.is_zero() {
            return Err(AppError::Parse("Amount must be greater than zero".to_string()));
        }

        if params.slippage_tolerance < Decimal::ZERO
            || params.slippage_tolerance > Decimal::from(MAX_SLIPPAGE_PERCENT)
        {
            return Err(AppError::Parse(format!(
                "Slippage tolerance must be between 0 and {} (percentage)",
                MAX_SLIPPAGE_PERCENT
            )));
        }

        validate_address(source.chain, &params.sender)?;
        if let Some(receiver) = &params.stealth_receiver {
            validate_address(dest.chain, receiver)?;
        }

        Ok(SwapRequest {
            source_asset: source.asset_ref(),
            dest_asset: dest.asset_ref(),
            amount: amount.to_string(),
            sender: params.sender.clone(),
            stealth_receiver: params.stealth_receiver.clone(),
            slippage_tolerance: params.slippage_tolerance,
        })
    }
}
