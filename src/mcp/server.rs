//! MCP server implementation.

use std::sync::Arc;

use rmcp::{
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{Implementation, ServerCapabilities, ServerInfo},
    schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;

use crate::{
    chains::{classify_address, AccountKind, REGISTRY_VERSION},
    config::Config,
    encoding::{decode_list_header, TransactionFields, TxType},
    error::AppError,
    services::{
        balance_deltas, balances_from_value, detect_inbound_transfer,
        detect_inbound_transfer_for_mint, HttpSwapAdapter, QuoteParams, SwapAdapter, SwapService,
        TokenRegistry,
    },
    types::{AssetInfo, AssetRef, ChainId, DetectedTransfer},
};

/// Default slippage tolerance (0.5%).
const DEFAULT_SLIPPAGE: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Swap Asset Core MCP Server.
///
/// Provides tools for asset lookups, address validation, transfer detection,
/// transaction encoding and swap quotes.
#[derive(Clone)]
pub struct SwapAssetServer {
    registry: &'static TokenRegistry,
    swap_service: Option<SwapService>,
    tool_router: ToolRouter<Self>,
}

impl SwapAssetServer {
    /// Create a new server.
    ///
    /// No network calls are made here; the swap adapter is only contacted
    /// when `get_swap_quote` is invoked.
    pub fn new(config: Config) -> Result<Self, AppError> {
        tracing::info!("Initializing Swap Asset Core MCP Server");

        let adapter = HttpSwapAdapter::from_config(&config)?;
        if adapter.is_none() {
            tracing::info!("SWAP_API_URL not set, get_swap_quote is disabled");
        }

        Ok(Self::with_adapter(adapter.map(|a| Arc::new(a) as Arc<dyn SwapAdapter>)))
    }

    /// Create a server over an explicit swap adapter.
    pub fn with_adapter(adapter: Option<Arc<dyn SwapAdapter>>) -> Self {
        Self {
            registry: TokenRegistry::global(),
            swap_service: adapter.map(SwapService::new),
            tool_router: Self::tool_router(),
        }
    }
}

/// Input parameters for the get_asset tool.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
pub struct GetAssetInput {
    /// Token symbol, case-insensitive (e.g., "USDC", "sol").
    pub symbol: String,
    /// Chain name (e.g., "solana", "ethereum", "near").
    pub chain: String,
}

/// Input parameters for the get_token_by_address tool.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
pub struct GetTokenByAddressInput {
    /// Contract address, mint or denom.
    pub address: String,
    /// Chain name.
    pub chain: String,
}

/// Input parameters for the list_chain_tokens tool.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
pub struct ListChainTokensInput {
    /// Chain name.
    pub chain: String,
}

/// Input parameters for the validate_address tool.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
pub struct ValidateAddressInput {
    /// Chain name.
    pub chain: String,
    /// Address or account id to validate.
    pub address: String,
}

/// Input parameters for the detect_inbound_transfer tool.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
pub struct DetectInboundTransferInput {
    /// Token balances before execution (array or null).
    #[serde(default)]
    pub pre_balances: Option<serde_json::Value>,
    /// Token balances after execution (array or null).
    #[serde(default)]
    pub post_balances: Option<serde_json::Value>,
    /// Only consider credits of this mint.
    #[serde(default)]
    pub mint: Option<String>,
}

/// Input parameters for the encode_transaction tool.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
pub struct EncodeTransactionInput {
    /// Transaction format: "legacy" or "fee_market".
    pub tx_type: String,
    /// Transaction fields (chainId, nonce, gasLimit, to, value, data, gasPrice or
    /// maxFeePerGas/maxPriorityFeePerGas, accessList). Quantities are decimal or 0x strings.
    pub fields: serde_json::Value,
}

/// Input parameters for the get_swap_quote tool.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
pub struct GetSwapQuoteInput {
    /// Source token symbol.
    pub source_symbol: String,
    /// Source chain name.
    pub source_chain: String,
    /// Destination token symbol.
    pub dest_symbol: String,
    /// Destination chain name.
    pub dest_chain: String,
    /// Amount to swap (human-readable, e.g., "1.5").
    pub amount: String,
    /// Sender address on the source chain.
    pub sender: String,
    /// Optional recipient on the destination chain.
    #[serde(default)]
    pub stealth_receiver: Option<String>,
    /// Slippage tolerance percentage as string (e.g., "0.5" for 0.5%). Default: "0.5".
    #[serde(default)]
    pub slippage_tolerance: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChainTokens {
    chain: ChainId,
    registry_version: &'static str,
    tokens: Vec<AssetInfo>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddressValidation {
    chain: ChainId,
    address: String,
    kind: AccountKind,
    valid: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TransferDetection {
    transfer: Option<DetectedTransfer>,
    deltas: Vec<DetectedTransfer>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EncodedTransaction {
    tx_type: TxType,
    encoded: String,
    signing_hash: String,
    item_count: usize,
    payload_length: usize,
}

fn parse_chain(s: &str) -> Result<ChainId, McpError> {
    ChainId::from_str(s).map_err(McpError::from)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value).map_err(|e| McpError::internal_error(e.to_string(), None))
}

#[tool_router]
impl SwapAssetServer {
    /// Resolve a token symbol on a chain.
    #[tool(description = "Resolve a token symbol on a chain to its address (mint, contract or denom) and decimals. Unknown pairs are an error, never a default.")]
    pub async fn get_asset(
        &self,
        Parameters(input): Parameters<GetAssetInput>,
    ) -> Result<String, McpError> {
        tracing::info!(symbol = %input.symbol, chain = %input.chain, "get_asset called");

        let chain = parse_chain(&input.chain)?;
        let asset = self.registry.get_asset(&input.symbol, chain)?;
        to_json(&asset)
    }

    /// Reverse lookup of a token by address.
    #[tool(description = "Look up a known token by contract address, mint or denom. Returns null when the address is not a known token.")]
    pub async fn get_token_by_address(
        &self,
        Parameters(input): Parameters<GetTokenByAddressInput>,
    ) -> Result<String, McpError> {
        tracing::info!(address = %input.address, chain = %input.chain, "get_token_by_address called");

        let chain = parse_chain(&input.chain)?;
        to_json(&self.registry.get_token_by_address(&input.address, chain))
    }

    /// List all known tokens on a chain.
    #[tool(description = "List every known token on a chain, native asset first.")]
    pub async fn list_chain_tokens(
        &self,
        Parameters(input): Parameters<ListChainTokensInput>,
    ) -> Result<String, McpError> {
        tracing::info!(chain = %input.chain, "list_chain_tokens called");

        let chain = parse_chain(&input.chain)?;
        to_json(&ChainTokens {
            chain,
            registry_version: REGISTRY_VERSION,
            tokens: self.registry.get_tokens_for_chain(chain),
        })
    }

    /// Classify an address under a chain's rules.
    #[tool(description = "Validate an address or account id for a chain. NEAR accounts are classified as implicit or named.")]
    pub async fn validate_address(
        &self,
        Parameters(input): Parameters<ValidateAddressInput>,
    ) -> Result<String, McpError> {
        tracing::info!(chain = %input.chain, address = %input.address, "validate_address called");

        let chain = parse_chain(&input.chain)?;
        let kind = classify_address(chain, &input.address);
        to_json(&AddressValidation { chain, address: input.address, kind, valid: kind.is_valid() })
    }

    /// Detect an inbound transfer from balance snapshots.
    #[tool(description = "Detect an inbound token transfer by diffing pre- and post-execution token balances. Reports the first credited account in post order and every positive delta.")]
    pub async fn detect_inbound_transfer(
        &self,
        Parameters(input): Parameters<DetectInboundTransferInput>,
    ) -> Result<String, McpError> {
        tracing::info!(mint = ?input.mint, "detect_inbound_transfer called");

        let pre = match input.pre_balances {
            Some(value) => balances_from_value(value)?,
            None => None,
        };
        let post = match input.post_balances {
            Some(value) => balances_from_value(value)?,
            None => None,
        };

        let transfer = match &input.mint {
            Some(mint) => detect_inbound_transfer_for_mint(pre.as_deref(), post.as_deref(), mint),
            None => detect_inbound_transfer(pre.as_deref(), post.as_deref()),
        };
        let deltas = match (&pre, &post) {
            (Some(pre), Some(post)) => balance_deltas(pre, post),
            _ => Vec::new(),
        };

        to_json(&TransferDetection { transfer, deltas })
    }

    /// Encode an unsigned EVM transaction.
    #[tool(description = "Encode an unsigned EVM transaction (legacy EIP-155 or fee-market EIP-1559) to the exact bytes an external signer signs. Returns 0x hex and the keccak256 signing hash.")]
    pub async fn encode_transaction(
        &self,
        Parameters(input): Parameters<EncodeTransactionInput>,
    ) -> Result<String, McpError> {
        tracing::info!(tx_type = %input.tx_type, "encode_transaction called");

        let tx_type: TxType = serde_json::from_value(serde_json::Value::String(input.tx_type))
            .map_err(|e| McpError::invalid_params(format!("Invalid tx_type: {}", e), None))?;
        let fields: TransactionFields = serde_json::from_value(input.fields)
            .map_err(|e| McpError::invalid_params(format!("Invalid transaction fields: {}", e), None))?;

        let tx = fields.build(tx_type)?;
        let encoded = tx.encode();
        let header = decode_list_header(&encoded)?;

        to_json(&EncodedTransaction {
            tx_type,
            encoded: alloy::hex::encode_prefixed(&encoded),
            signing_hash: tx.signing_hash().to_string(),
            item_count: header.item_count,
            payload_length: header.payload_length,
        })
    }

    /// Request a swap quote from the configured aggregator.
    #[tool(description = "Get a cross-chain swap quote. Amounts are human-readable and converted with the registry's decimals; sender and receiver are validated for their chains.")]
    pub async fn get_swap_quote(
        &self,
        Parameters(input): Parameters<GetSwapQuoteInput>,
    ) -> Result<String, McpError> {
        tracing::info!(
            source = %input.source_symbol,
            source_chain = %input.source_chain,
            dest = %input.dest_symbol,
            dest_chain = %input.dest_chain,
            amount = %input.amount,
            "get_swap_quote called"
        );

        let service = self.swap_service.as_ref().ok_or_else(|| {
            McpError::from(AppError::Config("Swap adapter not configured (set SWAP_API_URL)".into()))
        })?;

        let slippage_tolerance = input
            .slippage_tolerance
            .as_ref()
            .map(|s| {
                Decimal::from_str(s).map_err(|e| {
                    McpError::invalid_params(format!("Invalid slippage_tolerance: {}", e), None)
                })
            })
            .transpose()?
            .unwrap_or(DEFAULT_SLIPPAGE);

        let params = QuoteParams {
            source: AssetRef::new(input.source_symbol, parse_chain(&input.source_chain)?),
            dest: AssetRef::new(input.dest_symbol, parse_chain(&input.dest_chain)?),
            amount: input.amount,
            sender: input.sender,
            stealth_receiver: input.stealth_receiver,
            slippage_tolerance,
        };

        let result = service.quote(params).await?;
        to_json(&result)
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for SwapAssetServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "swap-asset-core".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Swap Asset Core MCP Server. Provides tools for multi-chain token lookups, \
                 address validation, inbound transfer detection, EVM transaction encoding \
                 and swap quotes."
                    .to_string(),
            ),
        }
    }
}
