//! Integration tests for the registry tools.
//!
//! Run with: `cargo test --test test_get_asset`

mod common;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::ErrorCode;
use swap_asset_core::mcp::{GetAssetInput, GetTokenByAddressInput, ListChainTokensInput};
use swap_asset_core::REGISTRY_VERSION;

fn asset_input(symbol: &str, chain: &str) -> Parameters<GetAssetInput> {
    Parameters(GetAssetInput { symbol: symbol.to_string(), chain: chain.to_string() })
}

// ============================================================================
// get_asset
// ============================================================================

#[tokio::test]
async fn test_get_asset_solana_usdc() {
    let server = common::create_test_server();

    let result = server.get_asset(asset_input("usdc", "solana")).await;
    assert!(result.is_ok(), "get_asset should succeed: {:?}", result.err());

    let parsed = common::parse_json(&result.unwrap());
    assert_eq!(parsed["symbol"], "USDC");
    assert_eq!(parsed["decimals"], 6);
    assert_eq!(parsed["address"], "EPjFWdd5AufqSSqeM2qFBPGd6sYB3u6SjxXDYRpA5dQZ");
}

#[tokio::test]
async fn test_get_asset_native_has_null_address() {
    let server = common::create_test_server();

    let parsed = common::parse_json(&server.get_asset(asset_input("NEAR", "near")).await.unwrap());
    assert!(parsed["address"].is_null());
    assert_eq!(parsed["decimals"], 24);
}

#[tokio::test]
async fn test_get_asset_chain_alias() {
    let server = common::create_test_server();

    let parsed = common::parse_json(&server.get_asset(asset_input("WETH", "arb")).await.unwrap());
    assert_eq!(parsed["chain"], "arbitrum");
}

#[tokio::test]
async fn test_get_asset_unknown_symbol() {
    let server = common::create_test_server();

    let err = server.get_asset(asset_input("NOTATOKEN", "ethereum")).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert!(err.message.contains("NOTATOKEN"));
}

#[tokio::test]
async fn test_get_asset_unknown_chain() {
    let server = common::create_test_server();

    let err = server.get_asset(asset_input("USDC", "dogechain")).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
}

// ============================================================================
// get_token_by_address
// ============================================================================

#[tokio::test]
async fn test_get_token_by_address_found() {
    let server = common::create_test_server();

    let input = GetTokenByAddressInput {
        address: "0xdac17f958d2ee523a2206206994597c13d831ec7".to_string(),
        chain: "ethereum".to_string(),
    };
    let parsed = common::parse_json(&server.get_token_by_address(Parameters(input)).await.unwrap());

    assert_eq!(parsed["symbol"], "USDT");
    assert_eq!(parsed["decimals"], 6);
}

#[tokio::test]
async fn test_get_token_by_address_zero_address() {
    let server = common::create_test_server();

    let input = GetTokenByAddressInput {
        address: "0x0000000000000000000000000000000000000000".to_string(),
        chain: "ethereum".to_string(),
    };
    let parsed = common::parse_json(&server.get_token_by_address(Parameters(input)).await.unwrap());

    assert!(parsed.is_null());
}

// ============================================================================
// list_chain_tokens
// ============================================================================

#[tokio::test]
async fn test_list_chain_tokens_native_first() {
    let server = common::create_test_server();

    let input = ListChainTokensInput { chain: "polygon".to_string() };
    let parsed = common::parse_json(&server.list_chain_tokens(Parameters(input)).await.unwrap());

    assert_eq!(parsed["registryVersion"], REGISTRY_VERSION);
    let tokens = parsed["tokens"].as_array().unwrap();
    assert!(!tokens.is_empty());
    assert_eq!(tokens[0]["symbol"], "MATIC");
    assert!(tokens[0]["address"].is_null());
    assert!(tokens[1..].iter().all(|t| t["address"].is_string()));
}
