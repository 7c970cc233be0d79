//! Integration tests for the encode_transaction tool.
//!
//! Run with: `cargo test --test test_encode_transaction`

mod common;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::ErrorCode;
use serde_json::json;
use swap_asset_core::mcp::EncodeTransactionInput;

fn input(tx_type: &str, fields: serde_json::Value) -> Parameters<EncodeTransactionInput> {
    Parameters(EncodeTransactionInput { tx_type: tx_type.to_string(), fields })
}

#[tokio::test]
async fn test_encode_legacy_eip155_example() {
    let server = common::create_test_server();
    let fields = json!({
        "chainId": 1,
        "nonce": 9,
        "gasPrice": "20000000000",
        "gasLimit": 21000,
        "to": "0x3535353535353535353535353535353535353535",
        "value": "1000000000000000000"
    });

    let result = server.encode_transaction(input("legacy", fields)).await;
    assert!(result.is_ok(), "encode_transaction should succeed: {:?}", result.err());

    let parsed = common::parse_json(&result.unwrap());
    assert_eq!(
        parsed["encoded"],
        "0xec098504a817c800825208943535353535353535353535353535353535353535880de0b6b3a764000080018080"
    );
    assert_eq!(
        parsed["signingHash"],
        "0xdaf5a779ae972f972197303d7b574746c7ef83eadac0f2791ad23db92e4c8e53"
    );
    assert_eq!(parsed["itemCount"], 9);
}

#[tokio::test]
async fn test_encode_fee_market() {
    let server = common::create_test_server();
    let fields = json!({
        "chainId": 8453,
        "nonce": 3,
        "maxFeePerGas": "0x3b9aca00",
        "maxPriorityFeePerGas": "1000000",
        "gasLimit": 60000,
        "to": "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913",
        "data": "0xa9059cbb"
    });

    let parsed =
        common::parse_json(&server.encode_transaction(input("fee_market", fields)).await.unwrap());
    let encoded = parsed["encoded"].as_str().unwrap();

    assert!(encoded.starts_with("0x02"));
    assert_eq!(parsed["txType"], "fee_market");
    assert_eq!(parsed["itemCount"], 9);
}

#[tokio::test]
async fn test_encode_missing_fee_field() {
    let server = common::create_test_server();
    let fields = json!({ "chainId": 1, "gasLimit": 21000 });

    let err = server.encode_transaction(input("legacy", fields)).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
}

#[tokio::test]
async fn test_encode_unknown_tx_type() {
    let server = common::create_test_server();
    let fields = json!({ "chainId": 1, "gasLimit": 21000, "gasPrice": "1" });

    let err = server.encode_transaction(input("blob", fields)).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
}
