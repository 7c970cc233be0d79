//! Common utilities for integration tests.

use std::time::Duration;

use swap_asset_core::{Config, SwapAssetServer};

/// Server without a swap adapter; every tool except `get_swap_quote` works.
#[allow(dead_code)]
pub fn create_test_server() -> SwapAssetServer {
    SwapAssetServer::with_adapter(None)
}

/// Helper to create a server with a live swap adapter from environment variables.
#[allow(dead_code)]
pub fn create_quote_server() -> Option<SwapAssetServer> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let swap_api_url = std::env::var("SWAP_API_URL").ok().filter(|url| !url.is_empty())?;

    let config = Config {
        swap_api_url: Some(swap_api_url),
        swap_api_key: std::env::var("SWAP_API_KEY").ok(),
        swap_api_timeout: Duration::from_secs(30),
        log_level: "warn".to_string(),
    };

    SwapAssetServer::new(config).ok()
}

/// Parse a tool response into JSON.
#[allow(dead_code)]
pub fn parse_json(response: &str) -> serde_json::Value {
    serde_json::from_str(response).expect("tool output should be JSON")
}

/// Skip test if the swap adapter is not configured.
#[macro_export]
macro_rules! skip_if_no_swap_api {
    () => {
        match common::create_quote_server() {
            Some(server) => server,
            None => {
                eprintln!("Skipping test: SWAP_API_URL not set");
                return;
            }
        }
    };
}
