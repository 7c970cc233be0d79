//! Compiled-in token table.
//!
//! One row per (chain, symbol). The first row of each chain is its native
//! asset (address `None`). Adding a token is a data change here only; callers
//! go through [`crate::services::TokenRegistry`].

use crate::types::ChainId;

/// Version of the token table. Bump on every data change.
pub const REGISTRY_VERSION: &str = "2026.10.1";

/// A row of the token table.
#[derive(Debug, Clone, Copy)]
pub struct TokenRow {
    pub chain: ChainId,
    pub symbol: &'static str,
    pub name: &'static str,
    pub address: Option<&'static str>,
    pub decimals: u8,
}

const fn native(chain: ChainId, symbol: &'static str, name: &'static str, decimals: u8) -> TokenRow {
    TokenRow { chain, symbol, name, address: None, decimals }
}

const fn token(
    chain: ChainId,
    symbol: &'static str,
    name: &'static str,
    address: &'static str,
    decimals: u8,
) -> TokenRow {
    TokenRow { chain, symbol, name, address: Some(address), decimals }
}

pub const TOKENS: &[TokenRow] = &[
    // ========================================================================
    // Solana
    // ========================================================================
    native(ChainId::Solana, "SOL", "Solana", 9),
    token(ChainId::Solana, "USDC", "USD Coin", "EPjFWdd5AufqSSqeM2qFBPGd6sYB3u6SjxXDYRpA5dQZ", 6),
    token(ChainId::Solana, "USDT", "Tether USD", "Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB", 6),
    token(ChainId::Solana, "WSOL", "Wrapped SOL", "So11111111111111111111111111111111111111112", 9),
    token(ChainId::Solana, "JUP", "Jupiter", "JUPyiwrYJFskUPiHa7hkeR8VUtAeFoSYbKedZNsDvCN", 6),
    token(ChainId::Solana, "BONK", "Bonk", "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263", 5),
    // ========================================================================
    // Ethereum
    // ========================================================================
    native(ChainId::Ethereum, "ETH", "Ether", 18),
    token(ChainId::Ethereum, "USDC", "USD Coin", "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48", 6),
    token(ChainId::Ethereum, "USDT", "Tether USD", "0xdAC17F958D2ee523a2206206994597C13D831ec7", 6),
    token(ChainId::Ethereum, "DAI", "Dai Stablecoin", "0x6B175474E89094C44Da98b954EedeAC495271d0F", 18),
    token(ChainId::Ethereum, "WETH", "Wrapped Ether", "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2", 18),
    token(ChainId::Ethereum, "WBTC", "Wrapped BTC", "0x2260FAC5E5542a773Aa44fBCfeDf7C193bc2C599", 8),
    token(ChainId::Ethereum, "UNI", "Uniswap", "0x1f9840a85d5aF5bf1D1762F925BDADdC4201F984", 18),
    token(ChainId::Ethereum, "LINK", "Chainlink", "0x514910771AF9Ca656af840dff83E8264EcF986CA", 18),
    // ========================================================================
    // Polygon
    // ========================================================================
    native(ChainId::Polygon, "MATIC", "Polygon", 18),
    token(ChainId::Polygon, "USDC", "USD Coin", "0x3c499c542cEF5E3811e1192ce70d8cC03d5c3359", 6),
    token(ChainId::Polygon, "USDT", "Tether USD", "0xc2132D05D31c914a87C6611C10748AEb04B58e8F", 6),
    token(ChainId::Polygon, "WETH", "Wrapped Ether", "0x7ceB23fD6bC0adD59E62ac25578270cFf1b9f619", 18),
    // ========================================================================
    // Arbitrum
    // ========================================================================
    native(ChainId::Arbitrum, "ETH", "Ether", 18),
    token(ChainId::Arbitrum, "USDC", "USD Coin", "0xaf88d065e77c8cC2239327C5EDb3A432268e5831", 6),
    token(ChainId::Arbitrum, "USDT", "Tether USD", "0xFd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9", 6),
    token(ChainId::Arbitrum, "WETH", "Wrapped Ether", "0x82aF49447D8a07e3bd95BD0d56f35241523fBab1", 18),
    token(ChainId::Arbitrum, "ARB", "Arbitrum", "0x912CE59144191C1204E64559FE8253a0e49E6548", 18),
    // ========================================================================
    // Optimism
    // ========================================================================
    native(ChainId::Optimism, "ETH", "Ether", 18),
    token(ChainId::Optimism, "USDC", "USD Coin", "0x0b2C639c533813f4Aa9D7837CAf62653d097Ff85", 6),
    token(ChainId::Optimism, "WETH", "Wrapped Ether", "0x4200000000000000000000000000000000000006", 18),
    token(ChainId::Optimism, "OP", "Optimism", "0x4200000000000000000000000000000000000042", 18),
    // ========================================================================
    // Base
    // ========================================================================
    native(ChainId::Base, "ETH", "Ether", 18),
    token(ChainId::Base, "USDC", "USD Coin", "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913", 6),
    token(ChainId::Base, "WETH", "Wrapped Ether", "0x4200000000000000000000000000000000000006", 18),
    // ========================================================================
    // NEAR
    // ========================================================================
    native(ChainId::Near, "NEAR", "NEAR", 24),
    token(
        ChainId::Near,
        "USDC",
        "USD Coin",
        "17208628f84f5d6ad33f0da3bbbeb27ffcb398eac501a31bd6ad2011e36133a1",
        6,
    ),
    token(ChainId::Near, "USDT", "Tether USD", "usdt.tether-token.near", 6),
    token(ChainId::Near, "WNEAR", "Wrapped NEAR", "wrap.near", 24),
    // ========================================================================
    // UTXO chains
    // ========================================================================
    native(ChainId::Bitcoin, "BTC", "Bitcoin", 8),
    native(ChainId::Zcash, "ZEC", "Zcash", 8),
    // ========================================================================
    // Move chains
    // ========================================================================
    native(ChainId::Aptos, "APT", "Aptos", 8),
    token(
        ChainId::Aptos,
        "USDC",
        "USD Coin",
        "0xbae207659db88bea0cbead6da0ed00aac12edcdda169e591cd41c94180b46f3b",
        6,
    ),
    token(
        ChainId::Aptos,
        "USDT",
        "Tether USD",
        "0x357b0b74bc833e95a115ad22604854d6b0fca151cecd94111770e5d6ffc9dc2b",
        6,
    ),
    native(ChainId::Sui, "SUI", "Sui", 9),
    token(
        ChainId::Sui,
        "USDC",
        "USD Coin",
        "0xdba34672e30cb065b1f93e3ab55318768fd6fef66c15942c9f7cb846e2f900e7::usdc::USDC",
        6,
    ),
    // ========================================================================
    // Cosmos SDK chains
    // ========================================================================
    native(ChainId::Cosmos, "ATOM", "Cosmos Hub", 6),
    native(ChainId::Osmosis, "OSMO", "Osmosis", 6),
    token(
        ChainId::Osmosis,
        "USDC",
        "USD Coin",
        "ibc/498A0751C798A0D9A389AA3691123DADA57DAA4FE165D5C75894505B876BA6E4",
        6,
    ),
    native(ChainId::Injective, "INJ", "Injective", 18),
    token(
        ChainId::Injective,
        "USDT",
        "Tether USD",
        "peggy0xdAC17F958D2ee523a2206206994597C13D831ec7",
        6,
    ),
    native(ChainId::Celestia, "TIA", "Celestia", 6),
    native(ChainId::Sei, "SEI", "Sei", 6),
    native(ChainId::Dydx, "DYDX", "dYdX", 18),
    token(
        ChainId::Dydx,
        "USDC",
        "USD Coin",
        "ibc/8E27BA2D5493AF5636760E354E46004562C46AB7EC0CC4C1CA14E9E20E2545B5",
        6,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_chain_has_exactly_one_native_row() {
        for chain in ChainId::ALL {
            let natives = TOKENS.iter().filter(|t| t.chain == chain && t.address.is_none()).count();
            assert_eq!(natives, 1, "{} should have one native asset", chain);
        }
    }

    #[test]
    fn test_native_row_comes_first_per_chain() {
        for chain in ChainId::ALL {
            let first = TOKENS.iter().find(|t| t.chain == chain).unwrap();
            assert!(first.address.is_none(), "first {} row should be native", chain);
        }
    }

    #[test]
    fn test_no_duplicate_symbols_per_chain() {
        let mut seen = HashSet::new();
        for row in TOKENS {
            assert!(
                seen.insert((row.chain, row.symbol.to_uppercase())),
                "duplicate {} on {}",
                row.symbol,
                row.chain
            );
        }
    }

    #[test]
    fn test_no_duplicate_addresses_per_chain() {
        let mut seen = HashSet::new();
        for row in TOKENS {
            if let Some(address) = row.address {
                assert!(seen.insert((row.chain, address.to_lowercase())), "duplicate {}", address);
            }
        }
    }

    #[test]
    fn test_symbols_are_uppercase() {
        for row in TOKENS {
            assert_eq!(row.symbol, row.symbol.to_uppercase());
        }
    }
}
