//! Supported tokens per chain.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use shared::dto::chain::Token;

use super::chains::{BNB_CHAIN, ETHEREUM, POLYGON, ZETACHAIN};

const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

fn token(address: &str, symbol: &str, name: &str, decimals: u8, chain_id: u64) -> Token {
    Token {
        address: address.to_string(),
        symbol: symbol.to_string(),
        name: name.to_string(),
        decimals,
        chain_id,
    }
}

static SUPPORTED_TOKENS: Lazy<HashMap<u64, Vec<Token>>> = Lazy::new(|| {
    let mut tokens = HashMap::new();
    tokens.insert(
        ETHEREUM,
        vec![
            token(ZERO_ADDRESS, "ETH", "Ether", 18, ETHEREUM),
            token(
                "0xA0b86a33E6441b8435b662f0E2d0c2837c0b0000",
                "USDC",
                "USD Coin",
                6,
                ETHEREUM,
            ),
            token(
                "0xdAC17F958D2ee523a2206206994597C13D831ec7",
                "USDT",
                "Tether USD",
                6,
                ETHEREUM,
            ),
        ],
    );
    tokens.insert(
        POLYGON,
        vec![
            token(ZERO_ADDRESS, "MATIC", "Polygon", 18, POLYGON),
            token(
                "0x2791Bca1f2de4661ED88A30C99A7a9449Aa84174",
                "USDC",
                "USD Coin",
                6,
                POLYGON,
            ),
            token(
                "0xc2132D05D31c914a87C6611C10748AEb04B58e8F",
                "USDT",
                "Tether USD",
                6,
                POLYGON,
            ),
        ],
    );
    tokens.insert(
        BNB_CHAIN,
        vec![
            token(ZERO_ADDRESS, "BNB", "BNB", 18, BNB_CHAIN),
            token(
                "0x8AC76a51cc950d9822D68b83fE1Ad97B32Cd580d",
                "USDC",
                "USD Coin",
                18,
                BNB_CHAIN,
            ),
            token(
                "0x55d398326f99059fF775485246999027B3197955",
                "USDT",
                "Tether USD",
                18,
                BNB_CHAIN,
            ),
        ],
    );
    tokens.insert(
        ZETACHAIN,
        vec![token(ZERO_ADDRESS, "ZETA", "Zeta", 18, ZETACHAIN)],
    );
    tokens
});

/// Tokens supported on a chain; empty for unknown chains.
pub fn tokens_for_chain(chain_id: u64) -> &'static [Token] {
    SUPPORTED_TOKENS
        .get(&chain_id)
        .map(|tokens| tokens.as_slice())
        .unwrap_or(&[])
}

/// Look up a token by contract address (case-insensitive) on a chain.
pub fn token_by_address(chain_id: u64, address: &str) -> Option<&'static Token> {
    tokens_for_chain(chain_id)
        .iter()
        .find(|token| token.address.eq_ignore_ascii_case(address))
}

/// Whether a token symbol is supported on a chain.
pub fn token_supported(chain_id: u64, symbol: &str) -> bool {
    tokens_for_chain(chain_id)
        .iter()
        .any(|token| token.symbol == symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_for_chain() {
        assert_eq!(tokens_for_chain(ETHEREUM).len(), 3);
        assert_eq!(tokens_for_chain(ZETACHAIN).len(), 1);
        assert!(tokens_for_chain(999).is_empty());
    }

    #[test]
    fn test_token_by_address_case_insensitive() {
        let usdc = token_by_address(POLYGON, "0x2791bca1f2de4661ed88a30c99a7a9449aa84174");
        assert_eq!(usdc.unwrap().symbol, "USDC");
    }

    #[test]
    fn test_token_supported() {
        assert!(token_supported(ETHEREUM, "ETH"));
        assert!(token_supported(POLYGON, "USDC"));
        assert!(!token_supported(ZETACHAIN, "USDC"));
        assert!(!token_supported(ETHEREUM, "DOGE"));
    }
}
