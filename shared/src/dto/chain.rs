//! Chain and token metadata types.

use serde::{Deserialize, Serialize};

/// Native currency of a chain (e.g. ETH on Ethereum, MATIC on Polygon).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// A supported blockchain network, identified by its numeric chain id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chain {
    pub id: u64,
    pub name: String,
    pub symbol: String,
    pub rpc_url: String,
    pub block_explorer: String,
    pub native_currency: NativeCurrency,
}

impl Chain {
    /// Build an explorer URL for a transaction hash on this chain.
    pub fn tx_url(&self, tx_hash: &str) -> String {
        format!("{}/tx/{}", self.block_explorer, tx_hash)
    }
}

/// A token supported on a specific chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub address: String,
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    pub chain_id: u64,
}

impl Token {
    /// Whether this token is the chain's native asset (zero address convention).
    pub fn is_native(&self) -> bool {
        self.address == "0x0000000000000000000000000000000000000000"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eth_chain() -> Chain {
        Chain {
            id: 1,
            name: "Ethereum".to_string(),
            symbol: "ETH".to_string(),
            rpc_url: "https://mainnet.infura.io/v3/KEY".to_string(),
            block_explorer: "https://etherscan.io".to_string(),
            native_currency: NativeCurrency {
                name: "Ether".to_string(),
                symbol: "ETH".to_string(),
                decimals: 18,
            },
        }
    }

    #[test]
    fn test_tx_url() {
        let chain = eth_chain();
        assert_eq!(
            chain.tx_url("0xabc123"),
            "https://etherscan.io/tx/0xabc123"
        );
    }

    #[test]
    fn test_is_native() {
        let token = Token {
            address: "0x0000000000000000000000000000000000000000".to_string(),
            symbol: "ETH".to_string(),
            name: "Ether".to_string(),
            decimals: 18,
            chain_id: 1,
        };
        assert!(token.is_native());
    }
}
