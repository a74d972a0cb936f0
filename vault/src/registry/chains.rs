//! Supported blockchain networks.

use once_cell::sync::Lazy;
use shared::dto::chain::{Chain, NativeCurrency};

/// Ethereum mainnet chain id.
pub const ETHEREUM: u64 = 1;
/// Polygon PoS chain id.
pub const POLYGON: u64 = 137;
/// BNB Chain chain id.
pub const BNB_CHAIN: u64 = 56;
/// ZetaChain mainnet chain id.
pub const ZETACHAIN: u64 = 7000;

static SUPPORTED_CHAINS: Lazy<Vec<Chain>> = Lazy::new(|| {
    vec![
        Chain {
            id: ETHEREUM,
            name: "Ethereum".to_string(),
            symbol: "ETH".to_string(),
            rpc_url: "https://mainnet.infura.io/v3/YOUR_INFURA_KEY".to_string(),
            block_explorer: "https://etherscan.io".to_string(),
            native_currency: NativeCurrency {
                name: "Ether".to_string(),
                symbol: "ETH".to_string(),
                decimals: 18,
            },
        },
        Chain {
            id: POLYGON,
            name: "Polygon".to_string(),
            symbol: "MATIC".to_string(),
            rpc_url: "https://polygon-rpc.com".to_string(),
            block_explorer: "https://polygonscan.com".to_string(),
            native_currency: NativeCurrency {
                name: "Polygon".to_string(),
                symbol: "MATIC".to_string(),
                decimals: 18,
            },
        },
        Chain {
            id: BNB_CHAIN,
            name: "BNB Chain".to_string(),
            symbol: "BNB".to_string(),
            rpc_url: "https://bsc-dataseed.binance.org".to_string(),
            block_explorer: "https://bscscan.com".to_string(),
            native_currency: NativeCurrency {
                name: "BNB".to_string(),
                symbol: "BNB".to_string(),
                decimals: 18,
            },
        },
        Chain {
            id: ZETACHAIN,
            name: "ZetaChain".to_string(),
            symbol: "ZETA".to_string(),
            rpc_url: "https://zetachain-evm.blockpi.network/v1/rpc/public".to_string(),
            block_explorer: "https://zetachain.blockscout.com".to_string(),
            native_currency: NativeCurrency {
                name: "Zeta".to_string(),
                symbol: "ZETA".to_string(),
                decimals: 18,
            },
        },
    ]
});

/// All supported chains, in display order.
pub fn supported_chains() -> &'static [Chain] {
    &SUPPORTED_CHAINS
}

/// Look up a chain by its numeric id.
pub fn chain_by_id(chain_id: u64) -> Option<&'static Chain> {
    SUPPORTED_CHAINS.iter().find(|chain| chain.id == chain_id)
}

/// Display name for a chain id, falling back to the raw id for unknown chains.
pub fn chain_name(chain_id: u64) -> String {
    chain_by_id(chain_id)
        .map(|chain| chain.name.clone())
        .unwrap_or_else(|| format!("chain {}", chain_id))
}
