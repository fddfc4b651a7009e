use super::ChainId;
use crate::entities::currency::Token;

// OP-stack chains share the predeploy address.
const OP_STACK_WETH: &str = "0x4200000000000000000000000000000000000006";

/// Returns the wrapped representation of the chain's native asset.
pub fn wrapped_native(chain: ChainId) -> Token {
    let address = match chain {
        ChainId::Mainnet => "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2",
        ChainId::Polygon => {
            return Token::new(
                chain.id(),
                "0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270",
                18,
                Some("WMATIC"),
                Some("Wrapped MATIC"),
            )
        }
        ChainId::Base | ChainId::Mode | ChainId::ModeSepolia => OP_STACK_WETH,
    };

    Token::new(chain.id(), address, 18, Some("WETH"), Some("Wrapped Ether"))
}

/// Symbol and name of the chain's native asset.
pub fn native_metadata(chain: ChainId) -> (&'static str, &'static str) {
    match chain {
        ChainId::Polygon => ("MATIC", "Polygon Matic"),
        _ => ("ETH", "Ether"),
    }
}
