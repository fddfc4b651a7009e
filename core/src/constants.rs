use crate::pricing::StablecoinTable;
use std::sync::{Arc, LazyLock};
use udon_sdk::ChainId;

// Compile-time configuration for the default chain
pub const DEFAULT_CHAIN_ID: ChainId = if cfg!(feature = "testnet") {
    ChainId::ModeSepolia
} else {
    ChainId::Mode
};

/// Placeholder address the data API uses for a chain's native asset.
pub const NATIVE_CHAIN_ID: &str = "NATIVE";

// Stablecoin amounts used when calculating spot price for a given currency.
// The amount is large enough to filter low liquidity pairs.
pub static STABLECOIN_TABLE: LazyLock<Arc<StablecoinTable>> = LazyLock::new(|| {
    let json = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config/stablecoins.json"));
    Arc::new(StablecoinTable::from_json(json).expect("Failed to deserialize stablecoins.json"))
});
