pub mod constants;
mod error;
pub mod hooks;
pub mod pricing;
pub mod routing;
pub mod state;
pub mod support;
pub mod utils;

#[cfg(test)]
mod test_utils;

pub use constants::{DEFAULT_CHAIN_ID, STABLECOIN_TABLE};
pub use error::Error;
pub use hooks::{
    provide_pricing_context, use_stablecoin_amount_from_fiat_value, use_stablecoin_price,
    use_stablecoin_value, PricingContext,
};
pub use pricing::{StablecoinPriceDeriver, StablecoinTable};
pub use routing::{InterfaceTrade, RoutingApi, TradeRequest, TradeResult};
pub use state::ActiveChain;
