use serde::{Deserialize, Serialize};
use std::ops::Deref;
use udon_sdk::{Currency, CurrencyAmount, Route, Trade, TradeType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouterPreference {
    Api,
    Client,
    /// Background valuation, never executed. Lets the router use cheaper quoting.
    Price,
}

pub const INTERNAL_ROUTER_PREFERENCE_PRICE: RouterPreference = RouterPreference::Price;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuoteMethod {
    RoutingApi,
    ClientSideFallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeState {
    Loading,
    Invalid,
    Stale,
    NoRouteFound,
    Valid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeRequest {
    pub skip: bool,
    pub trade_type: TradeType,
    pub amount_specified: Option<CurrencyAmount>,
    pub other_currency: Option<Currency>,
    pub router_preference: RouterPreference,
}

/// An on-chain trade routed through pools.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassicTrade {
    trade: Trade,
    pub quote_method: QuoteMethod,
    pub gas_use_estimate_usd: Option<f64>,
    pub block_number: Option<String>,
    pub request_id: Option<String>,
}

impl ClassicTrade {
    pub fn new(trade: Trade, quote_method: QuoteMethod) -> Self {
        Self {
            trade,
            quote_method,
            gas_use_estimate_usd: None,
            block_number: None,
            request_id: None,
        }
    }

    pub fn first_route(&self) -> Option<&Route> {
        self.trade.routes().next()
    }
}

impl Deref for ClassicTrade {
    type Target = Trade;

    fn deref(&self) -> &Self::Target {
        &self.trade
    }
}

/// An off-chain order filled by a third party. Carries no pool route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DutchOrderTrade {
    pub trade_type: TradeType,
    pub input_amount: CurrencyAmount,
    pub output_amount: CurrencyAmount,
    pub deadline: u64,
    pub swapper: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InterfaceTrade {
    Classic(ClassicTrade),
    DutchOrder(DutchOrderTrade),
}

impl From<ClassicTrade> for InterfaceTrade {
    fn from(trade: ClassicTrade) -> Self {
        InterfaceTrade::Classic(trade)
    }
}

impl From<DutchOrderTrade> for InterfaceTrade {
    fn from(trade: DutchOrderTrade) -> Self {
        InterfaceTrade::DutchOrder(trade)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TradeResult {
    pub state: TradeState,
    pub trade: Option<InterfaceTrade>,
}

impl TradeResult {
    pub fn valid(trade: impl Into<InterfaceTrade>) -> Self {
        Self {
            state: TradeState::Valid,
            trade: Some(trade.into()),
        }
    }

    pub fn loading() -> Self {
        Self {
            state: TradeState::Loading,
            trade: None,
        }
    }

    pub fn no_route_found() -> Self {
        Self {
            state: TradeState::NoRouteFound,
            trade: None,
        }
    }
}

impl Default for TradeResult {
    fn default() -> Self {
        Self {
            state: TradeState::Invalid,
            trade: None,
        }
    }
}
