use crate::{
    pricing::StablecoinTable,
    routing::{ClassicTrade, QuoteMethod, RoutingApi, TradeRequest, TradeResult},
};
use ethnum::U256;
use std::sync::{Arc, Mutex};
use udon_sdk::{
    encode_sqrt_ratio_x96, ChainId, CurrencyAmount, FeeAmount, Pool, Route, Swap, Token, Trade,
    TradeType,
};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn usdc() -> Token {
    Token::new(
        ChainId::Mode.id(),
        "0xd988097fb8612cc24eeC14542bC03424c656005f",
        6,
        Some("USDC"),
        Some("USD Coin"),
    )
}

/// An 18 decimal token on Mode whose address is `0x00..0{index}`.
pub fn mode_token(index: u8, symbol: &str) -> Token {
    Token::new(
        ChainId::Mode.id(),
        format!("0x{index:040x}"),
        18,
        Some(symbol),
        None,
    )
}

pub fn mode_stablecoins() -> Arc<StablecoinTable> {
    Arc::new(
        StablecoinTable::new()
            .with_stablecoin(usdc(), U256::new(100_000_000_000))
            .unwrap(),
    )
}

/// A pool where one raw unit of token0 is worth `amount1 / amount0` raw units of token1.
pub fn pool(a: &Token, b: &Token, fee: FeeAmount, amount1: u128, amount0: u128) -> Pool {
    let sqrt_ratio = encode_sqrt_ratio_x96(amount1, amount0).unwrap();
    Pool::new(a.clone(), b.clone(), fee, sqrt_ratio, 1_000_000, 0).unwrap()
}

/// Exact output trade from `input` into USDC through a single pool.
///
/// `input` must sort before USDC so that it is token0 of the pool.
pub fn price_probe_trade(input: &Token, amount1: u128, amount0: u128) -> ClassicTrade {
    let route = Route::new(
        vec![pool(input, &usdc(), FeeAmount::Low, amount1, amount0)],
        input.clone(),
        usdc(),
    )
    .unwrap();
    let swap = Swap {
        route,
        input_amount: CurrencyAmount::from_raw_amount(input.clone(), U256::new(10u128.pow(22))),
        output_amount: CurrencyAmount::from_raw_amount(usdc(), U256::new(100_000_000_000)),
    };
    let trade = Trade::new(vec![swap], TradeType::ExactOutput).unwrap();
    ClassicTrade::new(trade, QuoteMethod::RoutingApi)
}

/// Router double that returns a fixed result and records every request.
pub struct MockRouter {
    result: Mutex<TradeResult>,
    requests: Mutex<Vec<TradeRequest>>,
}

impl MockRouter {
    pub fn new(result: TradeResult) -> Self {
        Self {
            result: Mutex::new(result),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn set(&self, result: TradeResult) {
        *self.result.lock().unwrap() = result;
    }

    pub fn requests(&self) -> Vec<TradeRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl RoutingApi for MockRouter {
    fn routing_api_trade(&self, request: &TradeRequest) -> TradeResult {
        self.requests.lock().unwrap().push(request.clone());
        self.result.lock().unwrap().clone()
    }
}
