mod table;

pub use table::StablecoinTable;

use crate::{
    routing::{InterfaceTrade, RoutingApi, TradeRequest, INTERNAL_ROUTER_PREFERENCE_PRICE},
    support::LastValue,
    utils::try_parse_currency_amount,
};
use std::sync::Arc;
use tracing::{debug, trace};
use udon_sdk::{utils::truncate_decimals, Currency, CurrencyAmount, Price, TradeType};

/// Derives the stablecoin price of a currency from the router's latest quote.
///
/// The deriver does no I/O. Each call to [`derive_price`](Self::derive_price) reads whatever
/// the router currently holds for the price probe request. The returned `Arc` is reused until
/// the price changes in value or base currency, so a router that re-polls an unchanged quote
/// does not produce a new instance.
pub struct StablecoinPriceDeriver<R> {
    stablecoins: Arc<StablecoinTable>,
    router: R,
    last_price: LastValue<Price>,
}

impl<R: RoutingApi> StablecoinPriceDeriver<R> {
    pub fn new(stablecoins: Arc<StablecoinTable>, router: R) -> Self {
        Self {
            stablecoins,
            router,
            last_price: LastValue::new(),
        }
    }

    pub fn derive_price(&mut self, currency: Option<&Currency>) -> Option<Arc<Price>> {
        let price = self.compute_price(currency);

        self.last_price.update(price, |next, last| {
            next.equal_to(last) && next.base_currency() == last.base_currency()
        })
    }

    /// The request issued for `currency`, or None if its chain has no stablecoin.
    pub fn price_request(&self, currency: &Currency) -> Option<TradeRequest> {
        let amount_out = self.stablecoins.amount_out_for(currency.chain_id())?;

        Some(TradeRequest {
            skip: false,
            trade_type: TradeType::ExactOutput,
            amount_specified: Some(amount_out.clone()),
            other_currency: Some(currency.clone()),
            router_preference: INTERNAL_ROUTER_PREFERENCE_PRICE,
        })
    }

    fn compute_price(&self, currency: Option<&Currency>) -> Option<Price> {
        let currency = currency?;
        let Some(stablecoin) = self.stablecoins.stablecoin_for(currency.chain_id()) else {
            trace!("no stablecoin for chain {}", currency.chain_id());
            return None;
        };

        // no need to route the stablecoin against itself
        if Currency::from(currency.wrapped()) == *stablecoin {
            return Some(Price::new(stablecoin.clone(), stablecoin.clone(), 1, 1));
        }

        let request = self.price_request(currency)?;
        let result = self.router.routing_api_trade(&request);

        match result.trade {
            Some(InterfaceTrade::Classic(trade)) => {
                let mid_price = trade.first_route()?.mid_price();
                Some(Price::new(
                    currency.clone(),
                    stablecoin.clone(),
                    mid_price.denominator().clone(),
                    mid_price.numerator().clone(),
                ))
            }
            // if initial quoting fails, we may end up with a dutch order
            Some(InterfaceTrade::DutchOrder(_)) => {
                debug!("price probe for {currency} returned a dutch order, no route to price");
                None
            }
            None => {
                trace!("no trade for {currency} ({:?})", result.state);
                None
            }
        }
    }
}

/// Values `currency_amount` in the stablecoin. Any conversion failure yields None.
pub fn stablecoin_value(
    price: Option<&Price>,
    currency_amount: Option<&CurrencyAmount>,
) -> Option<CurrencyAmount> {
    let (price, currency_amount) = (price?, currency_amount?);
    price
        .quote(currency_amount)
        .inspect_err(|error| debug!("could not quote {currency_amount}: {error}"))
        .ok()
}

/// Parses a USD amount into the chain's stablecoin, rounded to the stablecoin's decimals.
pub fn stablecoin_amount_from_fiat_value(
    fiat_value: Option<f64>,
    chain_id: Option<u64>,
    stablecoins: &StablecoinTable,
) -> Option<CurrencyAmount> {
    let fiat_value = fiat_value.filter(|value| value.is_finite())?;
    let stablecoin = stablecoins.stablecoin_for(chain_id?)?;

    // trim for decimal precision when parsing
    let parsed_for_decimals = format!("{:.*}", stablecoin.decimals() as usize, fiat_value);
    try_parse_currency_amount(&parsed_for_decimals, stablecoin)
}

/// Like [`stablecoin_amount_from_fiat_value`], for user typed text. Extra digits are cut off.
pub fn stablecoin_amount_from_fiat_text(
    fiat_text: &str,
    chain_id: Option<u64>,
    stablecoins: &StablecoinTable,
) -> Option<CurrencyAmount> {
    let stablecoin = stablecoins.stablecoin_for(chain_id?)?;
    let truncated = truncate_decimals(fiat_text.trim(), stablecoin.decimals());
    try_parse_currency_amount(truncated, stablecoin)
}
