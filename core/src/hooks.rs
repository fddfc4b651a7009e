//! Reactive wrappers around the pricing functions.
//!
//! The router behind [`PricingContext`] is expected to read signals of its own, so a memo
//! that calls it re-runs whenever the router's quote changes.

use crate::{
    constants::STABLECOIN_TABLE,
    pricing::{
        stablecoin_amount_from_fiat_value, stablecoin_value, StablecoinPriceDeriver,
        StablecoinTable,
    },
    routing::RoutingApi,
    state::ActiveChain,
};
use leptos::prelude::*;
use std::sync::Arc;
use udon_sdk::{Currency, CurrencyAmount, Price};

pub type SharedRouter = Arc<dyn RoutingApi + Send + Sync>;

#[derive(Clone)]
pub struct PricingContext {
    pub stablecoins: Arc<StablecoinTable>,
    pub routing: SharedRouter,
}

impl PricingContext {
    pub fn new(routing: SharedRouter) -> Self {
        Self {
            stablecoins: STABLECOIN_TABLE.clone(),
            routing,
        }
    }
}

pub fn provide_pricing_context(context: PricingContext) {
    provide_context(context);
}

/// Stablecoin price of `currency`. The memo holds the same `Arc` while the price is unchanged.
pub fn use_stablecoin_price(currency: Signal<Option<Currency>>) -> Memo<Option<Arc<Price>>> {
    let context = use_context::<PricingContext>().expect("pricing context missing!");
    let deriver = StoredValue::new(StablecoinPriceDeriver::new(
        context.stablecoins,
        context.routing,
    ));

    Memo::new(move |_| {
        currency.with(|currency| {
            deriver
                .try_update_value(|deriver| deriver.derive_price(currency.as_ref()))
                .flatten()
        })
    })
}

/// Value of `currency_amount` in the chain's stablecoin.
pub fn use_stablecoin_value(
    currency_amount: Signal<Option<CurrencyAmount>>,
) -> Signal<Option<CurrencyAmount>> {
    let currency = Signal::derive(move || {
        currency_amount.with(|amount| amount.as_ref().map(|amount| amount.currency().clone()))
    });
    let price = use_stablecoin_price(currency);

    Signal::derive(move || {
        let price = price.get();
        currency_amount.with(|amount| stablecoin_value(price.as_deref(), amount.as_ref()))
    })
}

/// A USD amount expressed in the active chain's stablecoin.
pub fn use_stablecoin_amount_from_fiat_value(
    fiat_value: Signal<Option<f64>>,
) -> Signal<Option<CurrencyAmount>> {
    let context = use_context::<PricingContext>().expect("pricing context missing!");
    let active_chain = use_context::<ActiveChain>().expect("active chain context missing!");

    Signal::derive(move || {
        stablecoin_amount_from_fiat_value(
            fiat_value.get(),
            active_chain.get(),
            &context.stablecoins,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{routing::TradeResult, test_utils::*};
    use ethnum::U256;
    use udon_sdk::{Rounding, Token};

    fn setup(router: Arc<MockRouter>) -> Owner {
        let owner = Owner::new();
        owner.set();
        provide_pricing_context(PricingContext {
            stablecoins: mode_stablecoins(),
            routing: router,
        });
        provide_context(ActiveChain::default());
        owner
    }

    #[test]
    fn price_follows_currency_signal() {
        let weth = mode_token(1, "WETH");
        let router = Arc::new(MockRouter::new(TradeResult::valid(price_probe_trade(
            &weth, 3_000, 1,
        ))));
        let _owner = setup(router.clone());

        let currency = RwSignal::new(None::<Currency>);
        let price = use_stablecoin_price(currency.into());
        assert_eq!(price.get(), None);

        currency.set(Some(weth.clone().into()));
        let first = price.get().unwrap();
        assert_eq!(first.base_currency(), &Currency::from(weth));

        currency.set(Some(usdc().into()));
        let stable = price.get().unwrap();
        assert_eq!(stable.to_fixed(0, Rounding::RoundHalfUp), "1");
        assert!(!Arc::ptr_eq(&first, &stable));
    }

    #[test]
    fn values_amounts_and_fiat_input() {
        let router = Arc::new(MockRouter::new(TradeResult::default()));
        let _owner = setup(router);

        let amount = RwSignal::new(Some(CurrencyAmount::from_raw_amount(
            usdc(),
            U256::new(2_500_000),
        )));
        let value = use_stablecoin_value(amount.into());
        assert_eq!(value.get(), amount.get_untracked());

        let token: Token = mode_token(9, "NOPE");
        amount.set(Some(CurrencyAmount::from_raw_amount(token, U256::ONE)));
        assert_eq!(value.get(), None);

        let fiat = RwSignal::new(Some(12.345));
        let parsed = use_stablecoin_amount_from_fiat_value(fiat.into());
        assert_eq!(parsed.get().unwrap().quotient().to_string(), "12345000");

        fiat.set(None);
        assert_eq!(parsed.get(), None);
    }
}
