use super::{
    fractions::{CurrencyAmount, Price},
    route::Route,
};
use crate::{constants::TradeType, Error};

/// One leg of a split trade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swap {
    pub route: Route,
    pub input_amount: CurrencyAmount,
    pub output_amount: CurrencyAmount,
}

/// A trade split across one or more routes that share input and output currencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trade {
    swaps: Vec<Swap>,
    trade_type: TradeType,
    input_amount: CurrencyAmount,
    output_amount: CurrencyAmount,
}

impl Trade {
    pub fn new(swaps: Vec<Swap>, trade_type: TradeType) -> Result<Self, Error> {
        let Some(first) = swaps.first() else {
            return Err(Error::InvalidTrade("no swaps"));
        };
        let input = first.route.input().clone();
        let output = first.route.output().clone();

        for swap in &swaps {
            if *swap.route.input() != input || *swap.input_amount.currency() != input {
                return Err(Error::InvalidTrade("input currency mismatch"));
            }
            if *swap.route.output() != output || *swap.output_amount.currency() != output {
                return Err(Error::InvalidTrade("output currency mismatch"));
            }
        }

        let mut input_amount = first.input_amount.clone();
        let mut output_amount = first.output_amount.clone();
        for swap in &swaps[1..] {
            input_amount = input_amount.add(&swap.input_amount)?;
            output_amount = output_amount.add(&swap.output_amount)?;
        }

        Ok(Self {
            swaps,
            trade_type,
            input_amount,
            output_amount,
        })
    }

    pub fn swaps(&self) -> &[Swap] {
        &self.swaps
    }

    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.swaps.iter().map(|swap| &swap.route)
    }

    pub fn trade_type(&self) -> TradeType {
        self.trade_type
    }

    /// Sum of the input amounts of every swap.
    pub fn input_amount(&self) -> &CurrencyAmount {
        &self.input_amount
    }

    /// Sum of the output amounts of every swap.
    pub fn output_amount(&self) -> &CurrencyAmount {
        &self.output_amount
    }

    pub fn execution_price(&self) -> Price {
        Price::from_amounts(&self.input_amount, &self.output_amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        currency::Token,
        pool::{encode_sqrt_ratio_x96, FeeAmount, Pool},
    };
    use ethnum::U256;
    use num_bigint::BigInt;

    fn token(address: &str, symbol: &str) -> Token {
        Token::new(34443, address, 18, Some(symbol), None)
    }

    fn direct_route(a: &Token, b: &Token) -> Route {
        let sqrt_ratio = encode_sqrt_ratio_x96(1, 1).unwrap();
        let pool = Pool::new(a.clone(), b.clone(), FeeAmount::Low, sqrt_ratio, 1, 0).unwrap();
        Route::new(vec![pool], a.clone(), b.clone()).unwrap()
    }

    #[test]
    fn sums_swap_amounts() {
        let a = token("0x0000000000000000000000000000000000000001", "A");
        let b = token("0x0000000000000000000000000000000000000002", "B");
        let route = direct_route(&a, &b);

        let swap = |amount_in: u128, amount_out: u128| Swap {
            route: route.clone(),
            input_amount: CurrencyAmount::from_raw_amount(a.clone(), U256::new(amount_in)),
            output_amount: CurrencyAmount::from_raw_amount(b.clone(), U256::new(amount_out)),
        };

        let trade = Trade::new(vec![swap(40, 80), swap(60, 120)], TradeType::ExactInput).unwrap();

        assert_eq!(trade.input_amount().quotient(), BigInt::from(100));
        assert_eq!(trade.output_amount().quotient(), BigInt::from(200));
        assert_eq!(trade.routes().count(), 2);
        assert!(trade
            .execution_price()
            .equal_to(&Price::new(a.clone(), b.clone(), 1, 2)));
    }

    #[test]
    fn rejects_empty_and_mismatched_swaps() {
        let a = token("0x0000000000000000000000000000000000000001", "A");
        let b = token("0x0000000000000000000000000000000000000002", "B");

        assert_eq!(
            Trade::new(vec![], TradeType::ExactOutput),
            Err(Error::InvalidTrade("no swaps"))
        );

        let mismatched = Swap {
            route: direct_route(&a, &b),
            input_amount: CurrencyAmount::from_raw_amount(b.clone(), U256::new(1)),
            output_amount: CurrencyAmount::from_raw_amount(b.clone(), U256::new(1)),
        };
        assert_eq!(
            Trade::new(vec![mismatched], TradeType::ExactInput),
            Err(Error::InvalidTrade("input currency mismatch"))
        );
    }
}
