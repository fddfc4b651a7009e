use crate::routing::ClassicTrade;
use udon_sdk::{FeeAmount, Percent, Protocol, Token, TradeType};

#[derive(Debug, Clone, PartialEq)]
pub struct RoutingDiagramEntry {
    pub percent: Percent,
    pub path: Vec<(Token, Token, FeeAmount)>,
    pub protocol: Protocol,
}

/// Loops through all routes on a trade and returns an array of diagram entries.
pub fn get_routing_diagram_entries(trade: &ClassicTrade) -> Vec<RoutingDiagramEntry> {
    trade
        .swaps()
        .iter()
        .map(|swap| {
            let portion = match trade.trade_type() {
                TradeType::ExactInput => swap
                    .input_amount
                    .as_fraction()
                    .divide(trade.input_amount().as_fraction()),
                TradeType::ExactOutput => swap
                    .output_amount
                    .as_fraction()
                    .divide(trade.output_amount().as_fraction()),
            };
            let percent = Percent::new(portion.numerator().clone(), portion.denominator().clone());

            let route = &swap.route;
            let path = route
                .pools()
                .iter()
                .zip(route.path().windows(2))
                .map(|(pool, hop)| (hop[0].clone(), hop[1].clone(), pool.fee()))
                .collect();

            RoutingDiagramEntry {
                percent,
                path,
                protocol: route.protocol(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{routing::QuoteMethod, test_utils::*};
    use ethnum::U256;
    use pretty_assertions::assert_eq;
    use udon_sdk::{CurrencyAmount, Route, Swap, Trade};

    fn split_trade(trade_type: TradeType) -> ClassicTrade {
        let a = mode_token(1, "A");
        let b = mode_token(2, "B");
        let c = mode_token(3, "C");

        let direct = Route::new(vec![pool(&a, &c, FeeAmount::Low, 1, 1)], a.clone(), c.clone())
            .unwrap();
        let two_hop = Route::new(
            vec![
                pool(&a, &b, FeeAmount::Medium, 1, 1),
                pool(&b, &c, FeeAmount::High, 1, 1),
            ],
            a.clone(),
            c.clone(),
        )
        .unwrap()
        .with_protocol(Protocol::Mixed);

        let amount = |token: &Token, raw: u128| {
            CurrencyAmount::from_raw_amount(token.clone(), U256::new(raw))
        };
        let swaps = vec![
            Swap {
                route: direct,
                input_amount: amount(&a, 40),
                output_amount: amount(&c, 75),
            },
            Swap {
                route: two_hop,
                input_amount: amount(&a, 60),
                output_amount: amount(&c, 25),
            },
        ];

        ClassicTrade::new(Trade::new(swaps, trade_type).unwrap(), QuoteMethod::RoutingApi)
    }

    #[test]
    fn exact_input_splits_by_input_amount() {
        let entries = get_routing_diagram_entries(&split_trade(TradeType::ExactInput));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].percent, Percent::new(40, 100));
        assert_eq!(entries[1].percent, Percent::new(60, 100));
        assert_eq!(entries[0].protocol, Protocol::V3);
        assert_eq!(entries[1].protocol, Protocol::Mixed);
    }

    #[test]
    fn exact_output_splits_by_output_amount() {
        let entries = get_routing_diagram_entries(&split_trade(TradeType::ExactOutput));

        assert_eq!(entries[0].percent, Percent::new(3, 4));
        assert_eq!(entries[1].percent, Percent::new(1, 4));
    }

    #[test]
    fn emits_one_triple_per_hop() {
        let a = mode_token(1, "A");
        let b = mode_token(2, "B");
        let c = mode_token(3, "C");

        let entries = get_routing_diagram_entries(&split_trade(TradeType::ExactInput));

        assert_eq!(entries[0].path, vec![(a.clone(), c.clone(), FeeAmount::Low)]);
        assert_eq!(
            entries[1].path,
            vec![
                (a, b.clone(), FeeAmount::Medium),
                (b, c, FeeAmount::High),
            ]
        );
    }
}
