mod percent;
mod routing_diagram;
pub mod token_metadata;

pub use percent::larger_percent_value;
pub use routing_diagram::{get_routing_diagram_entries, RoutingDiagramEntry};

use ethnum::U256;
use tracing::debug;
use udon_sdk::{utils::parse_units, Currency, CurrencyAmount};

/// Parses a user typed amount into a `CurrencyAmount`.
///
/// Returns None for empty, zero, or unparseable input.
pub fn try_parse_currency_amount(value: &str, currency: &Currency) -> Option<CurrencyAmount> {
    if value.is_empty() {
        return None;
    }

    match parse_units(value, currency.decimals()) {
        Ok(raw_amount) if raw_amount != U256::ZERO => {
            Some(CurrencyAmount::from_raw_amount(currency.clone(), raw_amount))
        }
        Ok(_) => None,
        Err(error) => {
            // fails if the user specifies too many decimal places of precision
            debug!("Failed to parse input amount: \"{value}\": {error}");
            None
        }
    }
}
