pub mod constants;
pub mod entities;
mod error;
pub mod utils;

pub use constants::{ChainId, Rounding, TradeType};
pub use entities::{
    currency::{Currency, NativeCurrency, Token},
    fractions::{CurrencyAmount, Fraction, Percent, Price},
    pool::{encode_sqrt_ratio_x96, FeeAmount, Pool, Protocol},
    route::Route,
    trade::{Swap, Trade},
};
pub use error::Error;
