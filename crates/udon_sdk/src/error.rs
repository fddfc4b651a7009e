#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Currency mismatch: expected {expected}, got {actual}")]
    CurrencyMismatch { expected: String, actual: String },

    #[error("Chain ids do not match: {0} != {1}")]
    ChainMismatch(u64, u64),

    #[error("Unsupported chain id: {0}")]
    UnsupportedChain(u64),

    #[error("Tokens have identical addresses")]
    IdenticalAddresses,

    #[error("Amount exceeds MaxUint256")]
    AmountOverflow,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Too many decimal places: got {got}, token supports {max}")]
    TooManyDecimals { got: usize, max: u8 },

    #[error("Invalid route: {0}")]
    InvalidRoute(&'static str),

    #[error("Invalid trade: {0}")]
    InvalidTrade(&'static str),
}

impl Error {
    pub fn currency_mismatch(expected: impl ToString, actual: impl ToString) -> Self {
        Error::CurrencyMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}
