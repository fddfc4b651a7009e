use crate::Error;
use ethnum::U256;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;
use udon_sdk::{ChainId, Currency, CurrencyAmount, Token};

#[derive(Deserialize, Debug)]
struct StablecoinEntry {
    chain_id: ChainId,
    address: String,
    decimals: u8,
    symbol: String,
    name: String,
    amount_out: String,
}

/// Per chain reference stablecoin, with the output amount used to probe its price.
///
/// The amount only biases routing toward deep liquidity; it is never traded.
#[derive(Debug, Clone, Default)]
pub struct StablecoinTable(HashMap<ChainId, CurrencyAmount>);

impl StablecoinTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        let entries: Vec<StablecoinEntry> = serde_json::from_str(json)?;

        entries.into_iter().try_fold(Self::new(), |table, entry| {
            let token = Token::new(
                entry.chain_id.id(),
                entry.address,
                entry.decimals,
                Some(entry.symbol.as_str()),
                Some(entry.name.as_str()),
            );
            let amount_out = entry
                .amount_out
                .parse::<U256>()
                .map_err(|e| Error::serde(format!("invalid amount_out: {e}")))?;
            table.with_stablecoin(token, amount_out)
        })
    }

    pub fn with_stablecoin(mut self, token: Token, amount_out: U256) -> Result<Self, Error> {
        let chain = ChainId::try_from(token.chain_id)?;
        debug!("{chain}: pricing against {:?}", token.symbol);
        self.0
            .insert(chain, CurrencyAmount::from_raw_amount(token, amount_out));
        Ok(self)
    }

    pub fn amount_out(&self, chain: ChainId) -> Option<&CurrencyAmount> {
        self.0.get(&chain)
    }

    /// Looks up a raw chain id. Unknown chains have no entry.
    pub fn amount_out_for(&self, chain_id: u64) -> Option<&CurrencyAmount> {
        ChainId::try_from(chain_id)
            .ok()
            .and_then(|chain| self.amount_out(chain))
    }

    pub fn stablecoin(&self, chain: ChainId) -> Option<&Currency> {
        self.amount_out(chain).map(CurrencyAmount::currency)
    }

    pub fn stablecoin_for(&self, chain_id: u64) -> Option<&Currency> {
        self.amount_out_for(chain_id).map(CurrencyAmount::currency)
    }

    pub fn chains(&self) -> impl Iterator<Item = ChainId> + '_ {
        self.0.keys().copied()
    }
}
