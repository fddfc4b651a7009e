use crate::{
    constants::{
        addrs::{native_metadata, wrapped_native},
        ChainId,
    },
    Error,
};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// An ERC20 token on a specific chain.
///
/// Two tokens are equal when they live on the same chain and share an address, compared
/// case-insensitively so checksummed and lowercase addresses are interchangeable.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct Token {
    pub chain_id: u64,
    pub address: String,
    pub decimals: u8,
    pub symbol: Option<String>,
    pub name: Option<String>,
}

impl Token {
    pub fn new(
        chain_id: u64,
        address: impl Into<String>,
        decimals: u8,
        symbol: Option<&str>,
        name: Option<&str>,
    ) -> Self {
        Self {
            chain_id,
            address: address.into(),
            decimals,
            symbol: symbol.map(ToString::to_string),
            name: name.map(ToString::to_string),
        }
    }

    /// Returns true if this token sorts before `other` by address, as pools order their tokens.
    pub fn sorts_before(&self, other: &Token) -> Result<bool, Error> {
        if self.chain_id != other.chain_id {
            return Err(Error::ChainMismatch(self.chain_id, other.chain_id));
        }
        let this = self.address.to_ascii_lowercase();
        let that = other.address.to_ascii_lowercase();
        if this == that {
            return Err(Error::IdenticalAddresses);
        }
        Ok(this < that)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id && self.address.eq_ignore_ascii_case(&other.address)
    }
}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.address.to_ascii_lowercase().hash(state);
    }
}

/// The native asset of a chain (ETH, MATIC, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NativeCurrency {
    pub chain: ChainId,
    pub decimals: u8,
    pub symbol: String,
    pub name: String,
}

impl NativeCurrency {
    pub fn on_chain(chain: ChainId) -> Self {
        let (symbol, name) = native_metadata(chain);
        Self {
            chain,
            decimals: 18,
            symbol: symbol.to_string(),
            name: name.to_string(),
        }
    }

    pub fn wrapped(&self) -> Token {
        wrapped_native(self.chain)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    Native(NativeCurrency),
    Token(Token),
}

impl Currency {
    pub fn chain_id(&self) -> u64 {
        match self {
            Currency::Native(native) => native.chain.id(),
            Currency::Token(token) => token.chain_id,
        }
    }

    pub fn decimals(&self) -> u8 {
        match self {
            Currency::Native(native) => native.decimals,
            Currency::Token(token) => token.decimals,
        }
    }

    pub fn symbol(&self) -> Option<&str> {
        match self {
            Currency::Native(native) => Some(&native.symbol),
            Currency::Token(token) => token.symbol.as_deref(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Currency::Native(native) => Some(&native.name),
            Currency::Token(token) => token.name.as_deref(),
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Currency::Native(_))
    }

    pub fn is_token(&self) -> bool {
        matches!(self, Currency::Token(_))
    }

    /// The token this currency trades as inside pools.
    pub fn wrapped(&self) -> Token {
        match self {
            Currency::Native(native) => native.wrapped(),
            Currency::Token(token) => token.clone(),
        }
    }
}

impl From<Token> for Currency {
    fn from(token: Token) -> Self {
        Currency::Token(token)
    }
}

impl From<NativeCurrency> for Currency {
    fn from(native: NativeCurrency) -> Self {
        Currency::Native(native)
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Currency::Native(native) => write!(f, "{}", native.symbol),
            Currency::Token(token) => match &token.symbol {
                Some(symbol) => write!(f, "{symbol}"),
                None => write!(f, "{}", token.address),
            },
        }
    }
}
