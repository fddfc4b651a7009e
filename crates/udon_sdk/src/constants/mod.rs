use crate::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub mod addrs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub enum ChainId {
    Mainnet,
    Polygon,
    Base,
    Mode,
    ModeSepolia,
}

impl ChainId {
    pub const ALL: [ChainId; 5] = [
        ChainId::Mainnet,
        ChainId::Polygon,
        ChainId::Base,
        ChainId::Mode,
        ChainId::ModeSepolia,
    ];

    /// Returns the numeric EVM chain id.
    pub const fn id(&self) -> u64 {
        match self {
            ChainId::Mainnet => 1,
            ChainId::Polygon => 137,
            ChainId::Base => 8453,
            ChainId::Mode => 34443,
            ChainId::ModeSepolia => 919,
        }
    }

    /// Returns the corresponding string for each ChainId
    pub fn as_str(&self) -> &'static str {
        match self {
            ChainId::Mainnet => "mainnet",
            ChainId::Polygon => "polygon",
            ChainId::Base => "base",
            ChainId::Mode => "mode",
            ChainId::ModeSepolia => "mode_sepolia",
        }
    }
}

impl TryFrom<u64> for ChainId {
    type Error = Error;

    fn try_from(id: u64) -> Result<Self, Self::Error> {
        ChainId::ALL
            .into_iter()
            .find(|chain| chain.id() == id)
            .ok_or(Error::UnsupportedChain(id))
    }
}

impl From<ChainId> for u64 {
    fn from(chain: ChainId) -> u64 {
        chain.id()
    }
}

impl FromStr for ChainId {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(ChainId::Mainnet),
            "polygon" => Ok(ChainId::Polygon),
            "base" => Ok(ChainId::Base),
            "mode" => Ok(ChainId::Mode),
            "mode_sepolia" => Ok(ChainId::ModeSepolia),
            _ => Err("Invalid chain ID"),
        }
    }
}

impl std::fmt::Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeType {
    ExactInput,
    ExactOutput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    RoundDown,
    RoundHalfUp,
    RoundUp,
}
