use super::{currency::Token, fractions::Price};
use crate::{
    utils::{biguint_to_u256, u256_to_bigint},
    Error,
};
use ethnum::U256;
use num_bigint::{BigInt, BigUint};
use serde::{Deserialize, Serialize};

/// Pool fee tiers, in hundredths of a basis point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum FeeAmount {
    Lowest,
    Low,
    Medium,
    High,
}

impl FeeAmount {
    pub const fn as_u32(&self) -> u32 {
        match self {
            FeeAmount::Lowest => 100,
            FeeAmount::Low => 500,
            FeeAmount::Medium => 3000,
            FeeAmount::High => 10000,
        }
    }

    pub const fn tick_spacing(&self) -> i32 {
        match self {
            FeeAmount::Lowest => 1,
            FeeAmount::Low => 10,
            FeeAmount::Medium => 60,
            FeeAmount::High => 200,
        }
    }
}

impl TryFrom<u32> for FeeAmount {
    type Error = &'static str;

    fn try_from(fee: u32) -> Result<Self, Self::Error> {
        match fee {
            100 => Ok(FeeAmount::Lowest),
            500 => Ok(FeeAmount::Low),
            3000 => Ok(FeeAmount::Medium),
            10000 => Ok(FeeAmount::High),
            _ => Err("Invalid fee amount"),
        }
    }
}

impl From<FeeAmount> for u32 {
    fn from(fee: FeeAmount) -> u32 {
        fee.as_u32()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Protocol {
    V2,
    V3,
    #[serde(rename = "MIXED")]
    Mixed,
}

fn q192() -> BigInt {
    BigInt::from(2u8).pow(192)
}

/// Encodes `amount1 / amount0` as a Q64.96 square root price.
pub fn encode_sqrt_ratio_x96(amount1: u128, amount0: u128) -> Result<U256, Error> {
    if amount0 == 0 {
        return Err(Error::InvalidAmount("zero amount0".to_string()));
    }
    let numerator = BigUint::from(amount1) << 192u32;
    let ratio_x192 = numerator / BigUint::from(amount0);
    biguint_to_u256(&ratio_x192.sqrt())
}

/// A concentrated liquidity pool, as reported by the routing service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    token0: Token,
    token1: Token,
    fee: FeeAmount,
    sqrt_ratio_x96: U256,
    liquidity: u128,
    tick_current: i32,
}

impl Pool {
    pub fn new(
        token_a: Token,
        token_b: Token,
        fee: FeeAmount,
        sqrt_ratio_x96: U256,
        liquidity: u128,
        tick_current: i32,
    ) -> Result<Self, Error> {
        if sqrt_ratio_x96 == U256::ZERO {
            return Err(Error::InvalidAmount("zero sqrt price".to_string()));
        }
        let (token0, token1) = if token_a.sorts_before(&token_b)? {
            (token_a, token_b)
        } else {
            (token_b, token_a)
        };

        Ok(Self {
            token0,
            token1,
            fee,
            sqrt_ratio_x96,
            liquidity,
            tick_current,
        })
    }

    pub fn token0(&self) -> &Token {
        &self.token0
    }

    pub fn token1(&self) -> &Token {
        &self.token1
    }

    pub fn fee(&self) -> FeeAmount {
        self.fee
    }

    pub fn sqrt_ratio_x96(&self) -> U256 {
        self.sqrt_ratio_x96
    }

    pub fn liquidity(&self) -> u128 {
        self.liquidity
    }

    pub fn tick_current(&self) -> i32 {
        self.tick_current
    }

    pub fn chain_id(&self) -> u64 {
        self.token0.chain_id
    }

    pub fn involves_token(&self, token: &Token) -> bool {
        *token == self.token0 || *token == self.token1
    }

    /// Current mid price of token0 in terms of token1.
    pub fn token0_price(&self) -> Price {
        let sqrt_ratio = u256_to_bigint(self.sqrt_ratio_x96);
        Price::new(
            self.token0.clone(),
            self.token1.clone(),
            q192(),
            &sqrt_ratio * &sqrt_ratio,
        )
    }

    /// Current mid price of token1 in terms of token0.
    pub fn token1_price(&self) -> Price {
        let sqrt_ratio = u256_to_bigint(self.sqrt_ratio_x96);
        Price::new(
            self.token1.clone(),
            self.token0.clone(),
            &sqrt_ratio * &sqrt_ratio,
            q192(),
        )
    }

    pub fn price_of(&self, token: &Token) -> Result<Price, Error> {
        if *token == self.token0 {
            Ok(self.token0_price())
        } else if *token == self.token1 {
            Ok(self.token1_price())
        } else {
            Err(Error::InvalidRoute("token not in pool"))
        }
    }
}
