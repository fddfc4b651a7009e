use super::{
    currency::{Currency, Token},
    fractions::Price,
    pool::{Pool, Protocol},
};
use crate::Error;
use tracing::trace;

/// An ordered list of pools through which `input` is swapped into `output`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pools: Vec<Pool>,
    path: Vec<Token>,
    input: Currency,
    output: Currency,
    protocol: Protocol,
    mid_price: Price,
}

impl Route {
    pub fn new(
        pools: Vec<Pool>,
        input: impl Into<Currency>,
        output: impl Into<Currency>,
    ) -> Result<Self, Error> {
        let input = input.into();
        let output = output.into();

        let Some(first) = pools.first() else {
            return Err(Error::InvalidRoute("no pools"));
        };
        let chain_id = first.chain_id();
        if pools.iter().any(|pool| pool.chain_id() != chain_id) {
            return Err(Error::InvalidRoute("pools span multiple chains"));
        }

        let wrapped_input = input.wrapped();
        if !first.involves_token(&wrapped_input) {
            return Err(Error::InvalidRoute("input not in first pool"));
        }

        let mut path = vec![wrapped_input];
        for pool in &pools {
            let current = &path[path.len() - 1];
            if !pool.involves_token(current) {
                return Err(Error::InvalidRoute("pools are not connected"));
            }
            let next = if current == pool.token0() {
                pool.token1().clone()
            } else {
                pool.token0().clone()
            };
            path.push(next);
        }

        if path[path.len() - 1] != output.wrapped() {
            return Err(Error::InvalidRoute("output not in last pool"));
        }

        let mid_price = Self::compute_mid_price(&pools, &path, &input, &output)?;
        trace!(hops = pools.len(), %input, %output, "built route");

        Ok(Self {
            pools,
            path,
            input,
            output,
            protocol: Protocol::V3,
            mid_price,
        })
    }

    fn compute_mid_price(
        pools: &[Pool],
        path: &[Token],
        input: &Currency,
        output: &Currency,
    ) -> Result<Price, Error> {
        let mut hops = pools.iter().zip(path);
        let Some((pool, token_in)) = hops.next() else {
            return Err(Error::InvalidRoute("no pools"));
        };

        let mut price = pool.price_of(token_in)?;
        for (pool, token_in) in hops {
            price = price.multiply(&pool.price_of(token_in)?)?;
        }

        Ok(Price::new(
            input.clone(),
            output.clone(),
            price.denominator().clone(),
            price.numerator().clone(),
        ))
    }

    /// Tags the route with the protocol its pools belong to.
    pub fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = protocol;
        self
    }

    pub fn pools(&self) -> &[Pool] {
        &self.pools
    }

    /// Tokens visited by the route, one more than the number of pools.
    pub fn path(&self) -> &[Token] {
        &self.path
    }

    pub fn input(&self) -> &Currency {
        &self.input
    }

    pub fn output(&self) -> &Currency {
        &self.output
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn chain_id(&self) -> u64 {
        self.pools[0].chain_id()
    }

    /// Size independent price of `input` in terms of `output`.
    pub fn mid_price(&self) -> &Price {
        &self.mid_price
    }
}
