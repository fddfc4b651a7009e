use super::{CurrencyAmount, Fraction};
use crate::{constants::Rounding, entities::currency::Currency, Error};
use num_bigint::BigInt;

/// The exchange rate between a base and a quote currency, in their smallest units.
///
/// `numerator / denominator` is the amount of quote received per unit of base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price {
    base_currency: Currency,
    quote_currency: Currency,
    fraction: Fraction,
    scalar: Fraction,
}

impl Price {
    pub fn new(
        base_currency: impl Into<Currency>,
        quote_currency: impl Into<Currency>,
        denominator: impl Into<BigInt>,
        numerator: impl Into<BigInt>,
    ) -> Self {
        let base_currency = base_currency.into();
        let quote_currency = quote_currency.into();
        let scalar = Fraction::new(
            BigInt::from(10u32).pow(base_currency.decimals() as u32),
            BigInt::from(10u32).pow(quote_currency.decimals() as u32),
        );

        Self {
            base_currency,
            quote_currency,
            fraction: Fraction::new(numerator, denominator),
            scalar,
        }
    }

    /// The price implied by swapping `base_amount` for `quote_amount`.
    pub fn from_amounts(base_amount: &CurrencyAmount, quote_amount: &CurrencyAmount) -> Self {
        let result = quote_amount.as_fraction().divide(base_amount.as_fraction());
        Price::new(
            base_amount.currency().clone(),
            quote_amount.currency().clone(),
            result.denominator().clone(),
            result.numerator().clone(),
        )
    }

    pub fn base_currency(&self) -> &Currency {
        &self.base_currency
    }

    pub fn quote_currency(&self) -> &Currency {
        &self.quote_currency
    }

    pub fn numerator(&self) -> &BigInt {
        self.fraction.numerator()
    }

    pub fn denominator(&self) -> &BigInt {
        self.fraction.denominator()
    }

    pub fn as_fraction(&self) -> &Fraction {
        &self.fraction
    }

    /// Value equality of the raw ratio; currencies are not compared.
    pub fn equal_to(&self, other: &Price) -> bool {
        self.fraction.equal_to(&other.fraction)
    }

    pub fn invert(&self) -> Price {
        Price::new(
            self.quote_currency.clone(),
            self.base_currency.clone(),
            self.numerator().clone(),
            self.denominator().clone(),
        )
    }

    /// Chains two prices: `A/B * B/C = A/C`.
    pub fn multiply(&self, other: &Price) -> Result<Price, Error> {
        if self.quote_currency != other.base_currency {
            return Err(Error::currency_mismatch(
                &self.quote_currency,
                &other.base_currency,
            ));
        }
        let fraction = self.fraction.multiply(&other.fraction);
        Ok(Price::new(
            self.base_currency.clone(),
            other.quote_currency.clone(),
            fraction.denominator().clone(),
            fraction.numerator().clone(),
        ))
    }

    /// Converts an amount of the base currency into the quote currency.
    pub fn quote(&self, currency_amount: &CurrencyAmount) -> Result<CurrencyAmount, Error> {
        if *currency_amount.currency() != self.base_currency {
            return Err(Error::currency_mismatch(
                &self.base_currency,
                currency_amount.currency(),
            ));
        }
        let result = self.fraction.multiply(currency_amount.as_fraction());
        CurrencyAmount::from_fractional_amount(
            self.quote_currency.clone(),
            result.numerator().clone(),
            result.denominator().clone(),
        )
    }

    /// The ratio in whole units rather than smallest units.
    pub fn adjusted_for_decimals(&self) -> Fraction {
        self.fraction.multiply(&self.scalar)
    }

    pub fn to_fixed(&self, decimal_places: u32, rounding: Rounding) -> String {
        self.adjusted_for_decimals()
            .to_fixed(decimal_places, rounding)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "1 {} = {} {}",
            self.base_currency,
            self.to_fixed(6, Rounding::RoundHalfUp),
            self.quote_currency
        )
    }
}
