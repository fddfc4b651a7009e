use super::Fraction;
use crate::{
    constants::Rounding,
    entities::currency::Currency,
    utils::{max_uint256, u256_to_bigint},
    Error,
};
use ethnum::U256;
use num_bigint::{BigInt, Sign};

/// An amount of a currency, stored as a fraction of its smallest unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyAmount {
    currency: Currency,
    fraction: Fraction,
    decimal_scale: BigInt,
}

impl CurrencyAmount {
    fn new_unchecked(currency: Currency, fraction: Fraction) -> Self {
        let decimal_scale = BigInt::from(10u32).pow(currency.decimals() as u32);
        Self {
            currency,
            fraction,
            decimal_scale,
        }
    }

    /// Amount in the currency's smallest unit, e.g. wei.
    pub fn from_raw_amount(currency: impl Into<Currency>, raw_amount: U256) -> Self {
        Self::new_unchecked(currency.into(), Fraction::new(u256_to_bigint(raw_amount), 1))
    }

    pub fn from_fractional_amount(
        currency: impl Into<Currency>,
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
    ) -> Result<Self, Error> {
        let fraction = Fraction::new(numerator, denominator);
        if fraction.denominator().sign() == Sign::NoSign {
            return Err(Error::InvalidAmount("zero denominator".to_string()));
        }
        if fraction.quotient() > max_uint256() {
            return Err(Error::AmountOverflow);
        }
        Ok(Self::new_unchecked(currency.into(), fraction))
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn as_fraction(&self) -> &Fraction {
        &self.fraction
    }

    pub fn numerator(&self) -> &BigInt {
        self.fraction.numerator()
    }

    pub fn denominator(&self) -> &BigInt {
        self.fraction.denominator()
    }

    /// Whole number of smallest units.
    pub fn quotient(&self) -> BigInt {
        self.fraction.quotient()
    }

    pub fn add(&self, other: &CurrencyAmount) -> Result<CurrencyAmount, Error> {
        self.ensure_same_currency(other)?;
        let sum = self.fraction.add(&other.fraction);
        Self::from_fractional_amount(
            self.currency.clone(),
            sum.numerator().clone(),
            sum.denominator().clone(),
        )
    }

    pub fn subtract(&self, other: &CurrencyAmount) -> Result<CurrencyAmount, Error> {
        self.ensure_same_currency(other)?;
        let difference = self.fraction.subtract(&other.fraction);
        Self::from_fractional_amount(
            self.currency.clone(),
            difference.numerator().clone(),
            difference.denominator().clone(),
        )
    }

    pub fn multiply(&self, other: &Fraction) -> Result<CurrencyAmount, Error> {
        let product = self.fraction.multiply(other);
        Self::from_fractional_amount(
            self.currency.clone(),
            product.numerator().clone(),
            product.denominator().clone(),
        )
    }

    pub fn divide(&self, other: &Fraction) -> Result<CurrencyAmount, Error> {
        let quotient = self.fraction.divide(other);
        Self::from_fractional_amount(
            self.currency.clone(),
            quotient.numerator().clone(),
            quotient.denominator().clone(),
        )
    }

    /// The same amount expressed in the wrapped token.
    pub fn wrapped(&self) -> CurrencyAmount {
        match self.currency {
            Currency::Token(_) => self.clone(),
            Currency::Native(ref native) => {
                Self::new_unchecked(native.wrapped().into(), self.fraction.clone())
            }
        }
    }

    /// Human readable amount with up to `decimal_places` digits after the point.
    pub fn to_fixed(&self, decimal_places: u8, rounding: Rounding) -> Result<String, Error> {
        if decimal_places > self.currency.decimals() {
            return Err(Error::TooManyDecimals {
                got: decimal_places as usize,
                max: self.currency.decimals(),
            });
        }
        Ok(self
            .fraction
            .divide(&Fraction::new(self.decimal_scale.clone(), 1))
            .to_fixed(decimal_places as u32, rounding))
    }

    /// Full precision human readable amount without trailing zeros.
    pub fn to_exact(&self) -> String {
        let fixed = self
            .fraction
            .divide(&Fraction::new(self.decimal_scale.clone(), 1))
            .to_fixed(self.currency.decimals() as u32, Rounding::RoundDown);

        if fixed.contains('.') {
            fixed.trim_end_matches('0').trim_end_matches('.').to_string()
        } else {
            fixed
        }
    }

    fn ensure_same_currency(&self, other: &CurrencyAmount) -> Result<(), Error> {
        if self.currency != other.currency {
            return Err(Error::currency_mismatch(&self.currency, &other.currency));
        }
        Ok(())
    }
}

impl std::fmt::Display for CurrencyAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.to_exact(), self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{entities::currency::Token, ChainId, NativeCurrency};
    use pretty_assertions::assert_eq;

    fn usdc() -> Token {
        Token::new(
            34443,
            "0xd988097fb8612cc24eeC14542bC03424c656005f",
            6,
            Some("USDC"),
            Some("USD Coin"),
        )
    }

    #[test]
    fn formats_exact_and_fixed() {
        let amount = CurrencyAmount::from_raw_amount(usdc(), U256::new(12_345_000));

        assert_eq!(amount.to_exact(), "12.345");
        assert_eq!(
            amount.to_fixed(6, Rounding::RoundDown).unwrap(),
            "12.345000"
        );
        assert_eq!(amount.to_fixed(2, Rounding::RoundHalfUp).unwrap(), "12.35");
        assert_eq!(amount.to_string(), "12.345 USDC");
        assert!(amount.to_fixed(7, Rounding::RoundDown).is_err());
    }

    #[test]
    fn zero_denominator_is_not_an_amount() {
        assert!(matches!(
            CurrencyAmount::from_fractional_amount(usdc(), 5, 0),
            Err(Error::InvalidAmount(_))
        ));
    }

    #[test]
    fn add_requires_same_currency() {
        let a = CurrencyAmount::from_raw_amount(usdc(), U256::new(40));
        let b = CurrencyAmount::from_raw_amount(usdc(), U256::new(60));
        let eth = CurrencyAmount::from_raw_amount(
            NativeCurrency::on_chain(ChainId::Mode),
            U256::new(1),
        );

        assert_eq!(a.add(&b).unwrap().quotient(), BigInt::from(100));
        assert_eq!(b.subtract(&a).unwrap().quotient(), BigInt::from(20));
        assert!(matches!(
            a.add(&eth),
            Err(Error::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn rejects_amounts_above_max_uint256() {
        let too_big = max_uint256() + 1;
        assert_eq!(
            CurrencyAmount::from_fractional_amount(usdc(), too_big, 1),
            Err(Error::AmountOverflow)
        );
    }

    #[test]
    fn native_amount_wraps() {
        let eth = CurrencyAmount::from_raw_amount(
            NativeCurrency::on_chain(ChainId::Mode),
            U256::new(5),
        );
        let weth = eth.wrapped();
        assert!(weth.currency().is_token());
        assert_eq!(weth.quotient(), BigInt::from(5));
    }
}
