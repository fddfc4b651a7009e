use crate::constants::Rounding;
use num_bigint::{BigInt, BigUint, Sign};
use std::cmp::Ordering;

/// An exact rational number.
///
/// The denominator is kept non-negative so that ordering can be decided by cross
/// multiplication. Equality and ordering are value based: `1/2 == 2/4`.
#[derive(Debug, Clone)]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

impl Fraction {
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Self {
        let numerator = numerator.into();
        let denominator = denominator.into();

        if denominator.sign() == Sign::Minus {
            Self {
                numerator: -numerator,
                denominator: -denominator,
            }
        } else {
            Self {
                numerator,
                denominator,
            }
        }
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Integer part, truncated toward zero.
    pub fn quotient(&self) -> BigInt {
        &self.numerator / &self.denominator
    }

    pub fn remainder(&self) -> Fraction {
        Fraction::new(&self.numerator % &self.denominator, self.denominator.clone())
    }

    pub fn invert(&self) -> Fraction {
        Fraction::new(self.denominator.clone(), self.numerator.clone())
    }

    pub fn add(&self, other: &Fraction) -> Fraction {
        if self.denominator == other.denominator {
            return Fraction::new(&self.numerator + &other.numerator, self.denominator.clone());
        }
        Fraction::new(
            &self.numerator * &other.denominator + &other.numerator * &self.denominator,
            &self.denominator * &other.denominator,
        )
    }

    pub fn subtract(&self, other: &Fraction) -> Fraction {
        if self.denominator == other.denominator {
            return Fraction::new(&self.numerator - &other.numerator, self.denominator.clone());
        }
        Fraction::new(
            &self.numerator * &other.denominator - &other.numerator * &self.denominator,
            &self.denominator * &other.denominator,
        )
    }

    pub fn multiply(&self, other: &Fraction) -> Fraction {
        Fraction::new(
            &self.numerator * &other.numerator,
            &self.denominator * &other.denominator,
        )
    }

    pub fn divide(&self, other: &Fraction) -> Fraction {
        Fraction::new(
            &self.numerator * &other.denominator,
            &self.denominator * &other.numerator,
        )
    }

    pub fn less_than(&self, other: &Fraction) -> bool {
        self.cmp(other) == Ordering::Less
    }

    pub fn equal_to(&self, other: &Fraction) -> bool {
        self.cmp(other) == Ordering::Equal
    }

    pub fn greater_than(&self, other: &Fraction) -> bool {
        self.cmp(other) == Ordering::Greater
    }

    /// Formats the value with exactly `decimal_places` fractional digits.
    pub fn to_fixed(&self, decimal_places: u32, rounding: Rounding) -> String {
        let zero = BigUint::from(0u32);
        let negative = self.numerator.sign() == Sign::Minus;
        let denominator = self.denominator.magnitude();
        let scale = BigUint::from(10u32).pow(decimal_places);

        let scaled = self.numerator.magnitude() * &scale;
        let mut digits = &scaled / denominator;
        let remainder = &scaled % denominator;

        match rounding {
            Rounding::RoundDown => {}
            Rounding::RoundUp => {
                if remainder != zero {
                    digits += 1u32;
                }
            }
            Rounding::RoundHalfUp => {
                if &remainder + &remainder >= *denominator {
                    digits += 1u32;
                }
            }
        }

        let integer_part = &digits / &scale;
        let fractional_part = &digits % &scale;

        let mut formatted = String::new();
        if negative && digits != zero {
            formatted.push('-');
        }
        formatted.push_str(&integer_part.to_string());
        if decimal_places > 0 {
            formatted.push_str(&format!(
                ".{:0>width$}",
                fractional_part.to_string(),
                width = decimal_places as usize
            ));
        }
        formatted
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.equal_to(other)
    }
}

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Self {
        Fraction::new(value, 1)
    }
}

impl std::fmt::Display for Fraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
