use super::Fraction;
use crate::constants::Rounding;
use num_bigint::BigInt;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Percent(Fraction);

impl Percent {
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Self {
        Self(Fraction::new(numerator, denominator))
    }

    pub fn as_fraction(&self) -> &Fraction {
        &self.0
    }

    pub fn numerator(&self) -> &BigInt {
        self.0.numerator()
    }

    pub fn denominator(&self) -> &BigInt {
        self.0.denominator()
    }

    pub fn add(&self, other: &Percent) -> Percent {
        Percent(self.0.add(&other.0))
    }

    pub fn subtract(&self, other: &Percent) -> Percent {
        Percent(self.0.subtract(&other.0))
    }

    pub fn multiply(&self, other: &Percent) -> Percent {
        Percent(self.0.multiply(&other.0))
    }

    pub fn divide(&self, other: &Percent) -> Percent {
        Percent(self.0.divide(&other.0))
    }

    pub fn greater_than(&self, other: &Percent) -> bool {
        self.0.greater_than(&other.0)
    }

    pub fn less_than(&self, other: &Percent) -> bool {
        self.0.less_than(&other.0)
    }

    /// Formats the percentage value, so `1/4` becomes `"25.00"` with two places.
    pub fn to_fixed(&self, decimal_places: u32, rounding: Rounding) -> String {
        self.0
            .multiply(&Fraction::new(100, 1))
            .to_fixed(decimal_places, rounding)
    }
}

impl From<Fraction> for Percent {
    fn from(fraction: Fraction) -> Self {
        Percent(fraction)
    }
}

impl std::fmt::Display for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.to_fixed(2, Rounding::RoundHalfUp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_as_percentage() {
        assert_eq!(Percent::new(1, 4).to_fixed(2, Rounding::RoundHalfUp), "25.00");
        assert_eq!(Percent::new(1, 3).to_string(), "33.33%");
    }

    #[test]
    fn compares_by_value() {
        assert!(Percent::new(70, 100).greater_than(&Percent::new(3, 10)));
        assert_eq!(Percent::new(40, 100), Percent::new(2, 5));
    }
}
