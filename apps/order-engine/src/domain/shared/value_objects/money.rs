//! Money value object for currency amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A monetary amount in BDT (Bangladeshi taka).
///
/// Represented as a Decimal for precise totals arithmetic. Order lines and
/// totals in this domain are whole-taka amounts, but internal precision is
/// kept so discounts and fees never lose cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new Money value from a Decimal.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a Money value from a whole-taka amount.
    #[must_use]
    pub fn bdt(amount: i64) -> Self {
        Self(Decimal::new(amount, 0))
    }

    /// Get the inner Decimal value.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if this amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns true if this amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == Decimal::ZERO
    }

    /// Clamp a negative amount to zero.
    ///
    /// Totals must never go below zero when a flat discount exceeds
    /// subtotal plus delivery fee.
    #[must_use]
    pub fn clamp_non_negative(self) -> Self {
        if self.is_negative() { Self::ZERO } else { self }
    }

    /// The smaller of two amounts.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        if self.0 <= other.0 { self } else { other }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "৳{}", self.0)
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self::Output {
        Self(self.0 * Decimal::from(rhs))
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn money_keeps_fractional_amounts() {
        let m = Money::new(dec!(1050.50));
        assert_eq!(m.amount(), dec!(1050.50));
        assert_eq!(m + Money::new(dec!(0.50)), Money::new(dec!(1051)));
    }

    #[test]
    fn money_bdt_and_display() {
        let m = Money::bdt(1500);
        assert_eq!(format!("{m}"), "৳1500");
    }

    #[test]
    fn money_zero() {
        assert!(Money::ZERO.is_zero());
        assert!(!Money::ZERO.is_negative());
    }

    #[test]
    fn money_arithmetic() {
        let a = Money::bdt(1000);
        let b = Money::bdt(50);

        assert_eq!(a + b, Money::bdt(1050));
        assert_eq!(a - b, Money::bdt(950));
        assert_eq!(b * 3, Money::bdt(150));
    }

    #[test]
    fn money_clamp_non_negative() {
        let negative = Money::bdt(100) - Money::bdt(250);
        assert!(negative.is_negative());
        assert_eq!(negative.clamp_non_negative(), Money::ZERO);

        let positive = Money::bdt(100);
        assert_eq!(positive.clamp_non_negative(), positive);
    }

    #[test]
    fn money_min() {
        assert_eq!(Money::bdt(50).min(Money::bdt(1000)), Money::bdt(50));
        assert_eq!(Money::bdt(1000).min(Money::bdt(50)), Money::bdt(50));
    }

    #[test]
    fn money_ordering() {
        assert!(Money::bdt(100) > Money::bdt(50));
        assert!(Money::bdt(50) < Money::bdt(100));
        assert!(Money::bdt(100) >= Money::bdt(100));
    }

    #[test]
    fn money_serde_roundtrip() {
        let m = Money::bdt(1050);
        let json = serde_json::to_string(&m).unwrap();
        let parsed: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, m);
    }
}
