//! Exact monetary amounts.
//!
//! Prize tables contain fractional amounts (the smallest standard prize is
//! 0.05), so amounts are stored as integer centavos. Arithmetic that needs
//! fractions (means, percentages) converts through `f64` units and back.

use serde::{Deserialize, Serialize};

/// Centavos per whole currency unit.
pub const CENTS_PER_UNIT: u64 = 100;

/// A non-negative amount of money, in centavos.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(pub u64);

impl Money {
    /// Zero.
    pub const ZERO: Money = Money(0);

    /// Create an amount from centavos.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Create an amount from whole units.
    #[must_use]
    pub const fn from_units(units: u64) -> Self {
        Self(units * CENTS_PER_UNIT)
    }

    /// Create an amount from fractional units, rounding to the nearest
    /// centavo. Negative and non-finite inputs clamp to zero.
    #[must_use]
    pub fn from_units_f64(units: f64) -> Self {
        if !units.is_finite() || units <= 0.0 {
            return Self::ZERO;
        }
        Self((units * CENTS_PER_UNIT as f64).round() as u64)
    }

    /// Raw centavos.
    #[must_use]
    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Value in (fractional) units.
    #[must_use]
    pub fn as_units(self) -> f64 {
        self.0 as f64 / CENTS_PER_UNIT as f64
    }

    /// Subtract, stopping at zero.
    #[must_use]
    pub const fn saturating_sub(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }

    /// Absolute difference between two amounts.
    #[must_use]
    pub const fn abs_diff(self, other: Money) -> Money {
        Money(self.0.abs_diff(other.0))
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl std::fmt::Display for Money {
    /// Formats as `₱ 1,234` or `₱ 0.05` (centavos only when non-zero).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let units = self.0 / CENTS_PER_UNIT;
        let cents = self.0 % CENTS_PER_UNIT;

        let digits = units.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        if cents == 0 {
            write!(f, "₱ {}", grouped)
        } else {
            write!(f, "₱ {}.{:02}", grouped, cents)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_and_cents() {
        assert_eq!(Money::from_units(5).cents(), 500);
        assert_eq!(Money::from_cents(5).as_units(), 0.05);
        assert_eq!(Money::from_units_f64(0.05), Money::from_cents(5));
        assert_eq!(Money::from_units_f64(-3.0), Money::ZERO);
        assert_eq!(Money::from_units_f64(f64::NAN), Money::ZERO);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_units(0).to_string(), "₱ 0");
        assert_eq!(Money::from_cents(5).to_string(), "₱ 0.05");
        assert_eq!(Money::from_units(750).to_string(), "₱ 750");
        assert_eq!(Money::from_units(4000).to_string(), "₱ 4,000");
        assert_eq!(Money::from_units(1_234_567).to_string(), "₱ 1,234,567");
    }

    #[test]
    fn test_ordering_and_arithmetic() {
        let a = Money::from_units(100);
        let b = Money::from_units(500);
        assert!(a < b);
        assert_eq!(b.saturating_sub(a), Money::from_units(400));
        assert_eq!(a.saturating_sub(b), Money::ZERO);
        assert_eq!(a.abs_diff(b), Money::from_units(400));
        assert_eq!(a + b, Money::from_units(600));
    }
}
