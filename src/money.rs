//! Currency amounts held as integer cents.
//!
//! Balances and report totals are sums of many entered amounts, so they are
//! accumulated in cents to keep the numbers exact.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Largest magnitude the ledger accepts, per amount and per running
    /// total: `Number.MAX_SAFE_INTEGER` cents, so every value also converts
    /// to an `f64` without loss.
    pub const MAX: Money = Money(9_007_199_254_740_991);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    /// Converts a decimal amount as typed into a form, rounding to the
    /// nearest cent.
    pub fn from_decimal(amount: f64) -> Result<Self, ValidationError> {
        if !amount.is_finite() {
            return Err(ValidationError::NonFiniteAmount);
        }
        let cents = (amount * 100.0).round();
        if cents.abs() > Self::MAX.0 as f64 {
            return Err(ValidationError::AmountOutOfRange);
        }
        Ok(Self(cents as i64))
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole units, truncated toward zero and without sign.
    pub const fn units(&self) -> u64 {
        self.0.unsigned_abs() / 100
    }

    /// Fractional cents, 0-99, without sign.
    pub const fn cents_part(&self) -> u64 {
        self.0.unsigned_abs() % 100
    }

    /// `self + other`, or `None` when the result leaves `[-MAX, MAX]`.
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0
            .checked_add(other.0)
            .filter(|cents| cents.unsigned_abs() <= Self::MAX.0 as u64)
            .map(Money)
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.units(), self.cents_part())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}
