//! Monetary amounts.

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

/// An amount of money in dollars.
///
/// Wraps an `f64` so that prices and balances cannot be confused with
/// other numeric quantities. Arithmetic is provided for the operations
/// the booking flow needs: summing costs and debiting a wallet.
///
/// # Examples
///
/// ```
/// use travel_cli::domain::Money;
///
/// let fare = Money::from_dollars(80.0);
/// assert_eq!(fare.to_string(), "$80.00");
/// assert_eq!(fare + Money::from_dollars(20.0), Money::from_dollars(100.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Money(f64);

impl Money {
    /// Zero dollars.
    pub const ZERO: Money = Money(0.0);

    /// Creates an amount from a dollar value.
    ///
    /// Callers are expected to pass non-negative amounts; the booking
    /// flow validates user input before constructing one.
    pub fn from_dollars(dollars: f64) -> Self {
        Money(dollars)
    }

    /// Returns the amount as a dollar value.
    pub fn as_dollars(&self) -> f64 {
        self.0
    }

    /// Total ordering for sorting, via `f64::total_cmp`.
    pub fn total_cmp(&self, other: &Money) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}
