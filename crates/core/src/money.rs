//! Monetary amounts in the smallest currency unit.

use core::iter::Sum;
use core::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Amount in minor units (e.g. cents).
///
/// Integer storage: sums are exact and `Money` is `Eq + Hash`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(0);

    /// Smallest representable amount. Every real total compares greater.
    pub const MIN: Money = Money(i64::MIN);

    const MINOR_PER_MAJOR: i64 = 100;

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    /// `None` when the sum does not fit in `i64` cents.
    pub const fn checked_add(self, rhs: Money) -> Option<Money> {
        match self.0.checked_add(rhs.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Arithmetic mean rounded half away from zero, or `None` for no input.
    pub fn average<I>(amounts: I) -> Option<Money>
    where
        I: IntoIterator<Item = Money>,
    {
        let (sum, count) = amounts
            .into_iter()
            .fold((0i128, 0i128), |(sum, count), m| (sum + m.0 as i128, count + 1));
        if count == 0 {
            return None;
        }

        let mut quotient = sum / count;
        let remainder = sum % count;
        if remainder.abs() * 2 >= count {
            quotient += sum.signum();
        }
        Some(Money(quotient as i64))
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per = Self::MINOR_PER_MAJOR as u64;
        write!(f, "{sign}{}.{:02}", abs / per, abs % per)
    }
}

/// # Panics
///
/// On overflow, in every build profile. Use [`Money::checked_add`] to handle it.
impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        match self.checked_add(rhs) {
            Some(sum) => sum,
            None => panic!("money overflow: {self} + {rhs}"),
        }
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        *self = *self + rhs;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}
