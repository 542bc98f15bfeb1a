//! Fixed-point currency amounts.
//!
//! Wraps `rust_decimal` and pins every value to two decimal places (cents),
//! so balances never drift the way binary floating point does.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// A monetary amount with exactly two decimal places.
///
/// Values with more precision are rounded half away from zero when they are
/// created, so `0.005` becomes `0.01` and `0.004` becomes `0.00`.
///
/// Every value carries exactly two decimal places, which caps the range at
/// [`Money::MAX`]. Arithmetic is checked: results outside that range come
/// back as `None` instead of panicking or being silently rounded.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use bank_ledger::Money;
///
/// let amount = Money::from_str("10.5").unwrap();
/// assert_eq!(amount.to_string(), "10.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    /// Number of decimal places kept.
    pub const SCALE: u32 = 2;

    pub const ZERO: Self = Money(Decimal::from_parts(0, 0, 0, false, 2));

    /// Largest representable amount: `792281625142643375935439503.35`.
    pub const MAX: Self = Money(Decimal::from_parts(u32::MAX, u32::MAX, u32::MAX, false, 2));

    /// Rounds `value` to cents, or `None` if it is too large to keep two places.
    fn new(value: Decimal) -> Option<Self> {
        let mut rounded =
            value.round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(Self::SCALE);
        (rounded.scale() == Self::SCALE).then_some(Money(rounded))
    }

    /// Returns `true` for amounts strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// `self + rhs`, or `None` on overflow.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).and_then(Money::new)
    }

    /// `self - rhs`, or `None` on overflow.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).and_then(Money::new)
    }
}

impl From<i64> for Money {
    fn from(units: i64) -> Self {
        Money(Decimal::from_i128_with_scale(i128::from(units) * 100, Self::SCALE))
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s.trim())?;
        Money::new(decimal).ok_or(if decimal.is_sign_negative() {
            rust_decimal::Error::LessThanMinimumPossibleValue
        } else {
            rust_decimal::Error::ExceedsMaximumPossibleValue
        })
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Money::from_str(&s).map_err(|e| serde::de::Error::custom(format!("bad amount '{}': {}", s, e)))
    }
}
