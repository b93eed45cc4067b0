//! Fixed-point token amounts in smallest integer units.

use std::fmt;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Implied decimal places of bridge capacity values.
pub const CAPACITY_DECIMALS: u32 = 8;

/// Implied decimal places of native gas balances (wei).
pub const NATIVE_DECIMALS: u32 = 18;

/// Reasons a decimal amount cannot be represented in smallest units.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("amount must not be negative: {0}")]
    Negative(Decimal),

    #[error("amount {value} has more than {decimals} decimal places")]
    TooPrecise { value: Decimal, decimals: u32 },

    #[error("amount {0} does not fit in smallest units")]
    Overflow(Decimal),
}

/// An unsigned quantity in the token's smallest unit.
///
/// Comparisons are exact integer comparisons; no floating point is
/// involved anywhere between configuration and the trigger decision.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(u128);

impl Amount {
    pub const ZERO: Self = Self(0);

    /// Wrap a raw smallest-unit value.
    #[must_use]
    pub const fn from_units(units: u128) -> Self {
        Self(units)
    }

    /// Raw smallest-unit value.
    #[must_use]
    pub const fn units(self) -> u128 {
        self.0
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Scale a decimal token amount by `10^decimals`.
    ///
    /// `2000` at 8 decimals becomes `200_000_000_000`.
    pub fn from_decimal(value: Decimal, decimals: u32) -> Result<Self, AmountError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(AmountError::Negative(value));
        }
        let factor = 10u128
            .checked_pow(decimals)
            .and_then(Decimal::from_u128)
            .ok_or(AmountError::Overflow(value))?;
        let scaled = value
            .checked_mul(factor)
            .ok_or(AmountError::Overflow(value))?;
        if !scaled.fract().is_zero() {
            return Err(AmountError::TooPrecise { value, decimals });
        }
        scaled
            .trunc()
            .to_u128()
            .map(Self)
            .ok_or(AmountError::Overflow(value))
    }

    /// Render in whole-token units for display.
    ///
    /// `None` when the value exceeds what a `Decimal` can hold.
    #[must_use]
    pub fn to_decimal(self, decimals: u32) -> Option<Decimal> {
        let mut value = Decimal::from_u128(self.0)?;
        value.set_scale(decimals).ok()?;
        Some(value.normalize())
    }

    /// Human-readable token amount, e.g. `2000` or `0.5`.
    ///
    /// Falls back to the raw unit count when the value exceeds what a
    /// `Decimal` can hold.
    #[must_use]
    pub fn display(self, decimals: u32) -> String {
        match self.to_decimal(decimals) {
            Some(value) => value.to_string(),
            None => format!("{} units", self.0),
        }
    }

    /// Change from `previous` to `self`.
    #[must_use]
    pub fn delta_from(self, previous: Self) -> Delta {
        match self.0.cmp(&previous.0) {
            std::cmp::Ordering::Greater => Delta::Increase(Self(self.0 - previous.0)),
            std::cmp::Ordering::Less => Delta::Decrease(Self(previous.0 - self.0)),
            std::cmp::Ordering::Equal => Delta::Unchanged,
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Signed change between two consecutive readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Delta {
    Increase(Amount),
    /// Capacity was cut by this much since the previous reading.
    Decrease(Amount),
    Unchanged,
}

impl Delta {
    /// The cut amount, if capacity went down.
    #[must_use]
    pub fn cut(self) -> Option<Amount> {
        match self {
            Delta::Decrease(amount) => Some(amount),
            _ => None,
        }
    }
}
