use crate::error::{LedgerError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;

/// Number of fractional digits a fee or payment may carry (paise, cents).
pub const MINOR_UNIT_DIGITS: u32 = 2;

/// A monetary value in the school's currency.
///
/// This is a wrapper around `rust_decimal::Decimal` so that repeated payments
/// never drift the way binary floating point would. It may be negative: an
/// overpaid student has a negative balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

/// A fee charged to a student. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "Money", try_from = "Money")]
pub struct Fee(Money);

/// The amount of a single payment. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "Money", try_from = "Money")]
pub struct Amount(Money);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Adds two values, failing instead of overflowing the decimal range.
    pub fn checked_add(self, rhs: Self) -> Result<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or_else(|| LedgerError::validation("amount is too large"))
    }

    /// Totals a sequence of values, failing instead of overflowing.
    pub fn checked_sum(values: impl IntoIterator<Item = Self>) -> Result<Self> {
        values
            .into_iter()
            .try_fold(Self::ZERO, |total, value| total.checked_add(value))
    }
}

/// Parses user-entered text (a form field, a CSV cell) into a decimal.
pub fn parse_decimal(input: &str) -> Result<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::validation("amount is missing"));
    }
    Decimal::from_str(trimmed)
        .map_err(|_| LedgerError::validation(format!("'{trimmed}' is not a valid number")))
}

fn check_precision(value: Decimal) -> Result<()> {
    if value.normalize().scale() > MINOR_UNIT_DIGITS {
        Err(LedgerError::validation(format!(
            "{value} has more than {MINOR_UNIT_DIGITS} decimal places"
        )))
    } else {
        Ok(())
    }
}

impl Fee {
    pub fn new(value: Decimal) -> Result<Self> {
        if value < Decimal::ZERO {
            return Err(LedgerError::validation("fee must not be negative"));
        }
        check_precision(value)?;
        Ok(Self(Money(value)))
    }

    pub fn money(&self) -> Money {
        self.0
    }
}

impl Amount {
    pub fn new(value: Decimal) -> Result<Self> {
        if value <= Decimal::ZERO {
            return Err(LedgerError::validation("amount must be positive"));
        }
        check_precision(value)?;
        Ok(Self(Money(value)))
    }

    pub fn money(&self) -> Money {
        self.0
    }
}

impl TryFrom<Decimal> for Fee {
    type Error = LedgerError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<Money> for Fee {
    type Error = LedgerError;

    fn try_from(value: Money) -> Result<Self> {
        Self::new(value.0)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = LedgerError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<Money> for Amount {
    type Error = LedgerError;

    fn try_from(value: Money) -> Result<Self> {
        Self::new(value.0)
    }
}

impl From<Fee> for Money {
    fn from(fee: Fee) -> Self {
        fee.0
    }
}

impl From<Amount> for Money {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl fmt::Display for Fee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// Reports and receipts always show two decimal places.
impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
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

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}
