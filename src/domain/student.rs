use super::money::{Fee, Money};
use crate::error::{LedgerError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned to a student at registration. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(u32);

impl StudentId {
    pub const FIRST: Self = Self(1);

    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// The id after this one, or `None` once the id space is used up.
    pub(crate) fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl From<u32> for StudentId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The editable part of a student record, validated as a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Enrollment {
    pub name: String,
    pub class: String,
    pub fee: Fee,
}

impl Enrollment {
    /// Validates the fields of a registration or update form.
    ///
    /// Name and class are trimmed and must not be empty afterwards.
    pub fn new(name: &str, class: &str, fee: Decimal) -> Result<Self> {
        let name = name.trim();
        let class = class.trim();
        if name.is_empty() {
            return Err(LedgerError::validation("name must not be empty"));
        }
        if class.is_empty() {
            return Err(LedgerError::validation("class must not be empty"));
        }
        Ok(Self {
            name: name.to_string(),
            class: class.to_string(),
            fee: Fee::new(fee)?,
        })
    }
}

/// A registered student and the running total of what they have paid.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub class: String,
    /// Annual fee charged to the student.
    pub fee: Fee,
    /// Sum of every payment recorded against this student.
    pub paid: Money,
}

impl Student {
    pub(crate) fn enroll(id: StudentId, enrollment: Enrollment) -> Self {
        Self {
            id,
            name: enrollment.name,
            class: enrollment.class,
            fee: enrollment.fee,
            paid: Money::ZERO,
        }
    }

    /// Overwrites name, class and fee. The paid total is left alone.
    pub(crate) fn amend(&mut self, enrollment: Enrollment) {
        self.name = enrollment.name;
        self.class = enrollment.class;
        self.fee = enrollment.fee;
    }

    /// Fee minus paid. Positive means money is owed.
    pub fn balance(&self) -> Money {
        self.fee.money() - self.paid
    }

    pub fn has_payments(&self) -> bool {
        self.paid.is_positive()
    }
}
