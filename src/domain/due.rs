use super::money::{Fee, Money};
use super::student::{Student, StudentId};
use serde::Serialize;

/// One row of the due list: a student who still owes part of their fee.
///
/// Derived on demand from the registry and never stored.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct DueEntry {
    pub id: StudentId,
    pub name: String,
    pub class: String,
    pub fee: Fee,
    pub paid: Money,
    pub balance: Money,
}

impl DueEntry {
    /// Returns the entry for `student` if their balance is positive.
    pub fn from_student(student: &Student) -> Option<Self> {
        let balance = student.balance();
        balance.is_positive().then(|| Self {
            id: student.id,
            name: student.name.clone(),
            class: student.class.clone(),
            fee: student.fee,
            paid: student.paid,
            balance,
        })
    }
}
