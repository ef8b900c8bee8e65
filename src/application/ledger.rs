use crate::domain::money::Money;
use crate::domain::ports::Clock;
use crate::domain::receipt::Receipt;
use crate::domain::student::{Enrollment, Student, StudentId};
use crate::error::{LedgerError, Result};
use crate::infrastructure::clock::SystemClock;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::debug;

/// The authoritative in-memory store of students and payments.
///
/// `Ledger` owns the student registry, the append-only receipt log and the
/// counters that number them. Ids are handed out in increasing order and
/// never reused, so iterating the registry by id is insertion order.
///
/// Every operation is synchronous and either completes or leaves the ledger
/// untouched.
#[derive(Debug, Clone)]
pub struct Ledger<C: Clock = SystemClock> {
    pub(super) students: BTreeMap<StudentId, Student>,
    pub(super) receipts: Vec<Receipt>,
    next_id: StudentId,
    pub(super) clock: C,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Creates an empty ledger stamping receipts with the local time.
    pub fn new() -> Self {
        Self::with_clock(SystemClock::new())
    }
}

pub(super) fn unknown_student(id: StudentId) -> LedgerError {
    LedgerError::not_found(format!("student {id} does not exist"))
}

impl<C: Clock> Ledger<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            students: BTreeMap::new(),
            receipts: Vec::new(),
            next_id: StudentId::FIRST,
            clock,
        }
    }

    /// Registers a student with nothing paid and returns the new id.
    pub fn add_student(&mut self, name: &str, class: &str, fee: Decimal) -> Result<StudentId> {
        let enrollment = Enrollment::new(name, class, fee)?;
        let id = self.next_id;
        self.next_id = id
            .next()
            .ok_or_else(|| LedgerError::validation("no student ids left to assign"))?;
        self.students.insert(id, Student::enroll(id, enrollment));
        debug!(student = %id, "student added");
        Ok(id)
    }

    /// Overwrites name, class and fee of an existing student.
    pub fn update_student(
        &mut self,
        id: StudentId,
        name: &str,
        class: &str,
        fee: Decimal,
    ) -> Result<()> {
        let student = self
            .students
            .get_mut(&id)
            .ok_or_else(|| unknown_student(id))?;
        student.amend(Enrollment::new(name, class, fee)?);
        debug!(student = %id, "student updated");
        Ok(())
    }

    /// Removes a student who has never paid anything.
    pub fn delete_student(&mut self, id: StudentId) -> Result<()> {
        let student = self.students.get(&id).ok_or_else(|| unknown_student(id))?;
        if student.has_payments() {
            return Err(LedgerError::InvariantViolation(
                "cannot delete a student with recorded payments".to_string(),
            ));
        }
        self.students.remove(&id);
        debug!(student = %id, "student deleted");
        Ok(())
    }

    pub fn get_student(&self, id: StudentId) -> Result<&Student> {
        self.students.get(&id).ok_or_else(|| unknown_student(id))
    }

    /// Students in the order they were registered.
    pub fn list_students(&self) -> impl Iterator<Item = &Student> + '_ {
        self.students.values()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// The payment log in issue order.
    pub fn receipts(&self) -> &[Receipt] {
        &self.receipts
    }

    pub fn find_receipt(&self, receipt_no: &str) -> Result<&Receipt> {
        self.receipts
            .iter()
            .find(|receipt| receipt.receipt_no == receipt_no)
            .ok_or_else(|| LedgerError::not_found(format!("receipt {receipt_no} does not exist")))
    }

    /// Receipts issued to one student, oldest first.
    pub fn payments_for(&self, student_id: StudentId) -> impl Iterator<Item = &Receipt> + '_ {
        self.receipts
            .iter()
            .filter(move |receipt| receipt.student_id == student_id)
    }

    /// Sum of every payment taken so far.
    pub fn total_collected(&self) -> Result<Money> {
        Money::checked_sum(self.receipts.iter().map(|receipt| receipt.amount.money()))
    }
}
