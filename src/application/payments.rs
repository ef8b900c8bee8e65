use super::ledger::{Ledger, unknown_student};
use crate::domain::money::Amount;
use crate::domain::ports::Clock;
use crate::domain::receipt::{Receipt, ReceiptNo};
use crate::domain::student::StudentId;
use crate::error::Result;
use rust_decimal::Decimal;
use tracing::debug;

impl<C: Clock> Ledger<C> {
    /// Records a payment against a student and issues the next receipt.
    ///
    /// Overpayment is allowed. Everything that can fail is checked before the
    /// paid total or the receipt log is touched, so a rejected payment leaves
    /// both as they were.
    pub fn record_payment(&mut self, student_id: StudentId, amount: Decimal) -> Result<Receipt> {
        let student = self
            .students
            .get_mut(&student_id)
            .ok_or_else(|| unknown_student(student_id))?;
        let amount = Amount::new(amount)?;
        let paid = student.paid.checked_add(amount.money())?;

        let receipt = Receipt {
            receipt_no: ReceiptNo::from_sequence(self.receipts.len() + 1),
            student_id,
            name: student.name.clone(),
            class: student.class.clone(),
            amount,
            issued_at: self.clock.now(),
        };

        student.paid = paid;
        self.receipts.push(receipt.clone());
        debug!(
            student = %student_id,
            receipt = %receipt.receipt_no,
            amount = %receipt.amount,
            "payment recorded"
        );
        Ok(receipt)
    }
}
