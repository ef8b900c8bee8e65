use super::ledger::Ledger;
use crate::domain::due::DueEntry;
use crate::domain::ports::Clock;
use crate::domain::receipt::Receipt;
use crate::domain::student::{Student, StudentId};
use crate::error::Result;
use rust_decimal::Decimal;

/// A request from the front office: one button press or one script line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddStudent {
        name: String,
        class: String,
        fee: Decimal,
    },
    UpdateStudent {
        id: StudentId,
        name: String,
        class: String,
        fee: Decimal,
    },
    DeleteStudent {
        id: StudentId,
    },
    RecordPayment {
        student_id: StudentId,
        amount: Decimal,
    },
    GetStudent {
        id: StudentId,
    },
    ListStudents,
    DueList,
    ListReceipts,
    StudentReceipts {
        student_id: StudentId,
    },
}

/// What a successfully executed [`Command`] produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    StudentAdded(StudentId),
    StudentUpdated(StudentId),
    StudentDeleted(StudentId),
    PaymentRecorded(Receipt),
    Student(Student),
    Students(Vec<Student>),
    DueList(Vec<DueEntry>),
    Receipts(Vec<Receipt>),
}

impl<C: Clock> Ledger<C> {
    /// Executes a command against the ledger.
    pub fn apply(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::AddStudent { name, class, fee } => {
                self.add_student(&name, &class, fee).map(Outcome::StudentAdded)
            }
            Command::UpdateStudent {
                id,
                name,
                class,
                fee,
            } => {
                self.update_student(id, &name, &class, fee)?;
                Ok(Outcome::StudentUpdated(id))
            }
            Command::DeleteStudent { id } => {
                self.delete_student(id)?;
                Ok(Outcome::StudentDeleted(id))
            }
            Command::RecordPayment { student_id, amount } => self
                .record_payment(student_id, amount)
                .map(Outcome::PaymentRecorded),
            Command::GetStudent { id } => self.get_student(id).cloned().map(Outcome::Student),
            Command::ListStudents => Ok(Outcome::Students(
                self.list_students().cloned().collect(),
            )),
            Command::DueList => Ok(Outcome::DueList(self.get_due_list().collect())),
            Command::ListReceipts => Ok(Outcome::Receipts(self.receipts().to_vec())),
            Command::StudentReceipts { student_id } => Ok(Outcome::Receipts(
                self.payments_for(student_id).cloned().collect(),
            )),
        }
    }
}
