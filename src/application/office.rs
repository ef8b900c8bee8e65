use super::command::{Command, Outcome};
use super::ledger::Ledger;
use crate::domain::ports::Clock;
use crate::error::Result;
use crate::infrastructure::clock::SystemClock;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

/// Shared front-desk handle to a [`Ledger`].
///
/// Clones share the same ledger. Each command holds the lock until it has
/// finished, so mutations coming from several UI tasks are applied one at a
/// time and counters stay monotonic.
pub struct FeeOffice<C: Clock = SystemClock> {
    ledger: Arc<Mutex<Ledger<C>>>,
}

impl<C: Clock> Clone for FeeOffice<C> {
    fn clone(&self) -> Self {
        Self {
            ledger: Arc::clone(&self.ledger),
        }
    }
}

impl<C: Clock> FeeOffice<C> {
    pub fn new(ledger: Ledger<C>) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(ledger)),
        }
    }

    /// Executes one command. A rejected command leaves the ledger unchanged.
    pub async fn execute(&self, command: Command) -> Result<Outcome> {
        let mut ledger = self.ledger.lock().await;
        ledger.apply(command).inspect_err(|e| {
            info!(error = %e, "command rejected");
        })
    }

    /// Gives back the ledger if this is the last handle.
    pub fn into_ledger(self) -> std::result::Result<Ledger<C>, Self> {
        Arc::try_unwrap(self.ledger)
            .map(Mutex::into_inner)
            .map_err(|ledger| Self { ledger })
    }
}

impl<C: Clock + Clone> FeeOffice<C> {
    /// A copy of the ledger as it is right now.
    pub async fn snapshot(&self) -> Ledger<C> {
        self.ledger.lock().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ledger::tests::test_ledger;
    use crate::domain::money::Money;
    use crate::domain::student::StudentId;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_execute_and_snapshot() {
        let office = FeeOffice::new(test_ledger());
        let outcome = office
            .execute(Command::AddStudent {
                name: "Asha".to_string(),
                class: "5B".to_string(),
                fee: dec!(1000),
            })
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::StudentAdded(StudentId::FIRST));

        let snapshot = office.snapshot().await;
        assert_eq!(snapshot.len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_payments_are_serialised() {
        let mut ledger = test_ledger();
        let id = ledger.add_student("Asha", "5B", dec!(100000)).unwrap();
        let office = FeeOffice::new(ledger);

        let mut handles = Vec::new();
        for _ in 0..50 {
            let office = office.clone();
            handles.push(tokio::spawn(async move {
                office
                    .execute(Command::RecordPayment {
                        student_id: id,
                        amount: dec!(10),
                    })
                    .await
                    .unwrap()
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let ledger = office.snapshot().await;
        assert_eq!(ledger.get_student(id).unwrap().paid, Money::new(dec!(500)));

        let numbers: Vec<String> = ledger
            .receipts()
            .iter()
            .map(|r| r.receipt_no.to_string())
            .collect();
        let expected: Vec<String> = (1..=50).map(|n| format!("RC{n:04}")).collect();
        assert_eq!(numbers, expected);
    }

    #[tokio::test]
    async fn test_into_ledger_with_live_clone() {
        let office = FeeOffice::new(test_ledger());
        let other = office.clone();
        let office = office.into_ledger().err().unwrap();
        drop(other);
        assert!(office.into_ledger().is_ok());
    }
}
