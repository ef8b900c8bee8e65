use super::ledger::Ledger;
use crate::domain::due::DueEntry;
use crate::domain::money::Money;
use crate::domain::ports::Clock;
use crate::error::Result;

impl<C: Clock> Ledger<C> {
    /// Students who still owe money, in registration order.
    ///
    /// The iterator is computed from the current registry each time it is
    /// requested. Settled and overpaid students are left out.
    pub fn get_due_list(&self) -> impl Iterator<Item = DueEntry> + '_ {
        self.students.values().filter_map(DueEntry::from_student)
    }

    /// Sum of all positive balances.
    pub fn total_outstanding(&self) -> Result<Money> {
        Money::checked_sum(self.get_due_list().map(|entry| entry.balance))
    }
}
