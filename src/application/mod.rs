//! Application layer: the ledger and the operations built on it.
//!
//! `Ledger` owns students and receipts. Payment recording and the due list
//! are implemented on it in their own modules. `FeeOffice` wraps a ledger in
//! a `tokio` mutex so that any front end can dispatch `Command`s to it.

pub mod command;
pub mod due_list;
pub mod ledger;
pub mod office;
pub mod payments;
