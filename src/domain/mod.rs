//! Domain types of the fee ledger: money, students, receipts and due entries.

pub mod due;
pub mod money;
pub mod ports;
pub mod receipt;
pub mod student;
