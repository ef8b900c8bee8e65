//! Front-end adapters: CSV command scripts, CSV reports and printed receipts.

pub mod csv;
pub mod receipt_printer;
