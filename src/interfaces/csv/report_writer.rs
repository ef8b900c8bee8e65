use crate::domain::due::DueEntry;
use crate::domain::receipt::Receipt;
use crate::domain::student::Student;
use crate::error::{LedgerError, Result};
use serde::Serialize;
use std::io::Write;

pub const STUDENT_HEADER: [&str; 5] = ["id", "name", "class", "fee", "paid"];
pub const DUE_HEADER: [&str; 6] = ["id", "name", "class", "fee", "paid", "balance"];
pub const RECEIPT_HEADER: [&str; 6] = ["receipt_no", "student_id", "name", "class", "amount", "date"];

/// Writes ledger views as CSV.
///
/// The header row is always written, so an empty report is still a valid
/// table.
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(sink: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(sink);
        Self { writer }
    }

    pub fn write_students<'a>(
        &mut self,
        students: impl IntoIterator<Item = &'a Student>,
    ) -> Result<()> {
        self.write_rows(&STUDENT_HEADER, students)
    }

    pub fn write_due_list(&mut self, entries: impl IntoIterator<Item = DueEntry>) -> Result<()> {
        self.write_rows(&DUE_HEADER, entries)
    }

    pub fn write_receipts<'a>(
        &mut self,
        receipts: impl IntoIterator<Item = &'a Receipt>,
    ) -> Result<()> {
        self.write_rows(&RECEIPT_HEADER, receipts)
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| LedgerError::IoError(e.into_error()))
    }

    fn write_rows<T: Serialize>(
        &mut self,
        header: &[&str],
        rows: impl IntoIterator<Item = T>,
    ) -> Result<()> {
        self.writer.write_record(header)?;
        for row in rows {
            self.writer.serialize(row)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
