use crate::application::command::Command;
use crate::domain::money::parse_decimal;
use crate::domain::student::StudentId;
use crate::error::{LedgerError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    Add,
    Update,
    Delete,
    Pay,
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CommandKind::Add => "add",
            CommandKind::Update => "update",
            CommandKind::Delete => "delete",
            CommandKind::Pay => "pay",
        })
    }
}

/// One row of a command script: `command, id, name, class, amount`.
///
/// For `add` and `update` the amount column holds the fee.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct CommandRecord {
    pub command: CommandKind,
    pub id: Option<u32>,
    pub name: Option<String>,
    pub class: Option<String>,
    pub amount: Option<String>,
}

impl CommandRecord {
    fn student_id(&self) -> Result<StudentId> {
        self.id.map(StudentId::new).ok_or_else(|| {
            LedgerError::validation(format!("{} requires a student id", self.command))
        })
    }

    fn amount(&self) -> Result<Decimal> {
        parse_decimal(self.amount.as_deref().unwrap_or_default())
    }
}

impl TryFrom<CommandRecord> for Command {
    type Error = LedgerError;

    fn try_from(record: CommandRecord) -> Result<Self> {
        Ok(match record.command {
            CommandKind::Add => Command::AddStudent {
                fee: record.amount()?,
                name: record.name.unwrap_or_default(),
                class: record.class.unwrap_or_default(),
            },
            CommandKind::Update => Command::UpdateStudent {
                id: record.student_id()?,
                fee: record.amount()?,
                name: record.name.unwrap_or_default(),
                class: record.class.unwrap_or_default(),
            },
            CommandKind::Delete => Command::DeleteStudent {
                id: record.student_id()?,
            },
            CommandKind::Pay => Command::RecordPayment {
                student_id: record.student_id()?,
                amount: record.amount()?,
            },
        })
    }
}

/// Reads office commands from a CSV source.
///
/// Wraps `csv::Reader`, trimming whitespace and tolerating short rows, so a
/// `delete` line does not need trailing commas.
pub struct CommandReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CommandReader<R> {
    /// Reads a command script with a header row. Fields are trimmed.
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and decodes command rows.
    pub fn records(self) -> impl Iterator<Item = Result<CommandRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(LedgerError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn read(data: &str) -> Vec<Result<CommandRecord>> {
        CommandReader::new(data.as_bytes()).records().collect()
    }

    #[test]
    fn test_reader_valid_stream() {
        let data = "command, id, name, class, amount\n\
                    add, , Asha, 5B, 1000.0\n\
                    pay, 1, , , 400\n\
                    delete, 2";
        let results = read(data);
        assert_eq!(results.len(), 3);

        let add = Command::try_from(results[0].as_ref().unwrap().clone()).unwrap();
        assert_eq!(
            add,
            Command::AddStudent {
                name: "Asha".to_string(),
                class: "5B".to_string(),
                fee: dec!(1000.0),
            }
        );

        let pay = Command::try_from(results[1].as_ref().unwrap().clone()).unwrap();
        assert_eq!(
            pay,
            Command::RecordPayment {
                student_id: StudentId::new(1),
                amount: dec!(400),
            }
        );

        let delete = Command::try_from(results[2].as_ref().unwrap().clone()).unwrap();
        assert_eq!(
            delete,
            Command::DeleteStudent {
                id: StudentId::new(2)
            }
        );
    }

    #[test]
    fn test_reader_update_row() {
        let results = read("command,id,name,class,amount\nupdate,3,Ravi,4A,850.50");
        let update = Command::try_from(results[0].as_ref().unwrap().clone()).unwrap();
        assert_eq!(
            update,
            Command::UpdateStudent {
                id: StudentId::new(3),
                name: "Ravi".to_string(),
                class: "4A".to_string(),
                fee: dec!(850.50),
            }
        );
    }

    #[test]
    fn test_reader_malformed_line() {
        let results = read("command, id, name, class, amount\nrefund, 1, , , 1.0");
        assert!(matches!(results[0], Err(LedgerError::CsvError(_))));

        let results = read("command, id, name, class, amount\npay, abc, , , 1.0");
        assert!(matches!(results[0], Err(LedgerError::CsvError(_))));
    }

    #[test]
    fn test_non_numeric_amount_is_validation_error() {
        let results = read("command, id, name, class, amount\npay, 1, , , lots");
        let record = results[0].as_ref().unwrap().clone();
        assert!(matches!(
            Command::try_from(record),
            Err(LedgerError::ValidationError(_))
        ));
    }

    #[test]
    fn test_missing_id_is_validation_error() {
        let results = read("command, id, name, class, amount\npay, , , , 10");
        let record = results[0].as_ref().unwrap().clone();
        let err = Command::try_from(record).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: pay requires a student id"
        );
    }
}
