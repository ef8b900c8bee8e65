use super::money::Amount;
use super::student::StudentId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format used to display and serialize receipt timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Receipt number: `RC` followed by the 1-based payment sequence,
/// zero-padded to four digits. Wider sequences simply grow.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptNo(String);

impl ReceiptNo {
    pub fn from_sequence(sequence: usize) -> Self {
        Self(format!("RC{sequence:04}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for ReceiptNo {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ReceiptNo {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// An immutable record of one payment.
///
/// Name and class are copied from the student when the payment is taken,
/// so later edits to the student do not rewrite issued receipts.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Receipt {
    pub receipt_no: ReceiptNo,
    pub student_id: StudentId,
    pub name: String,
    pub class: String,
    pub amount: Amount,
    #[serde(rename = "date", with = "timestamp")]
    pub issued_at: NaiveDateTime,
}

mod timestamp {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
