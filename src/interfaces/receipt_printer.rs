use crate::domain::receipt::{Receipt, TIMESTAMP_FORMAT};

pub const DEFAULT_CURRENCY: &str = "₹";

/// Renders a receipt as a small read-only text document.
#[derive(Debug, Clone)]
pub struct ReceiptPrinter {
    currency: String,
}

impl Default for ReceiptPrinter {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY)
    }
}

impl ReceiptPrinter {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }

    pub fn render(&self, receipt: &Receipt) -> String {
        format!(
            "Receipt No: {}\nDate: {}\nStudent: {} (Class {})\nAmount Paid: {}{}\n",
            receipt.receipt_no,
            receipt.issued_at.format(TIMESTAMP_FORMAT),
            receipt.name,
            receipt.class,
            self.currency,
            receipt.amount,
        )
    }
}
