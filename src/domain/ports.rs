use chrono::NaiveDateTime;

/// Source of wall-clock time for stamping receipts.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

pub type ClockBox = Box<dyn Clock>;

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
