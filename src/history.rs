//! Per-account transaction history.

use crate::clock::{Clock, SystemClock};
use crate::money::Money;
use crate::transaction::{Transaction, TransactionKind};
use chrono::NaiveDateTime;
use std::rc::Rc;

/// Format used when rendering record timestamps: `day-month-year h:m:s`.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// One successfully registered transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    pub kind: TransactionKind,
    pub amount: Money,
    pub timestamp: NaiveDateTime,
}

impl HistoryRecord {
    /// Timestamp rendered with [`TIMESTAMP_FORMAT`].
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Append-only log of an account's applied transactions, oldest first.
///
/// Records are only ever pushed; nothing is edited or removed.
#[derive(Debug, Clone)]
pub struct History {
    records: Vec<HistoryRecord>,
    clock: Rc<dyn Clock>,
}

impl History {
    /// Creates an empty history stamped by the local wall clock.
    pub fn new() -> Self {
        Self::with_clock(Rc::new(SystemClock))
    }

    pub fn with_clock(clock: Rc<dyn Clock>) -> Self {
        History {
            records: Vec::new(),
            clock,
        }
    }

    /// Appends a record for `transaction`, stamped with the current time.
    pub fn add(&mut self, transaction: &Transaction) {
        self.records.push(HistoryRecord {
            kind: transaction.kind(),
            amount: transaction.amount(),
            timestamp: self.clock.now(),
        });
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    /// Number of records of the given kind.
    pub fn count(&self, kind: TransactionKind) -> usize {
        self.records.iter().filter(|r| r.kind == kind).count()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
