use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::{Cents, TransactionKind};

pub type RecordId = Uuid;

/// Maximum number of recorded transactions per account per UTC calendar day.
pub const DAILY_TRANSACTION_LIMIT: usize = 3;

/// One recorded transaction. Immutable once appended to a history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    pub id: RecordId,
    pub kind: TransactionKind,
    pub amount_cents: Cents,
    /// UTC wall-clock timestamp taken when the transaction was applied.
    pub recorded_at: DateTime<Utc>,
}

/// Append-only transaction log for a single account. Records are never
/// deleted or reordered.
#[derive(Debug, Clone, Default)]
pub struct History {
    records: Vec<TransactionRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub(crate) fn append(
        &mut self,
        kind: TransactionKind,
        amount_cents: Cents,
        recorded_at: DateTime<Utc>,
    ) -> TransactionRecord {
        let record = TransactionRecord {
            id: Uuid::new_v4(),
            kind,
            amount_cents,
            recorded_at,
        };
        self.records.push(record.clone());
        record
    }

    /// Lazily yield records in insertion order, optionally restricted to one
    /// transaction kind. The iterator only borrows the history, so a report
    /// can be taken any number of times.
    pub fn report(
        &self,
        filter: Option<TransactionKind>,
    ) -> impl Iterator<Item = &TransactionRecord> + '_ {
        self.records
            .iter()
            .filter(move |record| filter.is_none_or(|kind| record.kind == kind))
    }

    /// Number of records whose UTC calendar date equals `date`. Input to the
    /// daily transaction limit.
    pub fn count_on(&self, date: NaiveDate) -> usize {
        self.records
            .iter()
            .filter(|record| record.recorded_at.date_naive() == date)
            .count()
    }
}
