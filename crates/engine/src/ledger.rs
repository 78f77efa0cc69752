//! The ordered collection of expense records, the system's sole state.
//!
//! The ledger is a value: `add` and `remove` return a new snapshot instead of
//! mutating in place, so callers decide when a snapshot becomes current and
//! when it is mirrored to storage. Validation failures are explicit
//! [`EngineError`] values, never silent no-ops.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Category, EngineError, Money, Record, ResultEngine};

/// An immutable snapshot of the expense ledger, newest record first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    records: Vec<Record>,
}

impl Ledger {
    /// The records, insertion-order descending (newest first).
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Validates the form input and returns a new snapshot with the record
    /// prepended.
    ///
    /// The description must be non-empty after trimming; the amount must
    /// parse (see [`Money`]) and be strictly positive. The record id is
    /// derived from `now` and guaranteed unique within the snapshot.
    pub fn add(
        &self,
        description: &str,
        amount: &str,
        category: Category,
        now: DateTime<Utc>,
    ) -> ResultEngine<Ledger> {
        let description = description.trim();
        if description.is_empty() {
            return Err(EngineError::InvalidDescription);
        }

        let amount: Money = amount.parse()?;
        if !amount.is_positive() {
            return Err(EngineError::InvalidAmount(
                "amount must be > 0".to_string(),
            ));
        }

        let record = Record::new(
            self.next_id(now),
            description.to_string(),
            amount,
            category,
            now,
        );

        let mut records = Vec::with_capacity(self.records.len() + 1);
        records.push(record);
        records.extend(self.records.iter().cloned());
        Ok(Ledger { records })
    }

    /// Returns a snapshot without the matching record.
    ///
    /// An absent id is a no-op, which makes removal idempotent.
    #[must_use]
    pub fn remove(&self, id: &str) -> Ledger {
        Ledger {
            records: self
                .records
                .iter()
                .filter(|record| record.id != id)
                .cloned()
                .collect(),
        }
    }

    /// Derives a fresh id from the creation timestamp.
    ///
    /// Ids are the millisecond timestamp as a decimal string; two records
    /// created within the same millisecond bump the count until unique.
    fn next_id(&self, now: DateTime<Utc>) -> String {
        let mut millis = now.timestamp_millis();
        loop {
            let id = millis.to_string();
            if !self.records.iter().any(|record| record.id == id) {
                return id;
            }
            millis += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn add_prepends_newest_first() {
        let ledger = Ledger::default();
        let ledger = ledger
            .add("Хлеб", "45", Category::Groceries, at(1))
            .unwrap();
        let ledger = ledger
            .add("Метро", "62", Category::Transport, at(2))
            .unwrap();

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.records()[0].description, "Метро");
        assert_eq!(ledger.records()[1].description, "Хлеб");
    }

    #[test]
    fn add_trims_description() {
        let ledger = Ledger::default()
            .add("  Кофе  ", "150", Category::Groceries, at(1))
            .unwrap();
        assert_eq!(ledger.records()[0].description, "Кофе");
    }

    #[test]
    fn ids_stay_unique_within_one_millisecond() {
        let now = at(1_700_000_000);
        let ledger = Ledger::default()
            .add("Кофе", "150", Category::Groceries, now)
            .unwrap()
            .add("Чай", "90", Category::Groceries, now)
            .unwrap();

        let ids: Vec<&str> = ledger.records().iter().map(|r| r.id.as_str()).collect();
        assert_ne!(ids[0], ids[1]);
        assert!(ids.iter().all(|id| id.chars().all(|c| c.is_ascii_digit())));
    }

    #[test]
    fn remove_filters_by_id() {
        let ledger = Ledger::default()
            .add("Кофе", "150", Category::Groceries, at(1))
            .unwrap();
        let id = ledger.records()[0].id.clone();

        let emptied = ledger.remove(&id);
        assert!(emptied.is_empty());

        // Removing again is a no-op.
        assert_eq!(emptied.remove(&id), emptied);
    }
}
