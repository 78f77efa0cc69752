//! The module contains the `Record` type, one expense entry in the ledger.
use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Category, Money};

/// One expense: what was spent, on which category, and when.
///
/// Records are immutable after creation; the only lifecycle transition is
/// removal from the ledger. The field layout matches the persisted blob:
/// `{id, description, amount, category, date}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub description: String,
    pub amount: Money,
    pub category: Category,
    pub date: DateTime<Utc>,
}

impl Record {
    pub fn new(
        id: String,
        description: String,
        amount: Money,
        category: Category,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            description,
            amount,
            category,
            date,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.amount, self.category, self.description)
    }
}
