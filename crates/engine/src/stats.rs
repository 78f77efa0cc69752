//! Derived statistics over a ledger snapshot.
//!
//! Statistics are recomputed from scratch on every access. The source list
//! is small and the reduction is O(n), so there is no cached state to
//! invalidate.
use crate::{Category, Ledger, Money};

/// Subtotal of one category's records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Money,
}

/// Aggregates derived from the current ledger.
#[derive(Clone, Debug, PartialEq)]
pub struct Statistics {
    pub total: Money,
    pub count: usize,
    pub average: Money,
    pub by_category: Vec<CategoryTotal>,
}

impl Statistics {
    /// Computes total, count, average and the per-category breakdown.
    ///
    /// The average is 0 for an empty ledger, and otherwise `total / count`
    /// rounded to the nearest kopeck. Categories with a zero total are
    /// omitted from the breakdown; the remaining entries keep the fixed
    /// category order.
    #[must_use]
    pub fn compute(ledger: &Ledger) -> Self {
        let total: Money = ledger.records().iter().map(|record| record.amount).sum();
        let count = ledger.len();

        let average = if count == 0 {
            Money::ZERO
        } else {
            let divisor = count as i64;
            Money::new((total.minor() + divisor / 2) / divisor)
        };

        let by_category = Category::ALL
            .into_iter()
            .filter_map(|category| {
                let subtotal: Money = ledger
                    .records()
                    .iter()
                    .filter(|record| record.category == category)
                    .map(|record| record.amount)
                    .sum();
                (!subtotal.is_zero()).then_some(CategoryTotal {
                    category,
                    total: subtotal,
                })
            })
            .collect();

        Self {
            total,
            count,
            average,
            by_category,
        }
    }
}
