use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::model::{Transaction, TransactionSet};

// ---------------------------------------------------------------------------
// Filter criteria – the tuple of bounds derived from the UI each event
// ---------------------------------------------------------------------------

/// The current filter selections. Rebuilt from the UI state on every event;
/// nothing here outlives one recomputation.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Inclusive lower date bound; `None` admits all earlier dates.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper date bound; `None` admits all later dates.
    pub date_to: Option<NaiveDate>,
    /// Selected category labels. An empty set admits every category.
    pub categories: BTreeSet<String>,
    /// Inclusive amount bounds, always present.
    pub amount_min: f64,
    pub amount_max: f64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        FilterCriteria {
            date_from: None,
            date_to: None,
            categories: BTreeSet::new(),
            amount_min: 0.0,
            amount_max: f64::MAX,
        }
    }
}

impl FilterCriteria {
    /// Whether a single transaction passes every predicate. The four
    /// predicates are conjunctive and all bounds are inclusive.
    pub fn matches(&self, tx: &Transaction) -> bool {
        if let Some(from) = self.date_from {
            if tx.date < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if tx.date > to {
                return false;
            }
        }
        if !self.categories.is_empty() && !self.categories.contains(&tx.category) {
            return false;
        }
        tx.amount >= self.amount_min && tx.amount <= self.amount_max
    }
}

/// Return indices of transactions that pass the criteria, preserving the
/// source order of the set (stable filter, no re-sort).
pub fn filtered_indices(set: &TransactionSet, criteria: &FilterCriteria) -> Vec<usize> {
    set.rows
        .iter()
        .enumerate()
        .filter(|(_, tx)| criteria.matches(tx))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Transaction;

    fn sample_set() -> TransactionSet {
        let tx = |date: &str, category: &str, product: &str, amount: f64| Transaction {
            date: date.parse().unwrap(),
            category: category.to_string(),
            product: product.to_string(),
            amount,
        };
        TransactionSet::from_rows(vec![
            tx("2024-01-01", "Food", "Bread", 100.0),
            tx("2024-01-02", "Tools", "Hammer", 200.0),
            tx("2024-01-03", "Food", "Milk", 50.0),
        ])
    }

    fn criteria() -> FilterCriteria {
        FilterCriteria {
            date_from: None,
            date_to: None,
            categories: BTreeSet::new(),
            amount_min: 0.0,
            amount_max: 1000.0,
        }
    }

    #[test]
    fn date_range_is_inclusive_on_both_ends() {
        let set = sample_set();
        let criteria = FilterCriteria {
            date_from: Some("2024-01-01".parse().unwrap()),
            date_to: Some("2024-01-02".parse().unwrap()),
            ..criteria()
        };
        // Scenario A: Bread and Hammer pass, Milk is past the upper bound.
        assert_eq!(filtered_indices(&set, &criteria), vec![0, 1]);
    }

    #[test]
    fn category_selection_restricts_membership() {
        let set = sample_set();
        let criteria = FilterCriteria {
            categories: BTreeSet::from(["Food".to_string()]),
            ..criteria()
        };
        // Scenario B restricted further by the date range in scenario A.
        let criteria = FilterCriteria {
            date_from: Some("2024-01-01".parse().unwrap()),
            date_to: Some("2024-01-02".parse().unwrap()),
            ..criteria
        };
        assert_eq!(filtered_indices(&set, &criteria), vec![0]);
    }

    #[test]
    fn empty_category_set_admits_all() {
        let set = sample_set();
        assert_eq!(filtered_indices(&set, &criteria()), vec![0, 1, 2]);
    }

    #[test]
    fn amount_range_is_inclusive() {
        let set = sample_set();
        let narrowed = FilterCriteria {
            amount_min: 150.0,
            ..criteria()
        };
        // Scenario C: only Hammer (200) is at or above 150.
        assert_eq!(filtered_indices(&set, &narrowed), vec![1]);

        let exact = FilterCriteria {
            amount_min: 200.0,
            amount_max: 200.0,
            ..criteria()
        };
        assert_eq!(filtered_indices(&set, &exact), vec![1]);
    }

    #[test]
    fn no_bounds_admit_everything() {
        let set = sample_set();
        let all = FilterCriteria::default();
        assert_eq!(filtered_indices(&set, &all).len(), set.len());
    }

    #[test]
    fn filter_is_idempotent_and_order_preserving() {
        let set = sample_set();
        let criteria = FilterCriteria {
            categories: BTreeSet::from(["Food".to_string()]),
            ..criteria()
        };
        let first = filtered_indices(&set, &criteria);
        let second = filtered_indices(&set, &criteria);
        assert_eq!(first, second);
        assert!(first.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn conjunction_holds_in_both_directions() {
        let set = sample_set();
        let criteria = FilterCriteria {
            date_from: Some("2024-01-02".parse().unwrap()),
            date_to: Some("2024-01-03".parse().unwrap()),
            categories: BTreeSet::from(["Food".to_string()]),
            amount_min: 0.0,
            amount_max: 60.0,
        };
        let kept = filtered_indices(&set, &criteria);

        for (i, tx) in set.rows.iter().enumerate() {
            if kept.contains(&i) {
                assert!(criteria.matches(tx));
            } else {
                assert!(!criteria.matches(tx));
            }
        }
        assert_eq!(kept, vec![2]);
    }

    #[test]
    fn empty_set_filters_to_empty() {
        let empty = TransactionSet::from_rows(Vec::new());
        assert!(filtered_indices(&empty, &criteria()).is_empty());
    }
}
