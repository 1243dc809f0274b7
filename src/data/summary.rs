//! Aggregation of the filtered view for the charts and the statistics
//! lines. Everything here is a pure function of the visible rows and is
//! recomputed from scratch on every UI event.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::model::TransactionSet;

// ---------------------------------------------------------------------------
// Chart data
// ---------------------------------------------------------------------------

/// One contributing row of a bar, kept so the chart can show which products
/// make up a bar on hover.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductAmount {
    pub product: String,
    pub amount: f64,
}

/// One bar of the grouped bar chart: the amount sum for a (date, category)
/// pair, with per-product contributions in view order.
#[derive(Debug, Clone, PartialEq)]
pub struct BarGroup {
    pub date: NaiveDate,
    pub category: String,
    pub total: f64,
    pub products: Vec<ProductAmount>,
}

/// One slice of the pie chart: a category's amount sum and its share of the
/// filtered total.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub total: f64,
    /// In [0, 1]; 0 when the filtered total is 0.
    pub fraction: f64,
}

/// Sum amounts per (date, category), in ascending (date, category) order.
pub fn bar_data(set: &TransactionSet, visible: &[usize]) -> Vec<BarGroup> {
    let mut groups: BTreeMap<(NaiveDate, String), (f64, Vec<ProductAmount>)> = BTreeMap::new();

    for &idx in visible {
        let tx = &set.rows[idx];
        let entry = groups
            .entry((tx.date, tx.category.clone()))
            .or_insert_with(|| (0.0, Vec::new()));
        entry.0 += tx.amount;
        entry.1.push(ProductAmount {
            product: tx.product.clone(),
            amount: tx.amount,
        });
    }

    groups
        .into_iter()
        .map(|((date, category), (total, products))| BarGroup {
            date,
            category,
            total,
            products,
        })
        .collect()
}

/// Sum amounts per category and express each as a share of the filtered
/// total, in ascending category order.
pub fn pie_data(set: &TransactionSet, visible: &[usize]) -> Vec<CategoryShare> {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();

    for &idx in visible {
        let tx = &set.rows[idx];
        *totals.entry(tx.category.clone()).or_insert(0.0) += tx.amount;
    }

    let grand_total: f64 = totals.values().sum();

    totals
        .into_iter()
        .map(|(category, total)| CategoryShare {
            category,
            total,
            fraction: if grand_total > 0.0 {
                total / grand_total
            } else {
                0.0
            },
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Statistics summary
// ---------------------------------------------------------------------------

/// Total and mean sale amount of the filtered view. The mean of an empty
/// view is `None`, never a silent zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub total: f64,
    pub mean: Option<f64>,
}

pub fn summarize(set: &TransactionSet, visible: &[usize]) -> Summary {
    let total: f64 = visible.iter().map(|&idx| set.rows[idx].amount).sum();
    let mean = if visible.is_empty() {
        None
    } else {
        Some(total / visible.len() as f64)
    };
    Summary { total, mean }
}

impl Summary {
    /// The two statistics lines, formatted to two decimal places with the
    /// configured currency suffix. An undefined mean renders as "n/a".
    pub fn lines(&self, currency: &str) -> [String; 2] {
        let total = format!("Total sales: {:.2} {currency}", self.total);
        let mean = match self.mean {
            Some(mean) => format!("Average sale: {mean:.2} {currency}"),
            None => "Average sale: n/a".to_string(),
        };
        [total, mean]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Transaction, TransactionSet};

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
            tx("2024-01-01", "Food", "Cheese", 30.0),
        ])
    }

    #[test]
    fn bar_data_groups_by_date_and_category() {
        let set = sample_set();
        let visible: Vec<usize> = (0..set.len()).collect();
        let bars = bar_data(&set, &visible);

        assert_eq!(bars.len(), 3);

        // (2024-01-01, Food) merges Bread and Cheese.
        assert_eq!(bars[0].date, "2024-01-01".parse().unwrap());
        assert_eq!(bars[0].category, "Food");
        assert_eq!(bars[0].total, 130.0);
        assert_eq!(bars[0].products.len(), 2);
        assert_eq!(bars[0].products[0].product, "Bread");
        assert_eq!(bars[0].products[1].product, "Cheese");

        assert_eq!(bars[1].category, "Tools");
        assert_eq!(bars[1].total, 200.0);
        assert_eq!(bars[2].total, 50.0);
    }

    #[test]
    fn pie_data_fractions_sum_to_one() {
        let set = sample_set();
        let visible: Vec<usize> = (0..set.len()).collect();
        let shares = pie_data(&set, &visible);

        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].category, "Food");
        assert_eq!(shares[0].total, 180.0);
        assert_eq!(shares[1].category, "Tools");
        assert_eq!(shares[1].total, 200.0);

        let sum: f64 = shares.iter().map(|s| s.fraction).sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn scenario_a_totals() {
        let set = sample_set();
        // Bread and Hammer only.
        let summary = summarize(&set, &[0, 1]);
        assert_eq!(summary.total, 300.0);
        assert_eq!(summary.mean, Some(150.0));
    }

    #[test]
    fn single_row_summary() {
        let set = sample_set();
        let summary = summarize(&set, &[0]);
        assert_eq!(summary.total, 100.0);
        assert_eq!(summary.mean, Some(100.0));
    }

    #[test]
    fn empty_view_is_safe() {
        let set = sample_set();
        let summary = summarize(&set, &[]);
        assert_eq!(summary.total, 0.0);
        assert_eq!(summary.mean, None);

        assert!(bar_data(&set, &[]).is_empty());
        assert!(pie_data(&set, &[]).is_empty());
    }

    #[test]
    fn empty_set_is_safe() {
        let empty = TransactionSet::from_rows(Vec::new());
        let summary = summarize(&empty, &[]);
        assert_eq!(summary.total, 0.0);
        assert_eq!(summary.mean, None);
    }

    #[test]
    fn zero_amounts_give_zero_fractions() {
        let tx = |product: &str| Transaction {
            date: "2024-01-01".parse().unwrap(),
            category: "Free".to_string(),
            product: product.to_string(),
            amount: 0.0,
        };
        let set = TransactionSet::from_rows(vec![tx("Sample"), tx("Promo")]);
        let shares = pie_data(&set, &[0, 1]);
        assert_eq!(shares.len(), 1);
        assert_eq!(shares[0].fraction, 0.0);
    }

    #[test]
    fn statistics_lines_format() {
        let summary = Summary {
            total: 300.0,
            mean: Some(150.0),
        };
        assert_eq!(
            summary.lines("USD"),
            [
                "Total sales: 300.00 USD".to_string(),
                "Average sale: 150.00 USD".to_string()
            ]
        );

        let empty = Summary {
            total: 0.0,
            mean: None,
        };
        assert_eq!(empty.lines("USD")[1], "Average sale: n/a");
    }
}
