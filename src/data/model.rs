use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// Transaction – one row of the uploaded table
// ---------------------------------------------------------------------------

/// A single sales transaction (one row of the source file).
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub date: NaiveDate,
    /// Short category label, e.g. "Food".
    pub category: String,
    /// Product name, free text.
    pub product: String,
    /// Sale amount. Non-negative by convention; duplicates are valid rows.
    pub amount: f64,
}

// ---------------------------------------------------------------------------
// TransactionSet – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset in file order, with pre-computed lookups used to
/// seed the filter widgets.
#[derive(Debug, Clone)]
pub struct TransactionSet {
    /// All transactions, in the order they appeared in the file.
    pub rows: Vec<Transaction>,
    /// Distinct category labels, sorted.
    pub categories: Vec<String>,
    /// Earliest and latest transaction date (None when empty).
    pub date_span: Option<(NaiveDate, NaiveDate)>,
    /// Largest amount in the set (0.0 when empty).
    pub max_amount: f64,
}

impl TransactionSet {
    /// Build the set and its lookups from parsed rows.
    pub fn from_rows(rows: Vec<Transaction>) -> Self {
        let mut categories: Vec<String> =
            rows.iter().map(|tx| tx.category.clone()).collect();
        categories.sort();
        categories.dedup();

        let date_span = rows.iter().map(|tx| tx.date).fold(None, |span: Option<(NaiveDate, NaiveDate)>, d| {
            Some(match span {
                None => (d, d),
                Some((lo, hi)) => (lo.min(d), hi.max(d)),
            })
        });

        let max_amount = rows.iter().map(|tx| tx.amount).fold(0.0, f64::max);

        TransactionSet {
            rows,
            categories,
            date_span,
            max_amount,
        }
    }

    /// Distinct categories as (label, value) pairs for the category
    /// selector. Sorted, so the option list is deterministic.
    pub fn category_options(&self) -> Vec<(String, String)> {
        self.categories
            .iter()
            .map(|c| (c.clone(), c.clone()))
            .collect()
    }

    /// Number of transactions.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
