use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;

use crate::config::TableConfig;

use super::model::{Transaction, TransactionSet};

// ---------------------------------------------------------------------------
// LoadError
// ---------------------------------------------------------------------------

/// Why an upload could not be turned into a [`TransactionSet`]. Any error
/// fails the whole load; no partial set is ever produced.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file is not valid UTF-8 text")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("reading file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column '{0}'")]
    MissingColumn(String),

    #[error("row {row}: '{value}' is not a date in format {format}")]
    BadDate {
        row: usize,
        value: String,
        format: String,
    },

    #[error("row {row}: '{value}' is not a number")]
    BadAmount { row: usize, value: String },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Parse raw upload bytes as a UTF-8 CSV table with a header row.
///
/// The header must contain the four columns named in `config`; every data
/// row must have a date parseable under `config.date_format` and a numeric
/// amount (see [`parse_amount`] for the accepted separators).
pub fn load_bytes(bytes: &[u8], config: &TableConfig) -> Result<TransactionSet, LoadError> {
    let text = std::str::from_utf8(bytes)?;
    let mut reader = csv::Reader::from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    let column = |name: &str| -> Result<usize, LoadError> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
    };

    let date_idx = column(&config.date_column)?;
    let category_idx = column(&config.category_column)?;
    let product_idx = column(&config.product_column)?;
    let amount_idx = column(&config.amount_column)?;

    let mut rows = Vec::new();

    for (i, result) in reader.records().enumerate() {
        let row = i + 1;
        let record = result?;
        let field = |idx: usize| record.get(idx).unwrap_or("").trim();

        let date_raw = field(date_idx);
        let date = NaiveDate::parse_from_str(date_raw, &config.date_format).map_err(|_| {
            LoadError::BadDate {
                row,
                value: date_raw.to_string(),
                format: config.date_format.clone(),
            }
        })?;

        let amount_raw = field(amount_idx);
        let amount = parse_amount(amount_raw).ok_or_else(|| LoadError::BadAmount {
            row,
            value: amount_raw.to_string(),
        })?;

        rows.push(Transaction {
            date,
            category: field(category_idx).to_string(),
            product: field(product_idx).to_string(),
            amount,
        });
    }

    Ok(TransactionSet::from_rows(rows))
}

/// Read a file from disk and parse it with [`load_bytes`].
pub fn load_file(path: &Path, config: &TableConfig) -> Result<TransactionSet, LoadError> {
    let bytes = std::fs::read(path)?;
    load_bytes(&bytes, config)
}

// ---------------------------------------------------------------------------
// Amount normalization
// ---------------------------------------------------------------------------

/// Parse an amount cell under one fixed convention:
/// * spaces (including non-breaking) are grouping noise and are stripped,
/// * a value containing both `,` and `.` uses `,` as thousands separator,
/// * a value containing only `,` uses it as the decimal separator.
///
/// So `1 234,56`, `1,234.56` and `1234.56` all parse to the same number.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != ' ' && *c != '\u{a0}')
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    let normalized = if cleaned.contains(',') && cleaned.contains('.') {
        cleaned.replace(',', "")
    } else {
        cleaned.replace(',', ".")
    };

    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}
