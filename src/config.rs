use std::path::Path;

use serde::{Deserialize, Serialize};

/// Name of the optional configuration file looked up in the working
/// directory at startup.
pub const CONFIG_FILE: &str = "salescope.json";

// ---------------------------------------------------------------------------
// Table configuration – how to read the uploaded CSV
// ---------------------------------------------------------------------------

/// Column display names and date format of the input table. The loader
/// matches columns by these names instead of hard-coding them, so files in
/// other languages (the sample data this tool grew up on used Russian
/// headers) only need a config file, not a code change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub date_column: String,
    pub category_column: String,
    pub product_column: String,
    pub amount_column: String,
    /// strftime-style format the date column is parsed with.
    pub date_format: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            date_column: "Date".to_string(),
            category_column: "Category".to_string(),
            product_column: "Product".to_string(),
            amount_column: "Amount".to_string(),
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Application configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub table: TableConfig,
    /// Unit suffix appended to the statistics lines.
    pub currency: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            table: TableConfig::default(),
            currency: "USD".to_string(),
        }
    }
}

impl AppConfig {
    /// Read `salescope.json` from the working directory. A missing file is
    /// the normal case and yields defaults; an unreadable or invalid file
    /// logs a warning and also yields defaults.
    pub fn load_or_default() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return AppConfig::default();
        }
        match std::fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(config) => {
                    log::info!("Loaded configuration from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!(
                        "Ignoring invalid config {}: {e}",
                        path.display()
                    );
                    AppConfig::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {e}", path.display());
                AppConfig::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_columns_are_english() {
        let config = AppConfig::default();
        assert_eq!(config.table.date_column, "Date");
        assert_eq!(config.table.amount_column, "Amount");
        assert_eq!(config.table.date_format, "%Y-%m-%d");
        assert_eq!(config.currency, "USD");
    }

    #[test]
    fn partial_config_falls_back_to_defaults_per_field() {
        let config: AppConfig = serde_json::from_str(
            r#"{ "table": { "date_column": "Дата" }, "currency": "руб." }"#,
        )
        .unwrap();
        assert_eq!(config.table.date_column, "Дата");
        assert_eq!(config.table.category_column, "Category");
        assert_eq!(config.currency, "руб.");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = AppConfig::load_from(Path::new("does-not-exist.json"));
        assert_eq!(config, AppConfig::default());
    }
}
