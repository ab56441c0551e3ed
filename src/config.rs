// ABOUTME: Export configuration structure with the fixed production defaults
// ABOUTME: Replaces hardcoded globals so the exporter receives paths and tables explicitly

use std::path::PathBuf;

/// Database file read by a default export run.
pub const DEFAULT_SOURCE_PATH: &str = "norms_decoded.db";

/// JSON document written by a default export run.
pub const DEFAULT_OUTPUT_PATH: &str = "norms_data.json";

/// Tables exported by a default run, in output order.
pub const DEFAULT_TABLES: [&str; 5] = ["norms", "norm_resources", "rates", "projects", "boq_items"];

/// Configuration for a single export run
///
/// The production binary always uses [`ExportConfig::default`], which points
/// at `norms_decoded.db` / `norms_data.json` in the working directory and
/// exports the five norms tables. Tests construct their own configs aimed at
/// temporary directories.
///
/// # Examples
///
/// ```
/// # use norms_exporter::config::ExportConfig;
/// let config = ExportConfig::default();
/// assert_eq!(config.tables.len(), 5);
/// assert_eq!(config.tables[0], "norms");
/// ```
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Path to the SQLite database file to read.
    pub source_path: PathBuf,
    /// Path of the JSON document to write. Overwritten if it exists.
    pub output_path: PathBuf,
    /// Table names to export, in the order they appear in the output document.
    pub tables: Vec<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            tables: DEFAULT_TABLES.iter().map(|t| t.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_production_values() {
        let config = ExportConfig::default();

        assert_eq!(config.source_path, PathBuf::from("norms_decoded.db"));
        assert_eq!(config.output_path, PathBuf::from("norms_data.json"));
        assert_eq!(
            config.tables,
            vec!["norms", "norm_resources", "rates", "projects", "boq_items"]
        );
    }

    #[test]
    fn test_default_table_order_is_stable() {
        // Output document order follows this list, so it must not change silently
        assert_eq!(
            DEFAULT_TABLES,
            ["norms", "norm_resources", "rates", "projects", "boq_items"]
        );
    }
}
