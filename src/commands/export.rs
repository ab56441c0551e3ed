// ABOUTME: Export command implementation - Dump configured tables to a JSON file
// ABOUTME: Sequential single-pass run: connect, read each table, serialize, write, close

use crate::config::ExportConfig;
use crate::export::{self, ExportDocument};
use crate::sqlite::{self, reader};
use anyhow::{Context, Result};

/// Run a full export of the configured tables to the output JSON file
///
/// This is the whole program:
/// 1. Opens a read-only connection to the source database
/// 2. Reads every configured table in order, all rows into memory
/// 3. Serializes the accumulated document with 2-space indentation
/// 4. Writes it to the output path, overwriting any existing file
/// 5. Closes the connection
///
/// Tables that exist but are empty still produce an entry with an empty
/// array, so the output always carries exactly one key per configured
/// table. There is no partial-success handling: the first failure aborts
/// the run, and because the file is only written after every table has
/// been read, a failed run leaves no new output file behind.
///
/// # Arguments
///
/// * `config` - Source path, output path, and table list for this run
///
/// # Errors
///
/// This function will return an error if:
/// - The database file is missing, unreadable, or not valid SQLite
/// - Any configured table does not exist or fails to read
/// - The output file cannot be written
///
/// # Examples
///
/// ```no_run
/// # use anyhow::Result;
/// # use norms_exporter::commands;
/// # use norms_exporter::config::ExportConfig;
/// # fn example() -> Result<()> {
/// commands::export(&ExportConfig::default())?;
/// # Ok(())
/// # }
/// ```
pub fn export(config: &ExportConfig) -> Result<()> {
    tracing::info!(
        "Exporting SQLite data from '{}'...",
        config.source_path.display()
    );

    let conn = sqlite::connect(&config.source_path)?;

    let mut document = ExportDocument::new();
    for table in &config.tables {
        let rows = reader::read_table(&conn, table)
            .with_context(|| format!("Failed to export table '{}'", table))?;
        tracing::info!("✓ Exported {} rows from {}", rows.len(), table);
        document.insert_table(table, rows);
    }

    export::write_document(document, &config.output_path)?;

    // Drop would close it anyway, but a close failure should be reported
    conn.close()
        .map_err(|(_conn, e)| e)
        .context("Failed to close database connection")?;

    tracing::info!(
        "✓ Export complete! {} created",
        config.output_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;
    use std::path::Path;
    use tempfile::tempdir;

    fn fixture_config(dir: &Path) -> ExportConfig {
        ExportConfig {
            source_path: dir.join("source.db"),
            output_path: dir.join("out.json"),
            tables: vec!["norms".to_string(), "rates".to_string()],
        }
    }

    fn create_fixture_db(path: &Path) {
        let conn = Connection::open(path).unwrap();
        conn.execute_batch(
            "CREATE TABLE norms (id INTEGER PRIMARY KEY, code TEXT);
             CREATE TABLE rates (id INTEGER PRIMARY KEY, price REAL);
             INSERT INTO norms (id, code) VALUES (1, 'E01-01-001'), (2, 'E01-01-002');",
        )
        .unwrap();
    }

    #[test]
    fn test_export_writes_one_key_per_table() {
        let dir = tempdir().unwrap();
        let config = fixture_config(dir.path());
        create_fixture_db(&config.source_path);

        export(&config).unwrap();

        let text = std::fs::read_to_string(&config.output_path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        let object = parsed.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["norms"].as_array().unwrap().len(), 2);
        assert_eq!(object["rates"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_export_missing_database_leaves_no_output() {
        let dir = tempdir().unwrap();
        let config = fixture_config(dir.path());
        // No database created

        let result = export(&config);

        assert!(result.is_err());
        assert!(!config.output_path.exists());
    }

    #[test]
    fn test_export_missing_table_leaves_no_output() {
        let dir = tempdir().unwrap();
        let mut config = fixture_config(dir.path());
        create_fixture_db(&config.source_path);
        config.tables.push("projects".to_string());

        let result = export(&config);

        assert!(result.is_err());
        assert!(!config.output_path.exists());
    }
}
