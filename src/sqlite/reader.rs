// ABOUTME: SQLite data reading functions for full-table row retrieval
// ABOUTME: Materializes rows as JSON objects with explicit storage-class conversion

use anyhow::{Context, Result};
use rusqlite::types::ValueRef;
use rusqlite::Connection;
use serde_json::{Map, Value};

/// Read all rows from a table as JSON objects
///
/// Executes an unfiltered, unordered `SELECT *` against the table and
/// materializes every row into a map from column name to JSON value, in
/// whatever order SQLite returns the rows.
///
/// # Arguments
///
/// * `conn` - Open database connection
/// * `table` - Table name (validated before being interpolated into SQL)
///
/// # Returns
///
/// Ordered sequence of row objects, one per row. Empty tables yield an
/// empty sequence, not an error.
///
/// # Errors
///
/// Returns an error if the table name fails validation, the table does not
/// exist, or the query fails mid-scan.
///
/// # Examples
///
/// ```no_run
/// # use norms_exporter::sqlite::{connect, reader::read_table};
/// # fn example() -> anyhow::Result<()> {
/// let conn = connect("norms_decoded.db".as_ref())?;
/// let rows = read_table(&conn, "norms")?;
/// println!("Read {} rows", rows.len());
/// # Ok(())
/// # }
/// ```
pub fn read_table(conn: &Connection, table: &str) -> Result<Vec<Map<String, Value>>> {
    crate::sqlite::validate_table_name(table).context("Invalid table name for export query")?;

    tracing::debug!("Reading all rows from table '{}'", table);

    let mut stmt = conn
        .prepare(&format!("SELECT * FROM \"{}\"", table))
        .with_context(|| format!("Failed to query table '{}'. Does it exist?", table))?;

    let column_names: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    let column_count = column_names.len();

    let mut rows = stmt
        .query([])
        .with_context(|| format!("Failed to execute query against table '{}'", table))?;

    let mut result = Vec::new();
    while let Some(row) = rows
        .next()
        .with_context(|| format!("Failed to fetch row from table '{}'", table))?
    {
        let mut object = Map::with_capacity(column_count);
        for (idx, name) in column_names.iter().enumerate() {
            let value = row
                .get_ref(idx)
                .with_context(|| format!("Failed to read column '{}' of table '{}'", name, table))?;
            object.insert(name.clone(), sqlite_value_to_json(value));
        }
        result.push(object);
    }

    Ok(result)
}

/// Convert a SQLite value to JSON
///
/// Maps storage classes to JSON types:
/// - NULL → null
/// - INTEGER → number
/// - REAL → number (non-finite values fall back to their string form)
/// - TEXT → string (invalid UTF-8 replaced, never fails)
/// - BLOB → base64 string
///
/// Anything JSON cannot represent natively is rendered as a string rather
/// than dropped, so the export is lossy but always serializable.
pub fn sqlite_value_to_json(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Number(i.into()),
        ValueRef::Real(f) => match serde_json::Number::from_f64(f) {
            Some(n) => Value::Number(n),
            // NaN and infinities have no JSON number form
            None => Value::String(f.to_string()),
        },
        ValueRef::Text(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => {
            let encoded = base64::Engine::encode(&base64::engine::general_purpose::STANDARD, bytes);
            Value::String(encoded)
        }
    }
}
