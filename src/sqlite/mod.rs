// ABOUTME: SQLite connection utilities for the norms database
// ABOUTME: Handles read-only connection lifecycle and table name validation

pub mod reader;

use anyhow::{bail, Context, Result};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;

/// Open a read-only connection to a SQLite database file
///
/// The connection is opened read-only so that a missing or unreadable file
/// is reported as a connection error instead of being silently created, as
/// the default open flags would do.
///
/// # Arguments
///
/// * `path` - Path to the SQLite database file
///
/// # Errors
///
/// Returns an error if the file does not exist, is not readable, or is not
/// a valid SQLite database.
///
/// # Examples
///
/// ```no_run
/// # use norms_exporter::sqlite::connect;
/// # fn example() -> anyhow::Result<()> {
/// let conn = connect("norms_decoded.db".as_ref())?;
/// # Ok(())
/// # }
/// ```
pub fn connect(path: &Path) -> Result<Connection> {
    tracing::debug!("Opening database at {}", path.display());

    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .with_context(|| {
        format!(
            "Failed to open database at '{}'.\n\
             Please check that the file exists and is a valid SQLite database.",
            path.display()
        )
    })?;

    Ok(conn)
}

/// Validate a table name before it is interpolated into SQL
///
/// Accepts plain SQL identifiers only: a letter or underscore followed by
/// letters, digits or underscores. Everything else is rejected so table
/// names from configuration can never smuggle SQL into the query text.
///
/// # Errors
///
/// Returns an error if the name is empty or contains characters outside
/// `[A-Za-z0-9_]`, or starts with a digit.
pub fn validate_table_name(name: &str) -> Result<()> {
    match name.chars().next() {
        None => bail!("Table name cannot be empty"),
        Some(first) if !first.is_ascii_alphabetic() && first != '_' => bail!(
            "Invalid table name '{}': must start with a letter or underscore",
            name
        ),
        Some(_) => {}
    }

    if let Some(bad) = name
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && *c != '_')
    {
        bail!(
            "Invalid table name '{}': character '{}' is not allowed",
            name,
            bad
        );
    }

    Ok(())
}
