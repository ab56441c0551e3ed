// ABOUTME: In-memory export document mapping table names to their row lists
// ABOUTME: Preserves table insertion order so the JSON output follows the configured order

use serde_json::{Map, Value};

/// The complete export artifact: table name → list of row objects
///
/// Built fully in memory during a run, serialized once, then discarded.
/// Tables appear in insertion order, which the exporter drives from the
/// configured table list. A table read that returns no rows still gets an
/// entry with an empty array, so a successful run always produces exactly
/// one key per configured table.
#[derive(Debug, Default)]
pub struct ExportDocument {
    tables: Map<String, Value>,
}

impl ExportDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a table's rows under its name. Replaces any previous entry
    /// with the same name.
    pub fn insert_table(&mut self, name: &str, rows: Vec<Map<String, Value>>) {
        let rows = rows.into_iter().map(Value::Object).collect();
        self.tables.insert(name.to_string(), Value::Array(rows));
    }

    /// Number of tables recorded so far.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Row count for a recorded table, or `None` if the table is absent.
    pub fn row_count(&self, name: &str) -> Option<usize> {
        match self.tables.get(name) {
            Some(Value::Array(rows)) => Some(rows.len()),
            _ => None,
        }
    }

    /// Consume the document into a serializable JSON value.
    pub fn into_json(self) -> Value {
        Value::Object(self.tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(id: i64) -> Map<String, Value> {
        let mut m = Map::new();
        m.insert("id".to_string(), json!(id));
        m
    }

    #[test]
    fn test_empty_table_gets_empty_array() {
        let mut doc = ExportDocument::new();
        doc.insert_table("rates", Vec::new());

        assert_eq!(doc.table_count(), 1);
        assert_eq!(doc.row_count("rates"), Some(0));
        assert_eq!(doc.into_json(), json!({ "rates": [] }));
    }

    #[test]
    fn test_row_count_tracks_inserted_rows() {
        let mut doc = ExportDocument::new();
        doc.insert_table("norms", vec![row(1), row(2), row(3)]);

        assert_eq!(doc.row_count("norms"), Some(3));
        assert_eq!(doc.row_count("projects"), None);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut doc = ExportDocument::new();
        doc.insert_table("norms", Vec::new());
        doc.insert_table("boq_items", Vec::new());
        doc.insert_table("rates", Vec::new());

        let value = doc.into_json();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["norms", "boq_items", "rates"]);
    }

    #[test]
    fn test_reinsert_replaces_entry() {
        let mut doc = ExportDocument::new();
        doc.insert_table("norms", vec![row(1)]);
        doc.insert_table("norms", vec![row(2), row(3)]);

        assert_eq!(doc.table_count(), 1);
        assert_eq!(doc.row_count("norms"), Some(2));
    }
}
