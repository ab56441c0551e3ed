// ABOUTME: Export document assembly and JSON file output
// ABOUTME: Exports the in-memory document type and the writer that serializes it

pub mod document;
pub mod writer;

pub use document::ExportDocument;
pub use writer::write_document;
