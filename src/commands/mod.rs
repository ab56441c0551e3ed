// ABOUTME: Command implementations for the exporter
// ABOUTME: Exports the single one-shot export command

pub mod export;

pub use export::export;
