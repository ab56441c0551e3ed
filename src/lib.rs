// ABOUTME: Library module for norms-exporter
// ABOUTME: Exports all core functionality for use in binary and tests

pub mod commands;
pub mod config;
pub mod export;
pub mod sqlite;
