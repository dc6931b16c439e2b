//! Storage layer for the ranking loader
//!
//! A thin abstraction over the SQLite store files, organized into:
//! - `models`: data structures
//! - `schema`: store handles and schema management
//! - `queries`: append and read-back operations

pub mod models;
pub mod queries;
pub mod schema;

// Re-export the main types and store handles for easy access
pub use models::*;
pub use schema::{reset_store_file, ComparisonStore, RankingsStore};
