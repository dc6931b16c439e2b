//! Board-Game Ranking Loader
//!
//! Loads per-user board-game ranking lists, enriches each game with metadata
//! fetched from a remote game-catalog service, and persists the combined
//! data into a local SQLite store for later analysis (e.g. comparing
//! rankings across years).
//!
//! ## Pipelines
//!
//! - **Load**: for each ranking CSV, assign ranks by row order, fetch
//!   catalog metadata for each game on first encounter (a run-scoped cache
//!   guarantees one fetch and one insert per id), and append the flattened
//!   rows to the store. The store file is rebuilt from scratch every run.
//! - **Year compare**: match each historical `<name>_<year>.csv` against the
//!   person's current list and append both row sets, tagged with year and
//!   name, into a separate comparison store.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bgg_ranks::commands::load_rankings::handle_load;
//! use std::path::Path;
//!
//! # async fn example() -> bgg_ranks::Result<()> {
//! handle_load(Path::new("data/user_lists"), Path::new("data/bgg_data.sqlite")).await?;
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod error;
pub mod lists;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{GameId, Year};
pub use error::{LoaderError, Result};
