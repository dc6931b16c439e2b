//! Store handles and schema management

use anyhow::Result;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

/// Best-effort removal of a store file so the run rebuilds it from scratch.
///
/// Failure (including the file not existing yet) is logged and ignored; the
/// run proceeds against whatever is already on disk, at the cost of possible
/// duplicate rows.
pub fn reset_store_file(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        println!("⚠ Could not delete store file {}: {}", path.display(), e);
    }
}

fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Handle for the main rankings store.
///
/// Handles are opened for one append and dropped, which models the
/// open/append/close pattern of the pipeline as scoped acquisition with
/// release on every exit path. The schema is applied on each open so a
/// freshly recreated file is immediately usable.
pub struct RankingsStore {
    pub(crate) conn: Connection,
}

impl RankingsStore {
    /// Open (creating if needed) the store at `path` and ensure tables exist.
    pub fn open(path: &Path) -> Result<Self> {
        ensure_parent_dir(path)?;
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// In-memory store for tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    fn initialize_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS games (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                year INTEGER,
                playing_time INTEGER,
                rating REAL,
                weight REAL,
                bgg_rank INTEGER,
                best_count TEXT,
                min_count INTEGER,
                max_count INTEGER,
                expansions INTEGER,
                users_rated INTEGER,
                img_url TEXT
            );
            CREATE TABLE IF NOT EXISTS mechanics (game_id INTEGER, mechanic TEXT);
            CREATE TABLE IF NOT EXISTS categories (game_id INTEGER, category TEXT);
            CREATE TABLE IF NOT EXISTS designers (game_id INTEGER, designer TEXT);
            CREATE TABLE IF NOT EXISTS publishers (game_id INTEGER, publisher TEXT);
            CREATE TABLE IF NOT EXISTS families (game_id INTEGER, family TEXT);
            CREATE TABLE IF NOT EXISTS user_ranks (name TEXT, game_id INTEGER, rank INTEGER);",
        )?;
        Ok(())
    }
}

/// Handle for the year-comparison store.
///
/// Column names of `ranks` mirror the source CSV headers plus the three
/// appended fields, since downstream analysis joins on them as-is.
pub struct ComparisonStore {
    pub(crate) conn: Connection,
}

impl ComparisonStore {
    /// Open (creating if needed) the store at `path` and ensure tables exist.
    pub fn open(path: &Path) -> Result<Self> {
        ensure_parent_dir(path)?;
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// In-memory store for tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    fn initialize_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS ranks (
                BggId INTEGER,
                Title TEXT,
                Rank INTEGER,
                Year INTEGER,
                Name TEXT
            );",
        )?;
        Ok(())
    }
}
