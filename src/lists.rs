//! Reading of user ranking list files.
//!
//! One CSV per user, rows already sorted by preference, so a row's rank is
//! its 1-based position in file order. Filenames carry identity: `<name>.csv`
//! for current lists, `<name>_<year>.csv` for historical ones. Downstream
//! joins depend on these exact split rules, so they are preserved verbatim.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::types::{GameId, Year};
use crate::error::{LoaderError, Result};


/// One row of a ranking CSV. `BggId` is required; `Title` is conventional.
#[derive(Debug, Clone, Deserialize)]
pub struct ListRow {
    #[serde(rename = "BggId")]
    pub bgg_id: GameId,
    #[serde(rename = "Title", default)]
    pub title: String,
}

/// A list row paired with its 1-based rank.
#[derive(Debug, Clone)]
pub struct RankedRow {
    pub row: ListRow,
    pub rank: u32,
}

/// Read a ranking file, assigning rank by row order.
pub fn read_ranking_file(path: &Path) -> Result<Vec<RankedRow>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for (i, record) in reader.deserialize::<ListRow>().enumerate() {
        rows.push(RankedRow {
            row: record?,
            rank: i as u32 + 1,
        });
    }
    Ok(rows)
}

/// The list owner's name: the filename segment before the first `.`.
pub fn person_from_filename(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or(file_name)
}

/// Parse a historical filename `<name>_<year>.csv` into its parts.
///
/// The stem must split on `_` into exactly two pieces; anything else aborts
/// the run.
pub fn parse_historical_filename(path: &Path) -> Result<(String, Year)> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoaderError::MalformedFilename {
            path: path.to_path_buf(),
        })?;
    let stem = file_name.strip_suffix(".csv").unwrap_or(file_name);

    let mut parts = stem.split('_');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(year), None) => Ok((name.to_string(), year.parse()?)),
        _ => Err(LoaderError::MalformedFilename {
            path: path.to_path_buf(),
        }),
    }
}

/// Directory entries in sorted filename order, so runs are deterministic
/// regardless of filesystem order.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .collect();
    files.sort();
    Ok(files)
}
