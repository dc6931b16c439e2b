//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use types::Year;

#[derive(Debug, Parser)]
#[clap(name = "bgg-ranks", about = "Board-game ranking list loader")]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rebuild the local game store from the user ranking lists.
    ///
    /// Deletes the store file, then walks the list directory one CSV at a
    /// time, fetching catalog metadata for each game on first encounter.
    Load {
        /// Directory of per-user ranking CSVs (`<name>.csv`).
        #[clap(long, default_value = "data/user_lists")]
        user_lists: PathBuf,

        /// Path of the SQLite store to rebuild.
        #[clap(long, default_value = "data/bgg_data.sqlite")]
        database: PathBuf,
    },

    /// Export a year-over-year ranking comparison.
    ///
    /// Matches each `<name>_<year>.csv` in the previous-year directory with
    /// `<name>.csv` in the current directory and appends both row sets,
    /// tagged with year and name, into the comparison store.
    YearCompare {
        /// Directory of current ranking CSVs (`<name>.csv`).
        #[clap(long, default_value = "data/user_lists")]
        user_lists: PathBuf,

        /// Directory of historical ranking CSVs (`<name>_<year>.csv`).
        #[clap(long, default_value = "data/user_lists_old")]
        previous_lists: PathBuf,

        /// Path of the SQLite comparison store to rebuild.
        #[clap(long, default_value = "data/last_year_compare.sqlite")]
        database: PathBuf,

        /// Year the historical lists were exported (e.g. 2021).
        #[clap(long, default_value_t = Year::default())]
        last_year: Year,
    },
}
