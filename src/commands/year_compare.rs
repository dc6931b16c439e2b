//! Year-over-year ranking comparison export.
//!
//! For each historical `<name>_<year>.csv`, finds the person's current
//! list and appends both row sets, tagged with year and name, into the
//! comparison store. A historical file whose year does not match the
//! configured last year, or whose person has no current list, contributes
//! nothing.

use std::path::Path;

use crate::{
    cli::types::Year,
    lists::{list_files, parse_historical_filename, read_ranking_file, RankedRow},
    storage::{reset_store_file, ComparisonRow, ComparisonStore},
    Result,
};

/// Export tagged ranking snapshots for every person with lists in both years.
///
/// Both files' full row sets are appended even when their lengths differ;
/// downstream analysis is expected to cope with the asymmetry.
pub fn handle_year_compare(
    user_lists: &Path,
    previous_lists: &Path,
    database: &Path,
    last_year: Year,
) -> Result<()> {
    reset_store_file(database);

    for file in list_files(previous_lists)? {
        let (name, year) = parse_historical_filename(&file)?;

        // Year doesn't match - ignore it.
        if year != last_year {
            continue;
        }

        // No list for this year - ignore it.
        let current_file = user_lists.join(format!("{name}.csv"));
        if !current_file.exists() {
            continue;
        }

        let old_rows = tag_rows(read_ranking_file(&file)?, last_year, &name);
        let new_rows = tag_rows(read_ranking_file(&current_file)?, last_year.next(), &name);

        let mut store = ComparisonStore::open(database)?;
        store.insert_rows(&old_rows)?;
        store.insert_rows(&new_rows)?;
    }

    Ok(())
}

/// Tag each ranked row with the year it was recorded and its owner.
fn tag_rows(rows: Vec<RankedRow>, year: Year, name: &str) -> Vec<ComparisonRow> {
    rows.into_iter()
        .map(|r| ComparisonRow {
            bgg_id: r.row.bgg_id,
            title: r.row.title,
            rank: r.rank,
            year,
            name: name.to_string(),
        })
        .collect()
}
