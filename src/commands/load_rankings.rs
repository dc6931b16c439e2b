//! Rebuild the local game store from user ranking lists.
//!
//! Walks the list directory one CSV at a time. Each row becomes a
//! `user_ranks` entry; each game id is fetched from the catalog, flattened,
//! and appended to the store the first time it appears in the run. The
//! store file is deleted up front so every run rebuilds it from scratch.

use std::path::Path;

use crate::{
    catalog::{
        cache::GameCache,
        http::{CatalogClient, CatalogSource},
        normalize::flatten,
    },
    cli::types::GameId,
    lists::{list_files, person_from_filename, read_ranking_file},
    storage::{reset_store_file, RankingsStore, UserRank},
    Result,
};

/// Rebuild the store at `database` from every ranking file in `user_lists`.
///
/// Files are processed in sorted filename order; within a file, rank is the
/// 1-based row position. Any fetch, parse, or store error aborts the run.
pub async fn load_rankings(
    source: &impl CatalogSource,
    user_lists: &Path,
    database: &Path,
) -> Result<()> {
    // Remove the existing store so this run rebuilds it; the cache starts
    // empty for the same reason.
    reset_store_file(database);
    let mut cache = GameCache::new();

    for file in list_files(user_lists)? {
        let file_name = file
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        println!("Working on {file_name}...");

        let person = person_from_filename(&file_name);
        for ranked in read_ranking_file(&file)? {
            load_game(source, &mut cache, database, person, ranked.row.bgg_id, ranked.rank)
                .await?;
        }
    }

    println!("Finished - built local store at {}", database.display());
    Ok(())
}

/// Store one (user, game, rank) observation, fetching and flattening the
/// game's metadata if this is its first appearance in the run.
async fn load_game(
    source: &impl CatalogSource,
    cache: &mut GameCache,
    database: &Path,
    person: &str,
    id: GameId,
    rank: u32,
) -> Result<()> {
    if !cache.contains(id) {
        let record = source.game(id).await?;
        let bundle = flatten(record);
        {
            let mut store = RankingsStore::open(database)?;
            store.insert_game_bundle(&bundle)?;
        }
        cache.insert(id, bundle);
    }

    let mut store = RankingsStore::open(database)?;
    store.insert_user_rank(&UserRank {
        name: person.to_string(),
        game_id: id,
        rank,
    })?;
    Ok(())
}

/// CLI entry: run the load against the live catalog service.
pub async fn handle_load(user_lists: &Path, database: &Path) -> Result<()> {
    let client = CatalogClient::new();
    load_rankings(&client, user_lists, database).await
}
