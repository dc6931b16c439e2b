//! End-to-end tests for the load and year-compare pipelines
//!
//! The catalog is replaced by a canned source that counts fetches, so these
//! run offline and can assert the once-per-id fetch property.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use bgg_ranks::{
    catalog::{
        http::CatalogSource,
        types::{GameRecord, PlayerSuggestion},
    },
    commands::{load_rankings::load_rankings, year_compare::handle_year_compare},
    storage::{Association, ComparisonStore, RankingsStore},
    GameId, Result, Year,
};

/// Catalog source serving synthetic records and counting fetches per id.
#[derive(Default)]
struct MockCatalog {
    fetches: Mutex<HashMap<GameId, u32>>,
}

impl MockCatalog {
    fn fetch_count(&self, id: GameId) -> u32 {
        self.fetches
            .lock()
            .unwrap()
            .get(&id)
            .copied()
            .unwrap_or(0)
    }
}

impl CatalogSource for MockCatalog {
    async fn game(&self, id: GameId) -> Result<GameRecord> {
        *self.fetches.lock().unwrap().entry(id).or_insert(0) += 1;

        Ok(GameRecord {
            id,
            name: format!("Game {id}"),
            year: 2015,
            playing_time: 60,
            rating_average: 7.2,
            rating_average_weight: 2.5,
            boardgame_rank: Some(id.as_u64() as u32),
            min_players: 2,
            max_players: 4,
            expansions: vec!["Expansion".to_string()],
            users_rated: 5000,
            image: format!("https://example.invalid/{id}.jpg"),
            player_suggestions: vec![
                PlayerSuggestion {
                    player_count: "2".to_string(),
                    best: 3,
                },
                PlayerSuggestion {
                    player_count: "3".to_string(),
                    best: 7,
                },
                PlayerSuggestion {
                    player_count: "4".to_string(),
                    best: 2,
                },
            ],
            mechanics: vec!["Mechanic A".to_string()],
            categories: vec!["Category A".to_string()],
            designers: vec!["Designer A".to_string()],
            // More than the cap, so truncation is visible end to end.
            publishers: (1..=7).map(|i| format!("Publisher {i}")).collect(),
            families: vec!["Family A".to_string()],
        })
    }
}

fn write_csv(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[tokio::test]
async fn load_assigns_ranks_by_row_order() {
    let lists = tempfile::tempdir().unwrap();
    let store_dir = tempfile::tempdir().unwrap();
    let database = store_dir.path().join("bgg_data.sqlite");
    write_csv(
        lists.path(),
        "alice.csv",
        "Title,BggId\nGame 10,10\nGame 20,20\nGame 30,30\n",
    );

    let catalog = MockCatalog::default();
    load_rankings(&catalog, lists.path(), &database).await.unwrap();

    let store = RankingsStore::open(&database).unwrap();
    let ranks = store.user_ranks().unwrap();
    assert_eq!(ranks.len(), 3);
    for (i, rank) in ranks.iter().enumerate() {
        assert_eq!(rank.name, "alice");
        assert_eq!(rank.rank, i as u32 + 1);
    }
    assert_eq!(ranks[0].game_id, GameId::new(10));
    assert_eq!(ranks[2].game_id, GameId::new(30));
}

#[tokio::test]
async fn shared_game_is_fetched_and_inserted_once() {
    let lists = tempfile::tempdir().unwrap();
    let store_dir = tempfile::tempdir().unwrap();
    let database = store_dir.path().join("bgg_data.sqlite");
    // Game 100 appears in both lists; games 1 and 2 in one each.
    write_csv(lists.path(), "alice.csv", "Title,BggId\nShared,100\nA,1\n");
    write_csv(lists.path(), "bob.csv", "Title,BggId\nShared,100\nB,2\n");

    let catalog = MockCatalog::default();
    load_rankings(&catalog, lists.path(), &database).await.unwrap();

    assert_eq!(catalog.fetch_count(GameId::new(100)), 1);
    assert_eq!(catalog.fetch_count(GameId::new(1)), 1);
    assert_eq!(catalog.fetch_count(GameId::new(2)), 1);

    let store = RankingsStore::open(&database).unwrap();
    let games = store.games().unwrap();
    assert_eq!(games.len(), 3);

    // One user_ranks row per (user, game) occurrence.
    let ranks = store.user_ranks().unwrap();
    assert_eq!(ranks.len(), 4);
    let shared: Vec<_> = ranks
        .iter()
        .filter(|r| r.game_id == GameId::new(100))
        .collect();
    assert_eq!(shared.len(), 2);
    assert!(shared.iter().any(|r| r.name == "alice" && r.rank == 1));
    assert!(shared.iter().any(|r| r.name == "bob" && r.rank == 1));
}

#[tokio::test]
async fn load_flattens_metadata_through_the_store() {
    let lists = tempfile::tempdir().unwrap();
    let store_dir = tempfile::tempdir().unwrap();
    let database = store_dir.path().join("bgg_data.sqlite");
    write_csv(lists.path(), "alice.csv", "Title,BggId\nOnly,55\n");

    let catalog = MockCatalog::default();
    load_rankings(&catalog, lists.path(), &database).await.unwrap();

    let store = RankingsStore::open(&database).unwrap();
    let games = store.games().unwrap();
    let game = &games[0];
    assert_eq!(game.name, "Game 55");
    // Highest best-vote tally wins: counts [2,3,4] with votes [3,7,2].
    assert_eq!(game.best_count.as_deref(), Some("3"));
    assert_eq!(game.expansions, 1);

    let publishers = store
        .association_values(Association::Publisher, GameId::new(55))
        .unwrap();
    assert_eq!(publishers.len(), 5);
    assert_eq!(publishers[0], "Publisher 1");

    let mechanics = store
        .association_values(Association::Mechanic, GameId::new(55))
        .unwrap();
    assert_eq!(mechanics, vec!["Mechanic A".to_string()]);
}

#[tokio::test]
async fn rerunning_load_reproduces_identical_rows() {
    let lists = tempfile::tempdir().unwrap();
    let store_dir = tempfile::tempdir().unwrap();
    let database = store_dir.path().join("bgg_data.sqlite");
    write_csv(lists.path(), "alice.csv", "Title,BggId\nA,1\nB,2\n");
    write_csv(lists.path(), "bob.csv", "Title,BggId\nB,2\nC,3\n");

    let catalog = MockCatalog::default();
    load_rankings(&catalog, lists.path(), &database).await.unwrap();
    let (first_games, first_ranks) = {
        let store = RankingsStore::open(&database).unwrap();
        (store.games().unwrap(), store.user_ranks().unwrap())
    };

    // Second run deletes and rebuilds the store file.
    load_rankings(&catalog, lists.path(), &database).await.unwrap();
    let store = RankingsStore::open(&database).unwrap();
    let second_games = store.games().unwrap();
    let second_ranks = store.user_ranks().unwrap();

    assert_eq!(
        first_games.iter().map(|g| g.id).collect::<Vec<_>>(),
        second_games.iter().map(|g| g.id).collect::<Vec<_>>()
    );
    assert_eq!(first_ranks, second_ranks);
}

#[tokio::test]
async fn year_compare_tags_both_row_sets() {
    let current = tempfile::tempdir().unwrap();
    let previous = tempfile::tempdir().unwrap();
    let store_dir = tempfile::tempdir().unwrap();
    let database = store_dir.path().join("compare.sqlite");

    write_csv(
        current.path(),
        "alice.csv",
        "Title,BggId\nA,1\nB,2\nC,3\n",
    );
    write_csv(
        previous.path(),
        "alice_2021.csv",
        "Title,BggId\nC,3\nA,1\nD,4\n",
    );

    handle_year_compare(current.path(), previous.path(), &database, Year::new(2021)).unwrap();

    let store = ComparisonStore::open(&database).unwrap();
    let rows = store.rows().unwrap();
    assert_eq!(rows.len(), 6);
    assert!(rows.iter().all(|r| r.name == "alice"));
    assert_eq!(rows.iter().filter(|r| r.year == Year::new(2021)).count(), 3);
    assert_eq!(rows.iter().filter(|r| r.year == Year::new(2022)).count(), 3);

    // Old rows come first and are ranked by their own file order.
    assert_eq!(rows[0].bgg_id, GameId::new(3));
    assert_eq!(rows[0].rank, 1);
    assert_eq!(rows[3].bgg_id, GameId::new(1));
    assert_eq!(rows[3].year, Year::new(2022));
}

#[tokio::test]
async fn year_compare_preserves_mismatched_row_counts() {
    let current = tempfile::tempdir().unwrap();
    let previous = tempfile::tempdir().unwrap();
    let store_dir = tempfile::tempdir().unwrap();
    let database = store_dir.path().join("compare.sqlite");

    // Four current rows against three historical rows: both full sets land.
    write_csv(
        current.path(),
        "alice.csv",
        "Title,BggId\nA,1\nB,2\nC,3\nD,4\n",
    );
    write_csv(
        previous.path(),
        "alice_2021.csv",
        "Title,BggId\nA,1\nB,2\nC,3\n",
    );

    handle_year_compare(current.path(), previous.path(), &database, Year::new(2021)).unwrap();

    let store = ComparisonStore::open(&database).unwrap();
    let rows = store.rows().unwrap();
    assert_eq!(rows.len(), 7);
    assert_eq!(rows.iter().filter(|r| r.year == Year::new(2021)).count(), 3);
    assert_eq!(rows.iter().filter(|r| r.year == Year::new(2022)).count(), 4);
}

#[tokio::test]
async fn year_compare_skips_unmatched_files() {
    let current = tempfile::tempdir().unwrap();
    let previous = tempfile::tempdir().unwrap();
    let store_dir = tempfile::tempdir().unwrap();
    let database = store_dir.path().join("compare.sqlite");

    write_csv(current.path(), "alice.csv", "Title,BggId\nA,1\n");
    // Wrong year: skipped.
    write_csv(previous.path(), "alice_2019.csv", "Title,BggId\nA,1\n");
    // No carol.csv in the current directory: skipped.
    write_csv(previous.path(), "carol_2021.csv", "Title,BggId\nA,1\n");

    handle_year_compare(current.path(), previous.path(), &database, Year::new(2021)).unwrap();

    let store = ComparisonStore::open(&database).unwrap();
    assert!(store.rows().unwrap().is_empty());
}

#[tokio::test]
async fn year_compare_rejects_malformed_filenames() {
    let current = tempfile::tempdir().unwrap();
    let previous = tempfile::tempdir().unwrap();
    let store_dir = tempfile::tempdir().unwrap();
    let database = store_dir.path().join("compare.sqlite");

    write_csv(previous.path(), "alice-2021.csv", "Title,BggId\nA,1\n");

    let result =
        handle_year_compare(current.path(), previous.path(), &database, Year::new(2021));
    assert!(result.is_err());
}
