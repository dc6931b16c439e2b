//! Run-scoped cache of games already flattened this run.

use std::collections::HashMap;

use crate::cli::types::GameId;
use crate::storage::models::GameBundle;

/// Games seen so far in the current run, keyed by catalog id.
///
/// Membership marks a game's rows as already written, so an id appearing in
/// several users' lists is fetched and inserted once. The map never evicts;
/// the write-at-most-once invariant depends on that. It is cleared at the
/// start of each run and does not survive the process.
#[derive(Debug, Default)]
pub struct GameCache {
    games: HashMap<GameId, GameBundle>,
}

impl GameCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: GameId) -> bool {
        self.games.contains_key(&id)
    }

    pub fn insert(&mut self, id: GameId, bundle: GameBundle) {
        self.games.insert(id, bundle);
    }

    pub fn get(&self, id: GameId) -> Option<&GameBundle> {
        self.games.get(&id)
    }

    pub fn clear(&mut self) {
        self.games.clear();
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::models::GameRow;

    fn bundle(id: u64) -> GameBundle {
        GameBundle {
            game: GameRow {
                id: GameId::new(id),
                name: format!("Game {id}"),
                year: 2020,
                playing_time: 60,
                rating: 7.0,
                weight: 2.0,
                bgg_rank: None,
                best_count: Some("3".to_string()),
                min_count: 2,
                max_count: 4,
                expansions: 0,
                users_rated: 100,
                img_url: String::new(),
            },
            mechanics: vec![],
            categories: vec![],
            designers: vec![],
            publishers: vec![],
            families: vec![],
        }
    }

    #[test]
    fn insert_then_contains() {
        let mut cache = GameCache::new();
        assert!(!cache.contains(GameId::new(7)));

        cache.insert(GameId::new(7), bundle(7));
        assert!(cache.contains(GameId::new(7)));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(GameId::new(7)).unwrap().game.name, "Game 7");
    }

    #[test]
    fn clear_empties_the_cache() {
        let mut cache = GameCache::new();
        cache.insert(GameId::new(1), bundle(1));
        cache.insert(GameId::new(2), bundle(2));
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
        assert!(!cache.contains(GameId::new(1)));
    }
}
