//! Flattening of raw catalog records into store-ready rows.

use super::types::{GameRecord, PlayerSuggestion};
use crate::storage::models::{GameBundle, GameRow};

/// Publishers are capped at this many entries per game.
pub const PUBLISHER_LIMIT: usize = 5;

/// Pick the player-count option with the highest "best" vote tally.
///
/// Ties keep the earliest option in catalog order. Returns `None` when the
/// catalog offers no suggestions at all.
pub fn best_player_count(suggestions: &[PlayerSuggestion]) -> Option<&str> {
    let mut best: Option<&PlayerSuggestion> = None;
    for suggestion in suggestions {
        match best {
            Some(current) if suggestion.best <= current.best => {}
            _ => best = Some(suggestion),
        }
    }
    best.map(|s| s.player_count.as_str())
}

/// Flatten one raw record into the bundle of rows the store writer appends:
/// one scalar `games` row plus the five association lists.
pub fn flatten(record: GameRecord) -> GameBundle {
    let best_count = best_player_count(&record.player_suggestions).map(str::to_string);

    let mut publishers = record.publishers;
    publishers.truncate(PUBLISHER_LIMIT);

    GameBundle {
        game: GameRow {
            id: record.id,
            name: record.name,
            year: record.year,
            playing_time: record.playing_time,
            rating: record.rating_average,
            weight: record.rating_average_weight,
            bgg_rank: record.boardgame_rank,
            best_count,
            min_count: record.min_players,
            max_count: record.max_players,
            expansions: record.expansions.len() as u32,
            users_rated: record.users_rated,
            img_url: record.image,
        },
        mechanics: record.mechanics,
        categories: record.categories,
        designers: record.designers,
        publishers,
        families: record.families,
    }
}
