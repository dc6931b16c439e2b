use crate::cli::types::GameId;
use serde::{Deserialize, Serialize};


/// One player-count option and its "best at this count" vote tally.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerSuggestion {
    /// Player-count label. The catalog reports open-ended counts as text
    /// (e.g. `"4+"`), so this is not numeric.
    #[serde(rename = "playerCount")]
    pub player_count: String,
    #[serde(default)]
    pub best: u32,
}

/// Full metadata record for a single game, as served by the catalog.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GameRecord {
    pub id: GameId,
    pub name: String,
    /// Publication year; negative for BC-era games.
    #[serde(default)]
    pub year: i32,
    #[serde(rename = "playingTime", default)]
    pub playing_time: u32,
    #[serde(rename = "ratingAverage", default)]
    pub rating_average: f64,
    #[serde(rename = "ratingAverageWeight", default)]
    pub rating_average_weight: f64,
    /// Overall catalog rank; absent for unranked games.
    #[serde(rename = "boardgameRank", default)]
    pub boardgame_rank: Option<u32>,
    #[serde(rename = "minPlayers", default)]
    pub min_players: u32,
    #[serde(rename = "maxPlayers", default)]
    pub max_players: u32,
    #[serde(default)]
    pub expansions: Vec<String>,
    #[serde(rename = "usersRated", default)]
    pub users_rated: u64,
    #[serde(default)]
    pub image: String,
    #[serde(rename = "playerSuggestions", default)]
    pub player_suggestions: Vec<PlayerSuggestion>,
    #[serde(default)]
    pub mechanics: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub designers: Vec<String>,
    #[serde(default)]
    pub publishers: Vec<String>,
    #[serde(default)]
    pub families: Vec<String>,
}
