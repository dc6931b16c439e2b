//! Data models for the storage layer

use crate::cli::types::{GameId, Year};
use serde::{Deserialize, Serialize};

/// One row of the `games` table: the scalar fields of a catalog record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRow {
    pub id: GameId,
    pub name: String,
    pub year: i32,
    pub playing_time: u32,
    pub rating: f64,
    pub weight: f64,
    pub bgg_rank: Option<u32>,
    /// Player-count label with the most "best" votes; text because the
    /// catalog reports open-ended counts like `"4+"`.
    pub best_count: Option<String>,
    pub min_count: u32,
    pub max_count: u32,
    pub expansions: u32,
    pub users_rated: u64,
    pub img_url: String,
}

/// A flattened catalog record: one game row plus its association lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameBundle {
    pub game: GameRow,
    pub mechanics: Vec<String>,
    pub categories: Vec<String>,
    pub designers: Vec<String>,
    pub publishers: Vec<String>,
    pub families: Vec<String>,
}

/// The association tables hanging off `games`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Association {
    Mechanic,
    Category,
    Designer,
    Publisher,
    Family,
}

impl Association {
    pub fn table(&self) -> &'static str {
        match self {
            Association::Mechanic => "mechanics",
            Association::Category => "categories",
            Association::Designer => "designers",
            Association::Publisher => "publishers",
            Association::Family => "families",
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            Association::Mechanic => "mechanic",
            Association::Category => "category",
            Association::Designer => "designer",
            Association::Publisher => "publisher",
            Association::Family => "family",
        }
    }
}

impl GameBundle {
    /// The association lists paired with their target tables.
    pub fn associations(&self) -> [(Association, &[String]); 5] {
        [
            (Association::Mechanic, self.mechanics.as_slice()),
            (Association::Category, self.categories.as_slice()),
            (Association::Designer, self.designers.as_slice()),
            (Association::Publisher, self.publishers.as_slice()),
            (Association::Family, self.families.as_slice()),
        ]
    }
}

/// One row of the `user_ranks` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRank {
    pub name: String,
    pub game_id: GameId,
    pub rank: u32,
}

/// One row of the comparison store's `ranks` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub bgg_id: GameId,
    pub title: String,
    pub rank: u32,
    pub year: Year,
    pub name: String,
}
