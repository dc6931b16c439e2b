//! ID types for the board-game catalog.

use crate::error::{LoaderError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for catalog game ids.
///
/// Ensures game ids are handled consistently throughout the application and
/// provides type safety to prevent mixing them up with ranks or other
/// numeric values.
///
/// # Examples
///
/// ```rust
/// use bgg_ranks::GameId;
///
/// let id = GameId::new(174430);
/// assert_eq!(id.as_u64(), 174430);
/// assert_eq!(id.to_string(), "174430");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub u64);

impl GameId {
    /// Create a new GameId from a u64 value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying u64 value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GameId {
    type Err = LoaderError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}
