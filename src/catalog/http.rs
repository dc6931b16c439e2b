//! HTTP access to the game-catalog service.

use reqwest::Client;
use serde_json::Value;

use super::types::GameRecord;
use crate::{cli::types::GameId, Result};

/// Base path for the game-catalog JSON API.
pub const CATALOG_BASE_URL: &str = "https://bgg-json.azurewebsites.net/thing";

/// GET the raw catalog payload for one game id.
pub async fn get_game(client: &Client, id: GameId) -> Result<Value> {
    let url = format!("{CATALOG_BASE_URL}/{id}");

    let res = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;

    Ok(res)
}

/// A source of catalog metadata, keyed by game id.
///
/// The production implementation is [`CatalogClient`]; tests substitute a
/// canned source so runs stay offline.
pub trait CatalogSource {
    /// Fetch the full metadata record for one game.
    async fn game(&self, id: GameId) -> Result<GameRecord>;
}

/// HTTP-backed [`CatalogSource`].
pub struct CatalogClient {
    client: Client,
}

impl CatalogClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSource for CatalogClient {
    async fn game(&self, id: GameId) -> Result<GameRecord> {
        let raw = get_game(&self.client, id).await?;
        Ok(serde_json::from_value(raw)?)
    }
}
