//! Append and read-back operations for the stores.
//!
//! All inserts are append-only: no upserts, no row-level existence checks.
//! Within a run, duplicate-game protection comes entirely from the
//! run-scoped id cache upstream.

use super::models::{Association, ComparisonRow, GameBundle, GameRow, UserRank};
use super::schema::{ComparisonStore, RankingsStore};
use crate::cli::types::{GameId, Year};
use anyhow::Result;
use rusqlite::{params, Row};

impl RankingsStore {
    /// Append one flattened game: the scalar row plus every association row.
    pub fn insert_game_bundle(&mut self, bundle: &GameBundle) -> Result<()> {
        self.conn.execute(
            "INSERT INTO games (id, name, year, playing_time, rating, weight, bgg_rank,
                                best_count, min_count, max_count, expansions, users_rated, img_url)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                bundle.game.id.as_u64(),
                bundle.game.name,
                bundle.game.year,
                bundle.game.playing_time,
                bundle.game.rating,
                bundle.game.weight,
                bundle.game.bgg_rank,
                bundle.game.best_count,
                bundle.game.min_count,
                bundle.game.max_count,
                bundle.game.expansions,
                bundle.game.users_rated,
                bundle.game.img_url,
            ],
        )?;

        for (assoc, values) in bundle.associations() {
            let sql = format!(
                "INSERT INTO {} (game_id, {}) VALUES (?, ?)",
                assoc.table(),
                assoc.column()
            );
            let mut stmt = self.conn.prepare(&sql)?;
            for value in values {
                stmt.execute(params![bundle.game.id.as_u64(), value])?;
            }
        }

        Ok(())
    }

    /// Append one (user, game, rank) row.
    pub fn insert_user_rank(&mut self, rank: &UserRank) -> Result<()> {
        self.conn.execute(
            "INSERT INTO user_ranks (name, game_id, rank) VALUES (?, ?, ?)",
            params![rank.name, rank.game_id.as_u64(), rank.rank],
        )?;
        Ok(())
    }

    /// All game rows, ordered by id.
    pub fn games(&self) -> Result<Vec<GameRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, year, playing_time, rating, weight, bgg_rank,
                    best_count, min_count, max_count, expansions, users_rated, img_url
             FROM games ORDER BY id",
        )?;

        let rows = stmt.query_map([], Self::row_to_game)?;

        let mut games = Vec::new();
        for row in rows {
            games.push(row?);
        }
        Ok(games)
    }

    /// All user-rank rows, in insertion order.
    pub fn user_ranks(&self) -> Result<Vec<UserRank>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, game_id, rank FROM user_ranks")?;

        let rows = stmt.query_map([], |row| {
            Ok(UserRank {
                name: row.get(0)?,
                game_id: GameId::new(row.get(1)?),
                rank: row.get(2)?,
            })
        })?;

        let mut ranks = Vec::new();
        for row in rows {
            ranks.push(row?);
        }
        Ok(ranks)
    }

    /// Association values recorded for one game, in insertion order.
    pub fn association_values(&self, assoc: Association, id: GameId) -> Result<Vec<String>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE game_id = ?",
            assoc.column(),
            assoc.table()
        );
        let mut stmt = self.conn.prepare(&sql)?;

        let rows = stmt.query_map(params![id.as_u64()], |row| row.get(0))?;

        let mut values = Vec::new();
        for row in rows {
            values.push(row?);
        }
        Ok(values)
    }

    fn row_to_game(row: &Row) -> rusqlite::Result<GameRow> {
        Ok(GameRow {
            id: GameId::new(row.get(0)?),
            name: row.get(1)?,
            year: row.get(2)?,
            playing_time: row.get(3)?,
            rating: row.get(4)?,
            weight: row.get(5)?,
            bgg_rank: row.get(6)?,
            best_count: row.get(7)?,
            min_count: row.get(8)?,
            max_count: row.get(9)?,
            expansions: row.get(10)?,
            users_rated: row.get(11)?,
            img_url: row.get(12)?,
        })
    }
}

impl ComparisonStore {
    /// Append one tagged snapshot row set.
    pub fn insert_rows(&mut self, rows: &[ComparisonRow]) -> Result<()> {
        let mut stmt = self.conn.prepare(
            "INSERT INTO ranks (BggId, Title, Rank, Year, Name) VALUES (?, ?, ?, ?, ?)",
        )?;
        for row in rows {
            stmt.execute(params![
                row.bgg_id.as_u64(),
                row.title,
                row.rank,
                row.year.as_u16(),
                row.name,
            ])?;
        }
        Ok(())
    }

    /// All comparison rows, in insertion order.
    pub fn rows(&self) -> Result<Vec<ComparisonRow>> {
        let mut stmt = self
            .conn
            .prepare("SELECT BggId, Title, Rank, Year, Name FROM ranks")?;

        let rows = stmt.query_map([], |row| {
            Ok(ComparisonRow {
                bgg_id: GameId::new(row.get(0)?),
                title: row.get(1)?,
                rank: row.get(2)?,
                year: Year::new(row.get(3)?),
                name: row.get(4)?,
            })
        })?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }
}
