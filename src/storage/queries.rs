//! Database query operations

use super::{models::*, schema::LineupDatabase};
use crate::catalog::Position;
use crate::lineup::Game;
use crate::roster::{Player, Team};
use crate::{GameId, PlayerId, PositionCategory, TeamId};
use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde_json::Value;
use tracing::warn;

const GAME_COLUMNS: &str = "id, team_id, opponent_name, innings, submitted_at, lineup_data";
const PLAYER_COLUMNS: &str = "id, team_id, first_name, last_name, jersey_number";

impl LineupDatabase {
    /// Insert or update a team
    pub fn upsert_team(&self, team: &Team) -> Result<()> {
        upsert_team(&self.conn(), team)
    }

    /// Insert or update a player
    pub fn upsert_player(&self, player: &Player) -> Result<()> {
        upsert_player(&self.conn(), player)
    }

    /// Insert or update a catalog position
    pub fn upsert_position(&self, position: &Position) -> Result<()> {
        upsert_position(&self.conn(), position)
    }

    /// Insert or update a game, storing its lineup payload as JSON text
    pub fn upsert_game(&self, game: &Game) -> Result<()> {
        upsert_game(&self.conn(), game)
    }

    /// Write every section of `fixture` in one transaction.
    pub fn import_fixture(&self, fixture: &Fixture) -> Result<ImportSummary> {
        let mut conn = self.conn();
        let tx = conn
            .transaction()
            .context("failed to begin import transaction")?;

        for position in &fixture.positions {
            upsert_position(&tx, position)?;
        }
        for team in &fixture.teams {
            upsert_team(&tx, team)?;
        }
        for player in &fixture.players {
            upsert_player(&tx, player)?;
        }
        for game in &fixture.games {
            upsert_game(&tx, game)?;
        }

        tx.commit().context("failed to commit import")?;

        Ok(ImportSummary {
            positions: fixture.positions.len(),
            teams: fixture.teams.len(),
            players: fixture.players.len(),
            games: fixture.games.len(),
        })
    }

    pub fn get_team(&self, team_id: TeamId) -> Result<Option<Team>> {
        self.conn()
            .query_row(
                "SELECT id, name FROM teams WHERE id = ?",
                params![team_id.as_u64()],
                |row| {
                    Ok(Team {
                        id: TeamId::new(row.get(0)?),
                        name: row.get(1)?,
                    })
                },
            )
            .optional()
            .context("failed to load team")
    }

    pub fn get_player(&self, player_id: PlayerId) -> Result<Option<Player>> {
        self.conn()
            .query_row(
                &format!("SELECT {PLAYER_COLUMNS} FROM players WHERE id = ?"),
                params![player_id.as_u64()],
                row_to_player,
            )
            .optional()
            .context("failed to load player")
    }

    /// Players on a team, ordered by id
    pub fn players_for_team(&self, team_id: TeamId) -> Result<Vec<Player>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(&format!(
            "SELECT {PLAYER_COLUMNS} FROM players WHERE team_id = ? ORDER BY id"
        ))?;

        let rows = stmt.query_map(params![team_id.as_u64()], row_to_player)?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    /// Submitted games with non-empty lineup data, ordered by id.
    ///
    /// Rows that fail to decode are logged and skipped.
    pub fn get_submitted_games(&self, team_id: TeamId) -> Result<Vec<Game>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(&format!(
            "SELECT {GAME_COLUMNS} FROM games
             WHERE team_id = ?
               AND submitted_at IS NOT NULL
               AND lineup_data IS NOT NULL
               AND TRIM(lineup_data) NOT IN ('', '[]', '{{}}', 'null')
             ORDER BY id"
        ))?;

        let rows = stmt.query_map(params![team_id.as_u64()], read_game_row)?;

        let mut games = Vec::new();
        for row in rows {
            match row? {
                Ok(game) => games.push(game),
                Err((game_id, e)) => warn!(game_id, team_id = %team_id, "Skipping unreadable game row: {e}"),
            }
        }
        Ok(games)
    }

    /// All games for a team regardless of submission, ordered by id
    #[cfg(test)]
    pub(crate) fn get_team_games(&self, team_id: TeamId) -> Result<Vec<Game>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(&format!(
            "SELECT {GAME_COLUMNS} FROM games WHERE team_id = ? ORDER BY id"
        ))?;

        let rows = stmt.query_map(params![team_id.as_u64()], row_to_game)?;

        let mut games = Vec::new();
        for row in rows {
            games.push(row?);
        }
        Ok(games)
    }

    /// Catalog positions in insertion order
    pub fn get_positions(&self) -> Result<Vec<Position>> {
        let conn = self.conn();
        let mut stmt = conn.prepare("SELECT name, category FROM positions ORDER BY rowid")?;

        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut positions = Vec::new();
        for row in rows {
            let (name, category) = row?;
            // Unknown categories classify like unknown codes.
            let category = category
                .parse::<PositionCategory>()
                .unwrap_or(PositionCategory::Other);
            positions.push(Position { name, category });
        }
        Ok(positions)
    }

    pub fn position_count(&self) -> Result<usize> {
        let count: i64 = self
            .conn()
            .query_row("SELECT COUNT(*) FROM positions", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Remove all data from the database
    pub fn clear_all_data(&self) -> Result<()> {
        self.conn().execute_batch(
            "DELETE FROM games;
             DELETE FROM players;
             DELETE FROM teams;
             DELETE FROM positions;",
        )?;
        Ok(())
    }
}

fn upsert_team(conn: &Connection, team: &Team) -> Result<()> {
    conn.execute(
        "INSERT INTO teams (id, name) VALUES (?, ?)
         ON CONFLICT(id) DO UPDATE SET name = excluded.name",
        params![team.id.as_u64(), team.name],
    )
    .with_context(|| format!("failed to upsert team {}", team.id))?;
    Ok(())
}

fn upsert_player(conn: &Connection, player: &Player) -> Result<()> {
    conn.execute(
        "INSERT INTO players (id, team_id, first_name, last_name, jersey_number)
         VALUES (?, ?, ?, ?, ?)
         ON CONFLICT(id) DO UPDATE SET
             team_id = excluded.team_id,
             first_name = excluded.first_name,
             last_name = excluded.last_name,
             jersey_number = excluded.jersey_number",
        params![
            player.id.as_u64(),
            player.team_id.map(|id| id.as_u64()),
            player.first_name,
            player.last_name,
            player.jersey_number
        ],
    )
    .with_context(|| format!("failed to upsert player {}", player.id))?;
    Ok(())
}

fn upsert_position(conn: &Connection, position: &Position) -> Result<()> {
    conn.execute(
        "INSERT INTO positions (name, category) VALUES (?, ?)
         ON CONFLICT(name) DO UPDATE SET category = excluded.category",
        params![position.name, position.category.as_str()],
    )
    .with_context(|| format!("failed to upsert position {}", position.name))?;
    Ok(())
}

fn upsert_game(conn: &Connection, game: &Game) -> Result<()> {
    conn.execute(
        "INSERT INTO games (id, team_id, opponent_name, innings, submitted_at, lineup_data)
         VALUES (?, ?, ?, ?, ?, ?)
         ON CONFLICT(id) DO UPDATE SET
             team_id = excluded.team_id,
             opponent_name = excluded.opponent_name,
             innings = excluded.innings,
             submitted_at = excluded.submitted_at,
             lineup_data = excluded.lineup_data",
        params![
            game.id.as_u64(),
            game.team_id.as_u64(),
            game.opponent_name,
            game.innings,
            game.submitted_at,
            game.lineup_data.as_ref().and_then(lineup_text)
        ],
    )
    .with_context(|| format!("failed to upsert game {}", game.id))?;
    Ok(())
}

/// JSON text stored for a lineup payload. Strings are stored verbatim so
/// already-encoded payloads are not encoded twice.
fn lineup_text(payload: &Value) -> Option<String> {
    match payload {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn row_to_player(row: &Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: PlayerId::new(row.get(0)?),
        team_id: row.get::<_, Option<u64>>(1)?.map(TeamId::new),
        first_name: row.get(2)?,
        last_name: row.get(3)?,
        jersey_number: row.get(4)?,
    })
}

/// Decode a game row, keeping the row's id alongside any decode error so
/// one bad row does not end the whole query.
fn read_game_row(row: &Row) -> rusqlite::Result<std::result::Result<Game, (i64, rusqlite::Error)>> {
    let game_id: i64 = row.get(0)?;
    Ok(row_to_game(row).map_err(|e| (game_id, e)))
}

/// Lineup text that is not valid JSON is kept as a string value; the
/// aggregator reports and skips it.
fn row_to_game(row: &Row) -> rusqlite::Result<Game> {
    let lineup_data = row
        .get::<_, Option<String>>(5)?
        .map(|text| serde_json::from_str(&text).unwrap_or(Value::String(text)));

    Ok(Game {
        id: GameId::new(row.get(0)?),
        team_id: TeamId::new(row.get(1)?),
        opponent_name: row.get(2)?,
        innings: row.get(3)?,
        submitted_at: row.get(4)?,
        lineup_data,
    })
}
