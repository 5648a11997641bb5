//! Database schema and connection management

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// SQLite-backed store of teams, players, games and positions.
///
/// The connection sits behind a mutex so one database can serve a batch
/// of players scored on several threads.
pub struct LineupDatabase {
    conn: Mutex<Connection>,
}

impl LineupDatabase {
    /// Open (or create) the database at `path` and ensure tables exist.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("failed to open database at {}", path.display()))?;
        Self::from_connection(conn)
    }

    /// Ephemeral database, mainly for tests.
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("failed to open in-memory database")?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(
            "PRAGMA busy_timeout = 5000;
             PRAGMA foreign_keys = ON;",
        )
        .context("failed to set database pragmas")?;

        let db = Self {
            conn: Mutex::new(conn),
        };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Acquire the connection, recovering it if another thread panicked
    /// while holding the lock.
    pub(crate) fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        self.conn()
            .execute_batch(
                "
                CREATE TABLE IF NOT EXISTS teams (
                    id   INTEGER PRIMARY KEY,
                    name TEXT NOT NULL
                );

                CREATE TABLE IF NOT EXISTS players (
                    id            INTEGER PRIMARY KEY,
                    team_id       INTEGER REFERENCES teams(id),
                    first_name    TEXT NOT NULL DEFAULT '',
                    last_name     TEXT NOT NULL DEFAULT '',
                    jersey_number TEXT
                );

                CREATE TABLE IF NOT EXISTS positions (
                    name     TEXT PRIMARY KEY,
                    category TEXT NOT NULL
                );

                CREATE TABLE IF NOT EXISTS games (
                    id            INTEGER PRIMARY KEY,
                    team_id       INTEGER NOT NULL REFERENCES teams(id),
                    opponent_name TEXT,
                    innings       INTEGER NOT NULL,
                    submitted_at  INTEGER,
                    lineup_data   TEXT
                );

                CREATE INDEX IF NOT EXISTS idx_players_team ON players(team_id);
                CREATE INDEX IF NOT EXISTS idx_games_team_submitted
                    ON games(team_id, submitted_at);
                ",
            )
            .context("failed to initialize schema")?;
        Ok(())
    }
}
