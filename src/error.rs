//! Error types for the lineup statistics crate

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, LineupError>;

#[derive(Error, Debug)]
pub enum LineupError {
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),

    #[error("Database path not provided and {env_var} environment variable not set")]
    MissingDatabasePath { env_var: String },

    #[error("Failed to parse id: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Malformed lineup for game {game_id}: {reason}")]
    MalformedLineup { game_id: u64, reason: String },

    #[error("Invalid position category: {category}")]
    InvalidCategory { category: String },

    #[error("Player not found: {player_id}")]
    PlayerNotFound { player_id: u64 },

    #[error("Team not found: {team_id}")]
    TeamNotFound { team_id: u64 },
}
