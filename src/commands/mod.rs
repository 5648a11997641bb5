//! Command implementations for the lineup stats CLI

pub mod common;
pub mod import;
pub mod player_stats;
pub mod positions;
pub mod team_stats;

use std::path::PathBuf;

use crate::{storage::LineupDatabase, LineupError, Result, DB_PATH_ENV_VAR};

/// Database path from the flag, then the environment, then the platform
/// data directory.
pub fn resolve_database_path(db: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = db {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(DB_PATH_ENV_VAR).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    dirs::data_dir()
        .map(|dir| dir.join("lineup-stats").join("lineups.db"))
        .ok_or_else(|| LineupError::MissingDatabasePath {
            env_var: DB_PATH_ENV_VAR.to_string(),
        })
}

/// Open the database at the resolved path
pub fn open_database(db: Option<PathBuf>) -> Result<LineupDatabase> {
    let path = resolve_database_path(db)?;
    tracing::debug!(path = %path.display(), "Opening database");
    Ok(LineupDatabase::open(&path)?)
}
