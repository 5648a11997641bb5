//! Youth Lineup Participation Statistics Library
//!
//! Tracks team rosters and per-game lineups and derives fair-play
//! participation statistics for each player: how many innings they played,
//! where they played them, and where they batted.
//!
//! ## Features
//!
//! - **Stats Aggregation**: Innings played, position counts, infield and
//!   outfield share, average batting slot
//! - **Fault Isolation**: A malformed game lineup is skipped with a
//!   warning; the rest of the season still counts
//! - **Batch Scoring**: Load a team's games once and score every player in
//!   parallel
//! - **Database Storage**: SQLite store for teams, players, games and the
//!   position catalog
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lineup_stats::{stats::PlayerRecord, storage::LineupDatabase, PlayerId};
//!
//! # fn example() -> lineup_stats::Result<()> {
//! let db = LineupDatabase::open(std::path::Path::new("lineups.db"))?;
//! let player = db.get_player(PlayerId::new(7))?.expect("player exists");
//!
//! let record = PlayerRecord::new(player);
//! println!("{:?}", record.stats(&db));
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set the database path to avoid passing `--db` in every command:
//! ```bash
//! export LINEUP_STATS_DB=~/lineups.db
//! ```

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod error;
pub mod lineup;
pub mod roster;
pub mod stats;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{GameId, PlayerId, PositionCategory, TeamId};
pub use error::{LineupError, Result};
pub use stats::PlayerStats;

pub const DB_PATH_ENV_VAR: &str = "LINEUP_STATS_DB";
