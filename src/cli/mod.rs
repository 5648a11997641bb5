//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use types::{PlayerId, TeamId};

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Participation stats for one player.
    ///
    /// Loads the player's submitted team games from the database and
    /// aggregates innings, positions and batting order.
    PlayerStats {
        /// Player ID.
        #[clap(long, short)]
        player_id: PlayerId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Participation stats for every player on a team.
    ///
    /// Games are loaded once and shared across all players.
    TeamStats {
        /// Team ID.
        #[clap(long, short)]
        team_id: TeamId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List the position catalog.
    Positions {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "lineup-stats", about = "Youth lineup fair-play statistics")]
pub struct LineupStats {
    /// Database file (or set `LINEUP_STATS_DB` env var).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Log debug diagnostics to stderr (`RUST_LOG` overrides).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Import teams, players, games and positions from a JSON file
    Import {
        /// Path to the JSON file.
        file: PathBuf,

        /// Clear all data from the database before importing.
        #[clap(long)]
        clear_db: bool,
    },

    /// Get stats and catalog data
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}
