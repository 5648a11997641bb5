//! Data models for importing into the storage layer

use serde::{Deserialize, Serialize};

use crate::catalog::Position;
use crate::lineup::Game;
use crate::roster::{Player, Team};

/// Contents of an import file.
///
/// Every section is optional. Games keep their `lineup_data` exactly as
/// given, so malformed payloads can be imported and are skipped later
/// during aggregation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub positions: Vec<Position>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub games: Vec<Game>,
}

/// Row counts written by an import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub positions: usize,
    pub teams: usize,
    pub players: usize,
    pub games: usize,
}
