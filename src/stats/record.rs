//! Per-player memoization of computed stats

use std::sync::{Arc, OnceLock};

use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use super::{compute_from_preloaded, compute_from_source, LineupSource, PlayerStats};
use crate::catalog::shared_catalog;
use crate::lineup::Game;
use crate::roster::Player;
use crate::{PlayerId, TeamId};

/// A player together with its lazily computed stats.
///
/// The first computation through any accessor is stored and returned by
/// every later call on the same record. There is no invalidation; build a
/// new record to see changed lineup data.
#[derive(Debug)]
pub struct PlayerRecord {
    player: Player,
    team_games: Option<Arc<[Game]>>,
    stats: OnceLock<PlayerStats>,
}

/// Serializable display form of a player and its stats.
#[derive(Debug, Serialize)]
pub struct PlayerView<'a> {
    pub id: PlayerId,
    pub team_id: Option<TeamId>,
    pub full_name: String,
    pub jersey_number: Option<&'a str>,
    pub stats: &'a PlayerStats,
}

impl PlayerRecord {
    pub fn new(player: Player) -> Self {
        Self {
            player,
            team_games: None,
            stats: OnceLock::new(),
        }
    }

    /// Record backed by the team's already loaded submitted games, shared
    /// with the other players of a batch.
    pub fn with_team_games(player: Player, team_games: Arc<[Game]>) -> Self {
        Self {
            player,
            team_games: Some(team_games),
            stats: OnceLock::new(),
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn has_preloaded_games(&self) -> bool {
        self.team_games.is_some()
    }

    pub fn stats_from_source<S: LineupSource + ?Sized>(&self, source: &S) -> &PlayerStats {
        self.stats
            .get_or_init(|| compute_from_source(&self.player, source))
    }

    pub fn stats_from_preloaded<S: LineupSource + ?Sized>(&self, source: &S) -> &PlayerStats {
        self.stats.get_or_init(|| {
            compute_from_preloaded(&self.player, self.team_games.as_deref(), source)
        })
    }

    /// Stats via the preloaded games when present, otherwise fetched.
    pub fn stats<S: LineupSource + ?Sized>(&self, source: &S) -> &PlayerStats {
        if self.has_preloaded_games() {
            self.stats_from_preloaded(source)
        } else {
            self.stats_from_source(source)
        }
    }

    /// Stats computed so far, without computing.
    pub fn cached_stats(&self) -> Option<&PlayerStats> {
        self.stats.get()
    }

    pub fn view<S: LineupSource + ?Sized>(&self, source: &S) -> PlayerView<'_> {
        PlayerView {
            id: self.player.id,
            team_id: self.player.team_id,
            full_name: self.player.full_name(),
            jersey_number: self.player.jersey_number.as_deref(),
            stats: self.stats(source),
        }
    }
}

/// Compute stats for every record in parallel.
///
/// The catalog is published before fan-out so workers only read it.
/// Records share their game data read-only and each writes only its own
/// cache.
pub fn score_roster<S: LineupSource + Sync + ?Sized>(records: &[PlayerRecord], source: &S) {
    let catalog = shared_catalog(source);
    records.par_iter().for_each(|record| {
        record.stats(source);
    });
    info!(
        players = records.len(),
        positions = catalog.len(),
        "Scored roster"
    );
}
