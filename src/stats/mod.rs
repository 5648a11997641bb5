//! Player participation statistics.
//!
//! [`aggregate`] is the single calculation over an in-memory game set.
//! [`compute_from_source`] fetches the player's submitted team games first;
//! [`compute_from_preloaded`] reuses games already loaded by a batch caller
//! and falls back to fetching when none were supplied. Neither entry point
//! fails: missing teams, storage errors and malformed games all degrade to
//! a well-formed [`PlayerStats`] plus a logged warning.

pub mod record;
pub mod source;

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

use crate::catalog::{shared_catalog, PositionCatalog};
use crate::cli::types::PositionCategory;
use crate::error::Result;
use crate::lineup::Game;
use crate::roster::Player;
use crate::PlayerId;

pub use record::{score_roster, PlayerRecord, PlayerView};
pub use source::LineupSource;


/// Position codes that never count as active innings.
const OUT: &str = "OUT";
const BENCH: &str = "BENCH";

/// Participation summary for one player.
///
/// Serializes with the field names consumers read directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub pct_innings_played: f64,
    pub top_position: Option<String>,
    pub avg_batting_loc: Option<i64>,
    pub position_counts: PositionCounts,
    pub total_innings_participated_in: u64,
    pub active_innings_played: u64,
    pub pct_inf_played: f64,
    pub pct_of_played: f64,
}

/// Innings per raw position code, in first-seen order.
///
/// Keys keep the case they had in the lineup data. Serializes as a JSON
/// object in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionCounts(Vec<(String, u64)>);

impl PositionCounts {
    pub fn increment(&mut self, code: &str) {
        match self.0.iter_mut().find(|(key, _)| key == code) {
            Some((_, count)) => *count += 1,
            None => self.0.push((code.to_string(), 1)),
        }
    }

    pub fn get(&self, code: &str) -> Option<u64> {
        self.0
            .iter()
            .find(|(key, _)| key == code)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(key, count)| (key.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Most-played code other than exactly `OUT` or `BENCH`.
    ///
    /// Ties go to the code seen first.
    pub fn top_on_field(&self) -> Option<&str> {
        let mut top: Option<(&str, u64)> = None;
        for (code, count) in self.iter().filter(|(code, _)| *code != OUT && *code != BENCH) {
            if top.map_or(true, |(_, best)| count > best) {
                top = Some((code, count));
            }
        }
        top.map(|(code, _)| code)
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for PositionCounts {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(code, count)| (code.into(), count)).collect())
    }
}

impl Serialize for PositionCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (code, count) in &self.0 {
            map.serialize_entry(code, count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PositionCounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct CountsVisitor;

        impl<'de> Visitor<'de> for CountsVisitor {
            type Value = PositionCounts;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of position code to inning count")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
                let mut counts = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((code, count)) = access.next_entry::<String, u64>()? {
                    counts.push((code, count));
                }
                Ok(PositionCounts(counts))
            }
        }

        deserializer.deserialize_map(CountsVisitor)
    }
}

/// Running counters for one player across games.
#[derive(Debug, Default)]
struct Tally {
    total_innings: u64,
    active_innings: u64,
    infield_innings: u64,
    outfield_innings: u64,
    position_counts: PositionCounts,
    batting_orders: Vec<i64>,
}

impl Tally {
    /// Fold one game in. Nothing is counted when this returns an error.
    fn add_game(&mut self, game: &Game, player_id: PlayerId, catalog: &PositionCatalog) -> Result<()> {
        if !game.has_lineup_data() {
            return Ok(());
        }
        let Some(entry) = game.entry_for(player_id)? else {
            return Ok(());
        };

        self.total_innings += u64::from(game.innings);

        for code in entry.positions() {
            self.position_counts.increment(code);

            let upper = code.to_uppercase();
            if upper == OUT || upper == BENCH {
                continue;
            }
            self.active_innings += 1;
            match catalog.classify(&upper) {
                PositionCategory::Infield => self.infield_innings += 1,
                PositionCategory::Outfield => self.outfield_innings += 1,
                _ => {}
            }
        }

        if let Some(order) = entry.batting_order {
            self.batting_orders.push(order);
        }
        Ok(())
    }

    fn finish(self) -> PlayerStats {
        let top_position = self.position_counts.top_on_field().map(str::to_string);
        let avg_batting_loc = if self.batting_orders.is_empty() {
            None
        } else {
            // Summed as floats; huge slot numbers must not overflow.
            let sum: f64 = self.batting_orders.iter().map(|&order| order as f64).sum();
            Some((sum / self.batting_orders.len() as f64).round() as i64)
        };

        PlayerStats {
            pct_innings_played: percentage(self.active_innings, self.total_innings),
            top_position,
            avg_batting_loc,
            position_counts: self.position_counts,
            total_innings_participated_in: self.total_innings,
            active_innings_played: self.active_innings,
            pct_inf_played: percentage(self.infield_innings, self.active_innings),
            pct_of_played: percentage(self.outfield_innings, self.active_innings),
        }
    }
}

/// `part / whole` as a percentage rounded to one decimal; 0.0 when `whole` is 0.
fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    let pct = (part as f64 / whole as f64) * 100.0;
    (pct * 10.0).round() / 10.0
}

/// Compute stats for `player_id` over `games` in order.
///
/// Games whose lineup payload cannot be read are skipped with a warning;
/// games without a record for the player contribute nothing.
pub fn aggregate(player_id: PlayerId, games: &[Game], catalog: &PositionCatalog) -> PlayerStats {
    if games.is_empty() {
        return PlayerStats::default();
    }

    let mut tally = Tally::default();
    for game in games {
        if let Err(e) = tally.add_game(game, player_id, catalog) {
            warn!(game_id = %game.id, player_id = %player_id, "Skipping game in stats calculation: {e}");
        }
    }
    tally.finish()
}

/// Fetch the player's submitted team games from `source` and aggregate them.
pub fn compute_from_source<S: LineupSource + ?Sized>(player: &Player, source: &S) -> PlayerStats {
    let Some(team_id) = player.team_id else {
        warn!(player_id = %player.id, "Player has no team, returning default stats");
        return PlayerStats::default();
    };

    match source.find_team(team_id) {
        Ok(Some(_)) => {}
        Ok(None) => {
            warn!(player_id = %player.id, team_id = %team_id, "Player's team not found, returning default stats");
            return PlayerStats::default();
        }
        Err(e) => {
            warn!(player_id = %player.id, team_id = %team_id, "Failed to load team: {e:#}");
            return PlayerStats::default();
        }
    }

    let games: Vec<Game> = match source.submitted_games(team_id) {
        Ok(games) => games.into_iter().filter(Game::is_eligible).collect(),
        Err(e) => {
            warn!(player_id = %player.id, team_id = %team_id, "Failed to load submitted games: {e:#}");
            return PlayerStats::default();
        }
    };

    let catalog = shared_catalog(source);
    aggregate(player.id, &games, &catalog)
}

/// Aggregate over games already loaded by the caller.
///
/// `preloaded` must hold the player's submitted team games with lineup
/// data. When it is `None`, or the player has no team, this falls back
/// to [`compute_from_source`].
pub fn compute_from_preloaded<S: LineupSource + ?Sized>(
    player: &Player,
    preloaded: Option<&[Game]>,
    source: &S,
) -> PlayerStats {
    let games = match (player.team_id, preloaded) {
        (Some(_), Some(games)) => games,
        _ => {
            warn!(player_id = %player.id, "Stats requested from games that were not preloaded, falling back to fetching");
            return compute_from_source(player, source);
        }
    };

    let catalog = shared_catalog(source);
    aggregate(player.id, games, &catalog)
}
