//! Per-game lineup records.
//!
//! A game's lineup arrives as a loosely typed JSON payload: a list (or a
//! map) of records, one per player, each carrying `player_id`, an
//! `innings` mapping of inning number to position code, and an optional
//! `batting_order`. Odd field shapes are tolerated; only a payload that
//! is not a list or map at all is an error.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{LineupError, Result};
use crate::{GameId, PlayerId, TeamId};


/// A scheduled or completed game with its raw lineup payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub team_id: TeamId,
    #[serde(default)]
    pub opponent_name: Option<String>,
    /// Number of innings the game was scheduled for.
    pub innings: u32,
    /// Unix timestamp of lineup submission, if submitted.
    #[serde(default)]
    pub submitted_at: Option<u64>,
    #[serde(default)]
    pub lineup_data: Option<Value>,
}

impl Game {
    pub fn is_lineup_submitted(&self) -> bool {
        self.submitted_at.is_some()
    }

    /// False when the payload is absent, null, an empty list, an empty
    /// map or an empty string.
    pub fn has_lineup_data(&self) -> bool {
        match &self.lineup_data {
            None | Some(Value::Null) => false,
            Some(Value::Array(items)) => !items.is_empty(),
            Some(Value::Object(map)) => !map.is_empty(),
            Some(Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        }
    }

    /// Submitted with non-empty lineup data.
    pub fn is_eligible(&self) -> bool {
        self.is_lineup_submitted() && self.has_lineup_data()
    }

    /// The first lineup record for `player_id`, if any.
    ///
    /// Returns `Ok(None)` for an empty payload or when the player has no
    /// record in this game. Fails only when the payload cannot be read as
    /// a list or map of records.
    pub fn entry_for(&self, player_id: PlayerId) -> Result<Option<LineupEntry>> {
        let Some(payload) = self.lineup_data.as_ref() else {
            return Ok(None);
        };

        match payload {
            Value::Null => Ok(None),
            Value::String(s) if s.is_empty() => Ok(None),
            Value::String(s) => {
                let decoded: Value = serde_json::from_str(s)
                    .map_err(|e| self.malformed(format!("undecodable payload: {e}")))?;
                self.find_entry(&decoded, player_id)
            }
            other => self.find_entry(other, player_id),
        }
    }

    fn find_entry(&self, payload: &Value, player_id: PlayerId) -> Result<Option<LineupEntry>> {
        let record = match payload {
            Value::Array(items) => items.iter().find_map(|item| record_for(item, player_id)),
            Value::Object(map) => map.values().find_map(|item| record_for(item, player_id)),
            other => {
                return Err(self.malformed(format!(
                    "expected a list or map of records, found {}",
                    value_kind(other)
                )))
            }
        };

        Ok(record.map(|r| LineupEntry::from_record(player_id, r)))
    }

    fn malformed(&self, reason: String) -> LineupError {
        LineupError::MalformedLineup {
            game_id: self.id.as_u64(),
            reason,
        }
    }
}

/// One inning's assignment. `position` is `None` when the source value
/// was empty or not a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InningSlot {
    pub inning: u32,
    pub position: Option<String>,
}

/// One player's assignments and batting slot for a single game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineupEntry {
    pub player_id: PlayerId,
    /// Innings in source order.
    pub innings: Vec<InningSlot>,
    pub batting_order: Option<i64>,
}

impl LineupEntry {
    fn from_record(player_id: PlayerId, record: &Map<String, Value>) -> Self {
        let innings = match record.get("innings") {
            Some(Value::Object(map)) => map
                .iter()
                .enumerate()
                .map(|(i, (key, value))| InningSlot {
                    inning: key.trim().parse().unwrap_or(i as u32 + 1),
                    position: position_code(value),
                })
                .collect(),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(i, value)| InningSlot {
                    inning: i as u32 + 1,
                    position: position_code(value),
                })
                .collect(),
            _ => Vec::new(),
        };

        Self {
            player_id,
            innings,
            batting_order: record.get("batting_order").and_then(numeric_value),
        }
    }

    /// Non-empty position codes in inning order.
    pub fn positions(&self) -> impl Iterator<Item = &str> {
        self.innings.iter().filter_map(|slot| slot.position.as_deref())
    }
}

fn record_for(item: &Value, player_id: PlayerId) -> Option<&Map<String, Value>> {
    let record = item.as_object()?;
    record
        .get("player_id")
        .filter(|id| matches_player(id, player_id))
        .map(|_| record)
}

/// Ids may be stored as numbers or numeric strings.
fn matches_player(value: &Value, player_id: PlayerId) -> bool {
    match value {
        Value::Number(n) => match n.as_u64() {
            Some(id) => id == player_id.as_u64(),
            None => n.as_f64() == Some(player_id.as_u64() as f64),
        },
        Value::String(s) => {
            let s = s.trim();
            match s.parse::<u64>() {
                Ok(id) => id == player_id.as_u64(),
                Err(_) => s.parse::<f64>().ok() == Some(player_id.as_u64() as f64),
            }
        }
        _ => false,
    }
}

fn position_code(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Integer value of a number or numeric string, truncating fractions.
fn numeric_value(value: &Value) -> Option<i64> {
    let raw = match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Some(i);
            }
            n.as_f64()?
        }
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    raw.is_finite().then(|| raw.trunc() as i64)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "map",
    }
}
