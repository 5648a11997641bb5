//! Team-wide stats command implementation

use std::sync::Arc;

use tracing::debug;

use crate::{
    lineup::Game,
    stats::{score_roster, PlayerRecord},
    storage::LineupDatabase,
    LineupError, Result, TeamId,
};

use super::common::format_player_line;

/// Score every player on a team from one shared load of its games.
pub fn score_team(db: &LineupDatabase, team_id: TeamId) -> Result<Vec<PlayerRecord>> {
    if db.get_team(team_id)?.is_none() {
        return Err(LineupError::TeamNotFound {
            team_id: team_id.as_u64(),
        });
    }

    let games: Arc<[Game]> = db.get_submitted_games(team_id)?.into();
    let players = db.players_for_team(team_id)?;
    debug!(team_id = %team_id, games = games.len(), players = players.len(), "Loaded team");

    let records: Vec<PlayerRecord> = players
        .into_iter()
        .map(|player| PlayerRecord::with_team_games(player, Arc::clone(&games)))
        .collect();

    score_roster(&records, db);
    Ok(records)
}

/// Handle the team stats command
pub fn handle_team_stats(db: &LineupDatabase, team_id: TeamId, as_json: bool) -> Result<()> {
    let records = score_team(db, team_id)?;
    let views: Vec<_> = records.iter().map(|record| record.view(db)).collect();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&views)?);
    } else if views.is_empty() {
        println!("No players on team {team_id}");
    } else {
        for view in &views {
            println!("{}", format_player_line(view));
        }
    }
    Ok(())
}
