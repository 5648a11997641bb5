//! Single-player stats command implementation

use crate::{
    stats::PlayerRecord,
    storage::LineupDatabase,
    LineupError, PlayerId, Result,
};

use super::common::{format_player_line, format_position_counts};

/// Load a player into a fresh record; stats are computed on first access.
pub fn load_player_record(db: &LineupDatabase, player_id: PlayerId) -> Result<PlayerRecord> {
    let player = db
        .get_player(player_id)?
        .ok_or(LineupError::PlayerNotFound {
            player_id: player_id.as_u64(),
        })?;
    Ok(PlayerRecord::new(player))
}

/// Handle the player stats command
pub fn handle_player_stats(db: &LineupDatabase, player_id: PlayerId, as_json: bool) -> Result<()> {
    let record = load_player_record(db, player_id)?;
    let view = record.view(db);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", format_player_line(&view));
        let counts = format_position_counts(&view);
        if !counts.is_empty() {
            println!("  positions: {counts}");
        }
    }
    Ok(())
}
