//! `LineupSource` backed by the SQLite database

use super::schema::LineupDatabase;
use crate::catalog::Position;
use crate::lineup::Game;
use crate::roster::Team;
use crate::stats::LineupSource;
use crate::TeamId;

impl LineupSource for LineupDatabase {
    fn find_team(&self, team_id: TeamId) -> anyhow::Result<Option<Team>> {
        self.get_team(team_id)
    }

    fn submitted_games(&self, team_id: TeamId) -> anyhow::Result<Vec<Game>> {
        self.get_submitted_games(team_id)
    }

    fn positions(&self) -> anyhow::Result<Vec<Position>> {
        self.get_positions()
    }
}
