//! Data source consumed by the stats entry points

use crate::catalog::Position;
use crate::lineup::Game;
use crate::roster::Team;
use crate::TeamId;

/// Supplies teams, submitted games and the position catalog.
///
/// Implementations return storage errors as `anyhow::Error`; the stats
/// entry points log them and fall back to a default result.
pub trait LineupSource {
    fn find_team(&self, team_id: TeamId) -> anyhow::Result<Option<Team>>;

    /// Games for `team_id` that are submitted and carry non-empty lineup
    /// data, in a stable order.
    fn submitted_games(&self, team_id: TeamId) -> anyhow::Result<Vec<Game>>;

    fn positions(&self) -> anyhow::Result<Vec<Position>>;
}
