//! Team and player records

use serde::{Deserialize, Serialize};

use crate::{PlayerId, TeamId};

/// A team as stored by the data source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

/// A rostered player. `team_id` is `None` for players not assigned to a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    #[serde(default)]
    pub team_id: Option<TeamId>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub jersey_number: Option<String>,
}

impl Player {
    pub fn new(id: PlayerId, team_id: Option<TeamId>) -> Self {
        Self {
            id,
            team_id,
            first_name: String::new(),
            last_name: String::new(),
            jersey_number: None,
        }
    }

    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    /// First and last name joined by a single space; either part may be empty.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
