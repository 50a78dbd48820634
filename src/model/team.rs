//! Team and player records

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Id, Record};
use crate::error::LeagueError;

/// Approval state of a team registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamStatus {
    Pending,
    Approved,
    Rejected,
}

impl TeamStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamStatus::Pending => "pending",
            TeamStatus::Approved => "approved",
            TeamStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for TeamStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TeamStatus {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TeamStatus::Pending),
            "approved" => Ok(TeamStatus::Approved),
            "rejected" => Ok(TeamStatus::Rejected),
            other => Err(LeagueError::InvalidInput(format!("invalid team status '{}'", other))),
        }
    }
}

/// A college's entry in one sport
///
/// At most one team exists per (sport_id, college_id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub team_id: Id,
    pub team_name: String,
    pub sport_id: Id,
    pub college_id: Id,
    pub captain_name: String,
    pub captain_email: String,
    pub captain_phone: String,
    pub status: TeamStatus,
    pub registration_fee_paid: bool,
    pub created_at: DateTime<Utc>,
}

impl Record for Team {
    const COLLECTION: &'static str = "teams";
    const ENTITY: &'static str = "Team";

    fn id(&self) -> Id {
        self.team_id
    }
}

/// A member of a team's roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: Id,
    pub team_id: Id,
    pub player_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub jersey_number: Option<u32>,
    pub position: Option<String>,
    pub is_captain: bool,
    pub created_at: DateTime<Utc>,
}

impl Record for Player {
    const COLLECTION: &'static str = "players";
    const ENTITY: &'static str = "Player";

    fn id(&self) -> Id {
        self.player_id
    }
}

/// Registration data for a new team and its roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTeam {
    pub team_name: String,
    pub sport_id: Id,
    pub college_id: Id,
    pub captain_name: String,
    pub captain_email: String,
    pub captain_phone: String,
    pub players: Vec<NewPlayer>,
}

/// Roster entry submitted with a team registration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPlayer {
    pub player_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub jersey_number: Option<u32>,
    #[serde(default)]
    pub position: Option<String>,
}

impl NewPlayer {
    /// Player with only a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            player_name: name.into(),
            ..Self::default()
        }
    }

    /// The captain flag is fixed at registration: name equals the captain's.
    pub(crate) fn into_record(
        self,
        player_id: Id,
        team_id: Id,
        captain_name: &str,
        created_at: DateTime<Utc>,
    ) -> Player {
        let is_captain = self.player_name == captain_name;
        Player {
            player_id,
            team_id,
            player_name: self.player_name,
            email: self.email,
            phone: self.phone,
            jersey_number: self.jersey_number,
            position: self.position,
            is_captain,
            created_at,
        }
    }
}
