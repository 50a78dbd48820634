//! Standing records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Id, Record};

/// Aggregate results of one team within one sport
///
/// Exactly one row exists per (sport_id, team_id). `position` is only
/// meaningful on ranked output; the stored value is not authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub standing_id: Id,
    pub sport_id: Id,
    pub team_id: Id,
    pub matches_played: u32,
    pub matches_won: u32,
    pub matches_drawn: u32,
    pub matches_lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
    pub position: u32,
    pub updated_at: DateTime<Utc>,
}

impl Standing {
    /// A fresh row with every counter at zero
    pub fn new(standing_id: Id, sport_id: Id, team_id: Id, now: DateTime<Utc>) -> Self {
        Self {
            standing_id,
            sport_id,
            team_id,
            matches_played: 0,
            matches_won: 0,
            matches_drawn: 0,
            matches_lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
            position: 0,
            updated_at: now,
        }
    }

    /// Whether this row belongs to the given (sport, team) pair
    pub fn is_for(&self, sport_id: Id, team_id: Id) -> bool {
        self.sport_id == sport_id && self.team_id == team_id
    }
}

impl Record for Standing {
    const COLLECTION: &'static str = "standings";
    const ENTITY: &'static str = "Standing";

    fn id(&self) -> Id {
        self.standing_id
    }
}
