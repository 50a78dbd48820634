//! Match records

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Id, Record};
use crate::error::LeagueError;

/// Progress of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Scheduled,
    Ongoing,
    Completed,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "scheduled",
            MatchStatus::Ongoing => "ongoing",
            MatchStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchStatus {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(MatchStatus::Scheduled),
            "ongoing" => Ok(MatchStatus::Ongoing),
            "completed" => Ok(MatchStatus::Completed),
            other => Err(LeagueError::InvalidInput(format!("invalid match status '{}'", other))),
        }
    }
}

/// A scheduled fixture between two teams of one sport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub match_id: Id,
    pub sport_id: Id,
    pub team1_id: Id,
    pub team2_id: Id,
    pub venue_id: Id,
    pub match_date: NaiveDate,
    pub start_time: NaiveTime,
    pub status: MatchStatus,
    pub team1_score: u32,
    pub team2_score: u32,
    pub winner_team_id: Option<Id>,
    pub created_at: DateTime<Utc>,
}

impl Match {
    /// Sort key used for listings: kick-off date, then time
    pub fn kickoff(&self) -> (NaiveDate, NaiveTime) {
        (self.match_date, self.start_time)
    }
}

impl Record for Match {
    const COLLECTION: &'static str = "matches";
    const ENTITY: &'static str = "Match";

    fn id(&self) -> Id {
        self.match_id
    }
}

/// Scheduling data for a new match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMatch {
    pub sport_id: Id,
    pub team1_id: Id,
    pub team2_id: Id,
    pub venue_id: Id,
    pub match_date: NaiveDate,
    pub start_time: NaiveTime,
}

impl NewMatch {
    /// New matches start scheduled, nil-nil, with no winner.
    pub(crate) fn into_record(self, match_id: Id, created_at: DateTime<Utc>) -> Match {
        Match {
            match_id,
            sport_id: self.sport_id,
            team1_id: self.team1_id,
            team2_id: self.team2_id,
            venue_id: self.venue_id,
            match_date: self.match_date,
            start_time: self.start_time,
            status: MatchStatus::Scheduled,
            team1_score: 0,
            team2_score: 0,
            winner_team_id: None,
            created_at,
        }
    }
}
