//! Listing filters
//!
//! Every field is optional; unset fields match everything.

use chrono::NaiveDate;

use crate::model::{College, Id, Match, MatchStatus, Team, TeamStatus};

/// Filter for college listings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollegeFilter {
    pub state: Option<String>,
    pub city: Option<String>,
}

impl CollegeFilter {
    pub fn matches(&self, college: &College) -> bool {
        self.state.as_ref().map_or(true, |state| &college.state == state)
            && self.city.as_ref().map_or(true, |city| &college.city == city)
    }
}

/// Filter for team listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamFilter {
    pub sport_id: Option<Id>,
    pub college_id: Option<Id>,
    pub status: Option<TeamStatus>,
}

impl TeamFilter {
    /// Teams of one sport
    pub fn sport(sport_id: Id) -> Self {
        Self {
            sport_id: Some(sport_id),
            ..Self::default()
        }
    }

    /// Teams in one status
    pub fn status(status: TeamStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Narrow to one status
    pub fn with_status(mut self, status: TeamStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn matches(&self, team: &Team) -> bool {
        self.sport_id.map_or(true, |id| team.sport_id == id)
            && self.college_id.map_or(true, |id| team.college_id == id)
            && self.status.map_or(true, |status| team.status == status)
    }
}

/// Filter for match listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchFilter {
    pub sport_id: Option<Id>,
    pub date: Option<NaiveDate>,
    pub status: Option<MatchStatus>,
}

impl MatchFilter {
    pub fn matches(&self, fixture: &Match) -> bool {
        self.sport_id.map_or(true, |id| fixture.sport_id == id)
            && self.date.map_or(true, |date| fixture.match_date == date)
            && self.status.map_or(true, |status| fixture.status == status)
    }
}
