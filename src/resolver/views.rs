//! Enriched views

use serde::Serialize;

use crate::model::{College, Match, Sport, Standing, Team, Venue};

use super::Lookup;

/// A team with its college and sport spelled out
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamView {
    #[serde(flatten)]
    pub team: Team,
    pub college_name: String,
    pub city: String,
    pub state: String,
    pub sport_name: String,
}

/// A match with sport, teams, colleges and venue spelled out
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchView {
    #[serde(flatten)]
    pub fixture: Match,
    pub sport_name: String,
    pub team1_name: String,
    pub team2_name: String,
    pub team1_college: String,
    pub team2_college: String,
    pub venue_name: String,
    pub venue_location: String,
}

/// A standings row with team and college names
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingView {
    #[serde(flatten)]
    pub standing: Standing,
    pub team_name: String,
    pub college_name: String,
}

/// Enrich a team from its college and sport
pub fn team_view(team: &Team, colleges: &Lookup<'_, College>, sports: &Lookup<'_, Sport>) -> TeamView {
    let college = Some(team.college_id);
    TeamView {
        college_name: colleges.field(college, |c| c.college_name.as_str()),
        city: colleges.field(college, |c| c.city.as_str()),
        state: colleges.field(college, |c| c.state.as_str()),
        sport_name: sports.field(Some(team.sport_id), |s| s.sport_name.as_str()),
        team: team.clone(),
    }
}

/// Enrich a match from its sport, both teams (and their colleges) and venue
pub fn match_view(
    fixture: &Match,
    sports: &Lookup<'_, Sport>,
    teams: &Lookup<'_, Team>,
    colleges: &Lookup<'_, College>,
    venues: &Lookup<'_, Venue>,
) -> MatchView {
    let team1 = teams.get(fixture.team1_id);
    let team2 = teams.get(fixture.team2_id);
    let venue = Some(fixture.venue_id);

    MatchView {
        sport_name: sports.field(Some(fixture.sport_id), |s| s.sport_name.as_str()),
        team1_name: teams.field(team1.map(|t| t.team_id), |t| t.team_name.as_str()),
        team2_name: teams.field(team2.map(|t| t.team_id), |t| t.team_name.as_str()),
        team1_college: colleges.field(team1.map(|t| t.college_id), |c| c.college_name.as_str()),
        team2_college: colleges.field(team2.map(|t| t.college_id), |c| c.college_name.as_str()),
        venue_name: venues.field(venue, |v| v.venue_name.as_str()),
        venue_location: venues.field(venue, |v| v.location.as_str()),
        fixture: fixture.clone(),
    }
}

/// Enrich a standings row from its team, then the team's college
pub fn standing_view(
    standing: &Standing,
    teams: &Lookup<'_, Team>,
    colleges: &Lookup<'_, College>,
) -> StandingView {
    let team = teams.get(standing.team_id);
    StandingView {
        team_name: teams.field(team.map(|t| t.team_id), |t| t.team_name.as_str()),
        college_name: colleges.field(team.map(|t| t.college_id), |c| c.college_name.as_str()),
        standing: standing.clone(),
    }
}
