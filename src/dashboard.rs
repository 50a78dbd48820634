//! Dashboard Module
//!
//! Cross-collection counts and groupings for the overview page. Everything
//! is recomputed from the records passed in; nothing is cached.

use std::hash::Hash;

use indexmap::IndexMap;
use serde::Serialize;

use crate::model::{College, Match, MatchStatus, Sport, Team, TeamStatus};
use crate::resolver::{team_view, Lookup, TeamView};

/// Overview report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub totals: Totals,
    pub team_status: Vec<StatusCount<TeamStatus>>,
    pub match_status: Vec<StatusCount<MatchStatus>>,
    pub sports: Vec<SportSummary>,
    pub recent_teams: Vec<TeamView>,
}

/// Size of each collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub colleges: usize,
    pub teams: usize,
    pub matches: usize,
    pub sports: usize,
}

/// Number of records in one status (never zero)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCount<S> {
    pub status: S,
    pub count: usize,
}

/// Registrations for one sport
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SportSummary {
    pub sport_name: String,
    pub team_count: usize,
    pub approved_team_count: usize,
}

/// Build the overview from full collections
///
/// `recent_limit` teams are taken from the end of `teams` (insertion order)
/// and listed newest first.
pub fn summarize(
    sports: &[Sport],
    colleges: &[College],
    teams: &[Team],
    matches: &[Match],
    recent_limit: usize,
) -> DashboardSnapshot {
    let college_index = Lookup::new(colleges);
    let sport_index = Lookup::new(sports);

    let sport_summaries = sports
        .iter()
        .map(|sport| {
            let entered = teams.iter().filter(|t| t.sport_id == sport.sport_id);
            SportSummary {
                sport_name: sport.sport_name.clone(),
                team_count: entered.clone().count(),
                approved_team_count: entered.filter(|t| t.status == TeamStatus::Approved).count(),
            }
        })
        .collect();

    let recent_teams = teams
        .iter()
        .rev()
        .take(recent_limit)
        .map(|team| team_view(team, &college_index, &sport_index))
        .collect();

    DashboardSnapshot {
        totals: Totals {
            colleges: colleges.len(),
            teams: teams.len(),
            matches: matches.len(),
            sports: sports.len(),
        },
        team_status: count_by_status(teams, |t| t.status),
        match_status: count_by_status(matches, |m| m.status),
        sports: sport_summaries,
        recent_teams,
    }
}

/// Group by status, in order of first appearance
fn count_by_status<T, S>(records: &[T], status_of: impl Fn(&T) -> S) -> Vec<StatusCount<S>>
where
    S: Copy + Eq + Hash,
{
    let mut counts: IndexMap<S, usize> = IndexMap::new();
    for record in records {
        *counts.entry(status_of(record)).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(status, count)| StatusCount { status, count })
        .collect()
}
