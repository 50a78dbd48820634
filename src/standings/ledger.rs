//! Registration and result folding

use chrono::{DateTime, Utc};

use crate::model::{Id, Standing, Team};
use crate::storage::next_id;

use super::{Outcome, PointsRule};

/// One side of a completed match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultEntry {
    pub team_id: Id,
    pub scored: u32,
    pub conceded: u32,
}

/// Ensure `team` has a row for its sport
///
/// Returns the new row, or `None` when one already existed.
pub fn register(standings: &mut Vec<Standing>, team: &Team, now: DateTime<Utc>) -> Option<Standing> {
    if standings.iter().any(|s| s.is_for(team.sport_id, team.team_id)) {
        return None;
    }

    let standing = Standing::new(next_id(standings), team.sport_id, team.team_id, now);
    standings.push(standing.clone());
    Some(standing)
}

/// Fold one side of a completed match into its row
///
/// Returns false when the team has no row in this sport; nothing changes
/// in that case.
pub fn record_result(
    standings: &mut [Standing],
    sport_id: Id,
    entry: ResultEntry,
    rule: &PointsRule,
    now: DateTime<Utc>,
) -> bool {
    let Some(standing) = standings.iter_mut().find(|s| s.is_for(sport_id, entry.team_id)) else {
        return false;
    };

    let outcome = Outcome::from_scores(entry.scored, entry.conceded);
    standing.matches_played += 1;
    match outcome {
        Outcome::Win => standing.matches_won += 1,
        Outcome::Draw => standing.matches_drawn += 1,
        Outcome::Loss => standing.matches_lost += 1,
    }
    standing.goals_for += entry.scored;
    standing.goals_against += entry.conceded;
    standing.goal_difference = i64::from(standing.goals_for) - i64::from(standing.goals_against);
    standing.points += rule.points_for(outcome);
    standing.updated_at = now;

    true
}
