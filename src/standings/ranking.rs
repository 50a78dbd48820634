//! Read-time ranking

use std::cmp::Ordering;

use crate::model::Standing;

/// Table order: higher points first, then goal difference, then goals for
pub fn compare(a: &Standing, b: &Standing) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
}

/// Sort rows into table order and number them from 1
///
/// The sort is stable, so rows equal on every key keep their input order.
pub fn rank(mut standings: Vec<Standing>) -> Vec<Standing> {
    standings.sort_by(compare);
    for (standing, position) in standings.iter_mut().zip(1..) {
        standing.position = position;
    }
    standings
}
