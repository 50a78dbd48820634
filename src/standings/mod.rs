//! Standings Module
//!
//! One aggregate row per (sport, team) and the order they rank in.
//!
//! ## Responsibilities
//! - Register a row when a team is approved (idempotent)
//! - Fold completed match results into both teams' rows
//! - Rank rows of one sport at read time
//!
//! ## Ranking
//! Points, then goal difference, then goals scored, all descending. Rows
//! tied on all three keep their stored order.

mod ledger;
mod ranking;

pub use ledger::{record_result, register, ResultEntry};
pub use ranking::{compare, rank};

/// Result of a match from one team's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    /// Outcome for the side that scored `own` against `opponent`
    pub fn from_scores(own: u32, opponent: u32) -> Self {
        match own.cmp(&opponent) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Equal => Outcome::Draw,
            std::cmp::Ordering::Less => Outcome::Loss,
        }
    }
}

/// Points awarded per outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsRule {
    pub win: u32,
    pub draw: u32,
    pub loss: u32,
}

impl PointsRule {
    pub fn points_for(&self, outcome: Outcome) -> u32 {
        match outcome {
            Outcome::Win => self.win,
            Outcome::Draw => self.draw,
            Outcome::Loss => self.loss,
        }
    }
}

impl Default for PointsRule {
    /// Three for a win, one for a draw
    fn default() -> Self {
        Self {
            win: 3,
            draw: 1,
            loss: 0,
        }
    }
}
