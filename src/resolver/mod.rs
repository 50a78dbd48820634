//! Resolver Module
//!
//! Attaches human-readable fields from related records for display.
//!
//! ## Responsibilities
//! - Team → college name, city, state and sport name
//! - Match → sport, both teams and their colleges, venue
//! - Standing → team and college names
//!
//! ## Missing References
//! A foreign key that points nowhere resolves to [`UNKNOWN`] for every field
//! it would have supplied. Resolution never fails and never mutates the
//! underlying records; views own a copy of the record they enrich.

mod index;
mod views;

pub use index::Lookup;
pub use views::{
    match_view, standing_view, team_view, MatchView, StandingView, TeamView,
};

/// Placeholder for any field whose related record is missing
pub const UNKNOWN: &str = "Unknown";
