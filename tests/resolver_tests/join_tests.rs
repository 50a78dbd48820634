//! Tests for enriched views
//!
//! These tests verify:
//! - Teams, matches and standings pick up related names
//! - Dangling references resolve to "Unknown" without failing
//! - Resolution leaves the source records untouched

use leaguestore::model::{College, Sport, Team, TeamStatus, Venue};
use leaguestore::resolver::{match_view, standing_view, team_view, Lookup, UNKNOWN};

use crate::common::{college, fixture, sport, standing, team, venue};

// =============================================================================
// Helper Functions
// =============================================================================

struct World {
    sports: Vec<Sport>,
    colleges: Vec<College>,
    teams: Vec<Team>,
    venues: Vec<Venue>,
}

fn world() -> World {
    World {
        sports: vec![sport(1, "Football"), sport(3, "Basketball")],
        colleges: vec![
            college(1, "Government Engineering College", "Nagpur", "Maharashtra"),
            college(2, "St. Xavier's College", "Ahmedabad", "Gujarat"),
        ],
        teams: vec![
            team(1, "GEC Falcons", 1, 1, TeamStatus::Approved),
            team(2, "Xavier Eagles", 1, 2, TeamStatus::Approved),
            team(3, "Orphans", 1, 99, TeamStatus::Pending),
        ],
        venues: vec![venue(1, "Main Football Ground", "Sports Complex North")],
    }
}

// =============================================================================
// Lookup Tests
// =============================================================================

#[test]
fn test_lookup_indexes_by_id() {
    let w = world();
    let index = Lookup::new(&w.colleges);

    assert_eq!(index.len(), 2);
    assert_eq!(index.get(2).unwrap().college_name, "St. Xavier's College");
    assert!(index.get(3).is_none());
}

#[test]
fn test_lookup_field_falls_back_to_placeholder() {
    let w = world();
    let index = Lookup::new(&w.sports);

    assert_eq!(index.field(Some(3), |s| s.sport_name.as_str()), "Basketball");
    assert_eq!(index.field(Some(4), |s| s.sport_name.as_str()), UNKNOWN);
    assert_eq!(index.field(None, |s| s.sport_name.as_str()), UNKNOWN);
}

#[test]
fn test_lookup_over_empty_collection() {
    let empty: Vec<Venue> = Vec::new();
    let index = Lookup::new(&empty);

    assert!(index.is_empty());
    assert_eq!(index.field(Some(1), |v| v.location.as_str()), "Unknown");
}

// =============================================================================
// Team Tests
// =============================================================================

#[test]
fn test_team_view_attaches_college_and_sport() {
    let w = world();
    let view = team_view(&w.teams[0], &Lookup::new(&w.colleges), &Lookup::new(&w.sports));

    assert_eq!(view.college_name, "Government Engineering College");
    assert_eq!(view.city, "Nagpur");
    assert_eq!(view.state, "Maharashtra");
    assert_eq!(view.sport_name, "Football");
    assert_eq!(view.team, w.teams[0]);
}

#[test]
fn test_team_view_dangling_college() {
    let w = world();
    let view = team_view(&w.teams[2], &Lookup::new(&w.colleges), &Lookup::new(&w.sports));

    assert_eq!(view.college_name, "Unknown");
    assert_eq!(view.city, "Unknown");
    assert_eq!(view.state, "Unknown");
    assert_eq!(view.sport_name, "Football");
}

#[test]
fn test_team_view_dangling_sport() {
    let w = world();
    let stray = team(4, "Chess Club", 42, 1, TeamStatus::Pending);
    let view = team_view(&stray, &Lookup::new(&w.colleges), &Lookup::new(&w.sports));

    assert_eq!(view.sport_name, "Unknown");
    assert_eq!(view.college_name, "Government Engineering College");
}

#[test]
fn test_team_view_serializes_flat() {
    let w = world();
    let view = team_view(&w.teams[1], &Lookup::new(&w.colleges), &Lookup::new(&w.sports));

    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["team_id"], 2);
    assert_eq!(json["team_name"], "Xavier Eagles");
    assert_eq!(json["college_name"], "St. Xavier's College");
    assert_eq!(json["sport_name"], "Football");
}

// =============================================================================
// Match Tests
// =============================================================================

#[test]
fn test_match_view_attaches_everything() {
    let w = world();
    let m = fixture(1, 1, 2, 5, 10, 0);

    let view = match_view(
        &m,
        &Lookup::new(&w.sports),
        &Lookup::new(&w.teams),
        &Lookup::new(&w.colleges),
        &Lookup::new(&w.venues),
    );

    assert_eq!(view.sport_name, "Football");
    assert_eq!(view.team1_name, "GEC Falcons");
    assert_eq!(view.team2_name, "Xavier Eagles");
    assert_eq!(view.team1_college, "Government Engineering College");
    assert_eq!(view.team2_college, "St. Xavier's College");
    assert_eq!(view.venue_name, "Main Football Ground");
    assert_eq!(view.venue_location, "Sports Complex North");
    assert_eq!(view.fixture, m);
}

#[test]
fn test_match_view_dangling_team_and_venue() {
    let w = world();
    let mut m = fixture(1, 1, 77, 5, 10, 0);
    m.venue_id = 50;

    let view = match_view(
        &m,
        &Lookup::new(&w.sports),
        &Lookup::new(&w.teams),
        &Lookup::new(&w.colleges),
        &Lookup::new(&w.venues),
    );

    assert_eq!(view.team1_name, "GEC Falcons");
    assert_eq!(view.team2_name, "Unknown");
    assert_eq!(view.team2_college, "Unknown");
    assert_eq!(view.venue_name, "Unknown");
    assert_eq!(view.venue_location, "Unknown");
}

#[test]
fn test_match_view_team_with_dangling_college() {
    let w = world();
    let m = fixture(1, 3, 1, 5, 10, 0);

    let view = match_view(
        &m,
        &Lookup::new(&w.sports),
        &Lookup::new(&w.teams),
        &Lookup::new(&w.colleges),
        &Lookup::new(&w.venues),
    );

    assert_eq!(view.team1_name, "Orphans");
    assert_eq!(view.team1_college, "Unknown");
    assert_eq!(view.team2_college, "Government Engineering College");
}

// =============================================================================
// Standing Tests
// =============================================================================

#[test]
fn test_standing_view_via_team_then_college() {
    let w = world();
    let row = standing(1, 2, 3, 2, 1);

    let view = standing_view(&row, &Lookup::new(&w.teams), &Lookup::new(&w.colleges));

    assert_eq!(view.team_name, "Xavier Eagles");
    assert_eq!(view.college_name, "St. Xavier's College");
    assert_eq!(view.standing, row);
}

#[test]
fn test_standing_view_missing_team() {
    let w = world();
    let row = standing(1, 500, 0, 0, 0);

    let view = standing_view(&row, &Lookup::new(&w.teams), &Lookup::new(&w.colleges));

    assert_eq!(view.team_name, "Unknown");
    assert_eq!(view.college_name, "Unknown");
}

#[test]
fn test_resolution_does_not_mutate_sources() {
    let w = world();
    let before = w.teams.clone();

    let _ = team_view(&w.teams[0], &Lookup::new(&w.colleges), &Lookup::new(&w.sports));
    let _ = standing_view(&standing(1, 1, 0, 0, 0), &Lookup::new(&w.teams), &Lookup::new(&w.colleges));

    assert_eq!(w.teams, before);
}
