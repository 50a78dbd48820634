//! Record builders shared by the test crates

#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use tempfile::TempDir;

use leaguestore::config::{Config, SnapshotFormat};
use leaguestore::engine::Engine;
use leaguestore::model::{
    College, Id, Match, MatchStatus, NewCollege, NewMatch, NewPlayer, NewTeam, Sport, Standing,
    Team, TeamStatus, Venue, VenueType,
};

// =============================================================================
// Engines
// =============================================================================

pub fn setup_temp_engine() -> (TempDir, Engine) {
    setup_temp_engine_with_format(SnapshotFormat::Json)
}

pub fn setup_temp_engine_with_format(format: SnapshotFormat) -> (TempDir, Engine) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .data_dir(temp_dir.path())
        .snapshot_format(format)
        .sync_writes(false) // Tests don't need durability across power loss
        .build();
    let engine = Engine::open(config).unwrap();
    (temp_dir, engine)
}

// =============================================================================
// Fixed Clock
// =============================================================================

pub fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 2, 1, hour, 0, 0).unwrap()
}

pub fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
}

pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

// =============================================================================
// Input Builders
// =============================================================================

pub fn new_college(code: &str) -> NewCollege {
    NewCollege {
        college_name: format!("{} Institute of Technology", code),
        college_code: code.to_string(),
        city: "Pune".to_string(),
        state: "Maharashtra".to_string(),
        contact_person: "Asha Rao".to_string(),
        email: format!("sports@{}.edu", code.to_lowercase()),
        phone: "9876543210".to_string(),
    }
}

pub fn new_team(name: &str, sport_id: Id, college_id: Id) -> NewTeam {
    NewTeam {
        team_name: name.to_string(),
        sport_id,
        college_id,
        captain_name: "Ravi Kumar".to_string(),
        captain_email: "ravi@example.edu".to_string(),
        captain_phone: "9123456780".to_string(),
        players: vec![
            NewPlayer::named("Ravi Kumar"),
            NewPlayer::named("Sanjay Patel"),
            NewPlayer {
                player_name: "Imran Shaikh".to_string(),
                jersey_number: Some(9),
                position: Some("Forward".to_string()),
                ..NewPlayer::default()
            },
        ],
    }
}

pub fn new_match(sport_id: Id, team1_id: Id, team2_id: Id, day: u32, hour: u32) -> NewMatch {
    NewMatch {
        sport_id,
        team1_id,
        team2_id,
        venue_id: 1,
        match_date: date(day),
        start_time: time(hour, 0),
    }
}

// =============================================================================
// Record Builders
// =============================================================================

pub fn sport(sport_id: Id, name: &str) -> Sport {
    Sport {
        sport_id,
        sport_name: name.to_string(),
        min_team_size: 11,
        max_team_size: 11,
        description: format!("{} tournament", name),
    }
}

pub fn venue(venue_id: Id, name: &str, location: &str) -> Venue {
    Venue {
        venue_id,
        venue_name: name.to_string(),
        venue_type: VenueType::Outdoor,
        capacity: 1000,
        location: location.to_string(),
        facilities: None,
    }
}

pub fn college(college_id: Id, name: &str, city: &str, state: &str) -> College {
    College {
        college_id,
        college_name: name.to_string(),
        college_code: format!("C{}", college_id),
        city: city.to_string(),
        state: state.to_string(),
        contact_person: "Coordinator".to_string(),
        email: format!("c{}@example.edu", college_id),
        phone: "9000000000".to_string(),
        created_at: at(8),
    }
}

pub fn team(team_id: Id, name: &str, sport_id: Id, college_id: Id, status: TeamStatus) -> Team {
    Team {
        team_id,
        team_name: name.to_string(),
        sport_id,
        college_id,
        captain_name: "Captain".to_string(),
        captain_email: "captain@example.edu".to_string(),
        captain_phone: "9000000001".to_string(),
        status,
        registration_fee_paid: false,
        created_at: at(9),
    }
}

pub fn fixture(match_id: Id, team1_id: Id, team2_id: Id, day: u32, hour: u32, minute: u32) -> Match {
    Match {
        match_id,
        sport_id: 1,
        team1_id,
        team2_id,
        venue_id: 1,
        match_date: date(day),
        start_time: time(hour, minute),
        status: MatchStatus::Scheduled,
        team1_score: 0,
        team2_score: 0,
        winner_team_id: None,
        created_at: at(10),
    }
}

/// A standings row with the given points, goals for and goals against
pub fn standing(standing_id: Id, team_id: Id, points: u32, goals_for: u32, goals_against: u32) -> Standing {
    let mut row = Standing::new(standing_id, 1, team_id, at(12));
    row.points = points;
    row.goals_for = goals_for;
    row.goals_against = goals_against;
    row.goal_difference = i64::from(goals_for) - i64::from(goals_against);
    row
}
