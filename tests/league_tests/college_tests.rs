//! Tests for reference data and college registration
//!
//! These tests verify:
//! - Sports and venues are seeded on first open
//! - College registration, lookup and filtering
//! - Code and email uniqueness

use leaguestore::config::Config;
use leaguestore::engine::Engine;
use leaguestore::model::VenueType;
use leaguestore::query::CollegeFilter;
use leaguestore::LeagueError;
use tempfile::TempDir;

use crate::common::{new_college, setup_temp_engine};

// =============================================================================
// Reference Data Tests
// =============================================================================

#[test]
fn test_open_creates_all_collections() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("league");

    let _engine = Engine::open_path(&data_dir).unwrap();

    for name in ["sports", "venues", "colleges", "teams", "players", "matches", "standings"] {
        assert!(data_dir.join(format!("{}.json", name)).exists(), "{} missing", name);
    }
}

#[test]
fn test_sports_are_seeded() {
    let (_temp, engine) = setup_temp_engine();

    let sports = engine.list_sports();

    assert_eq!(sports.len(), 10);
    assert_eq!(sports[0].sport_name, "Football");
    assert_eq!(sports[0].max_team_size, 11);
    assert_eq!(sports[9].sport_name, "Kabaddi");
    assert_eq!(sports[9].min_team_size, 7);
}

#[test]
fn test_venues_are_seeded() {
    let (_temp, engine) = setup_temp_engine();

    let venues = engine.list_venues();

    assert_eq!(venues.len(), 10);
    assert_eq!(venues[1].venue_name, "Basketball Court 1");
    assert_eq!(venues[1].venue_type, VenueType::Indoor);
    assert_eq!(venues[8].capacity, 8000);
}

#[test]
fn test_seeding_can_be_disabled() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .data_dir(temp_dir.path())
        .seed_reference_data(false)
        .sync_writes(false)
        .build();

    let engine = Engine::open(config).unwrap();

    assert!(engine.list_sports().is_empty());
    assert!(engine.list_venues().is_empty());
}

#[test]
fn test_get_sport() {
    let (_temp, engine) = setup_temp_engine();

    assert_eq!(engine.get_sport(3).unwrap().sport_name, "Basketball");
    assert!(matches!(
        engine.get_sport(11),
        Err(LeagueError::NotFound { entity: "Sport", id: 11 })
    ));
}

// =============================================================================
// College Tests
// =============================================================================

#[test]
fn test_create_and_get_college() {
    let (_temp, engine) = setup_temp_engine();

    let college = engine.create_college(new_college("COEP")).unwrap();

    assert_eq!(college.college_id, 1);
    assert_eq!(engine.get_college(1).unwrap(), college);
}

#[test]
fn test_college_ids_increase() {
    let (_temp, engine) = setup_temp_engine();

    let a = engine.create_college(new_college("AAA")).unwrap();
    let b = engine.create_college(new_college("BBB")).unwrap();

    assert_eq!((a.college_id, b.college_id), (1, 2));
}

#[test]
fn test_get_missing_college() {
    let (_temp, engine) = setup_temp_engine();

    assert!(matches!(
        engine.get_college(5),
        Err(LeagueError::NotFound { entity: "College", id: 5 })
    ));
}

#[test]
fn test_duplicate_college_code_rejected() {
    let (_temp, engine) = setup_temp_engine();
    engine.create_college(new_college("VJTI")).unwrap();

    let mut again = new_college("VJTI");
    again.email = "other@vjti.edu".to_string();
    let result = engine.create_college(again);

    assert!(matches!(result, Err(LeagueError::DuplicateKey(_))));
    assert_eq!(engine.list_colleges(&CollegeFilter::default()).len(), 1);
}

#[test]
fn test_duplicate_college_email_rejected() {
    let (_temp, engine) = setup_temp_engine();
    engine.create_college(new_college("VJTI")).unwrap();

    let mut again = new_college("SPIT");
    again.email = "sports@vjti.edu".to_string();
    let err = engine.create_college(again).unwrap_err();

    assert!(matches!(err, LeagueError::DuplicateKey(_)));
    assert!(!err.is_storage_failure());
}

#[test]
fn test_filter_colleges_by_state_and_city() {
    let (_temp, engine) = setup_temp_engine();
    engine.create_college(new_college("PUNE1")).unwrap();
    let mut mumbai = new_college("MUM1");
    mumbai.city = "Mumbai".to_string();
    engine.create_college(mumbai).unwrap();
    let mut surat = new_college("SUR1");
    surat.city = "Surat".to_string();
    surat.state = "Gujarat".to_string();
    engine.create_college(surat).unwrap();

    let maharashtra = engine.list_colleges(&CollegeFilter {
        state: Some("Maharashtra".to_string()),
        city: None,
    });
    assert_eq!(maharashtra.len(), 2);

    let mumbai_only = engine.list_colleges(&CollegeFilter {
        state: Some("Maharashtra".to_string()),
        city: Some("Mumbai".to_string()),
    });
    assert_eq!(mumbai_only.len(), 1);
    assert_eq!(mumbai_only[0].college_code, "MUM1");

    assert_eq!(engine.list_colleges(&CollegeFilter::default()).len(), 3);
}
