//! Reference data
//!
//! Sports and venues written the first time a data directory is opened.

use crate::model::{Sport, Venue, VenueType};

/// The ten sports offered by the tournament
pub fn reference_sports() -> Vec<Sport> {
    let sports: [(&str, u32, &str); 10] = [
        ("Football", 11, "Association football with 11 players per team"),
        ("Cricket", 11, "Cricket match with 11 players per team"),
        ("Basketball", 5, "Basketball with 5 players per team"),
        ("Volleyball", 6, "Volleyball with 6 players per team"),
        ("Badminton Singles", 1, "Individual badminton competition"),
        ("Badminton Doubles", 2, "Badminton doubles competition"),
        ("Table Tennis Singles", 1, "Individual table tennis competition"),
        ("Table Tennis Doubles", 2, "Table tennis doubles competition"),
        ("Hockey", 11, "Field hockey with 11 players per team"),
        ("Kabaddi", 7, "Kabaddi with 7 players per team"),
    ];

    sports
        .iter()
        .zip(1..)
        .map(|(&(name, size, description), sport_id)| Sport {
            sport_id,
            sport_name: name.to_string(),
            min_team_size: size,
            max_team_size: size,
            description: description.to_string(),
        })
        .collect()
}

/// The ten grounds, courts and halls of the sports complex
pub fn reference_venues() -> Vec<Venue> {
    use VenueType::{Indoor, Outdoor};

    const INDOOR_HALL: &str = "Sports Complex Indoor Hall";

    let venues: [(&str, VenueType, u32, &str, &str); 10] = [
        ("Main Football Ground", Outdoor, 5000, "Sports Complex North", "Floodlights, Changing rooms, Medical room"),
        ("Basketball Court 1", Indoor, 500, INDOOR_HALL, "Air conditioning, Scoreboard, Sound system"),
        ("Basketball Court 2", Indoor, 500, INDOOR_HALL, "Air conditioning, Scoreboard, Sound system"),
        ("Volleyball Court 1", Indoor, 300, INDOOR_HALL, "Air conditioning, Net system, Seating"),
        ("Volleyball Court 2", Indoor, 300, INDOOR_HALL, "Air conditioning, Net system, Seating"),
        ("Badminton Hall", Indoor, 200, INDOOR_HALL, "Air conditioning, 8 courts, Professional lighting"),
        ("Table Tennis Hall", Indoor, 100, INDOOR_HALL, "Air conditioning, 10 tables, Professional lighting"),
        ("Hockey Ground", Outdoor, 3000, "Sports Complex South", "Artificial turf, Floodlights, Dugouts"),
        ("Cricket Ground", Outdoor, 8000, "Sports Complex East", "Turf pitch, Pavilion, Electronic scoreboard"),
        ("Kabaddi Ground", Outdoor, 2000, "Sports Complex West", "Mat court, Seating, Lighting"),
    ];

    venues
        .iter()
        .zip(1..)
        .map(|(&(name, venue_type, capacity, location, facilities), venue_id)| Venue {
            venue_id,
            venue_name: name.to_string(),
            venue_type,
            capacity,
            location: location.to_string(),
            facilities: Some(facilities.to_string()),
        })
        .collect()
}
