//! Venue reference data

use serde::{Deserialize, Serialize};

use super::{Id, Record};

/// Whether a venue is covered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VenueType {
    Indoor,
    Outdoor,
}

/// A ground, court or hall where matches are played
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub venue_id: Id,
    pub venue_name: String,
    pub venue_type: VenueType,
    pub capacity: u32,
    pub location: String,
    #[serde(default)]
    pub facilities: Option<String>,
}

impl Record for Venue {
    const COLLECTION: &'static str = "venues";
    const ENTITY: &'static str = "Venue";

    fn id(&self) -> Id {
        self.venue_id
    }
}
