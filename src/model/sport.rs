//! Sport reference data

use serde::{Deserialize, Serialize};

use super::{Id, Record};

/// A sport offered in the tournament
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sport {
    pub sport_id: Id,
    pub sport_name: String,
    pub min_team_size: u32,
    pub max_team_size: u32,
    pub description: String,
}

impl Record for Sport {
    const COLLECTION: &'static str = "sports";
    const ENTITY: &'static str = "Sport";

    fn id(&self) -> Id {
        self.sport_id
    }
}
