//! Model Module
//!
//! Records persisted by the store, one collection per entity type.
//!
//! ## Identity
//! Every record carries a numeric ID unique within its collection. IDs are
//! handed out by the allocator (`max + 1`) inside the collection's write
//! section and are never reused.
//!
//! ## References
//! Foreign keys (`sport_id`, `college_id`, `team_id`, `venue_id`) are plain
//! IDs. Nothing enforces them at the storage layer; the resolver tolerates
//! dangling references.

mod college;
mod fixture;
mod sport;
mod standing;
mod team;
mod venue;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub use college::{College, NewCollege};
pub use fixture::{Match, MatchStatus, NewMatch};
pub use sport::Sport;
pub use standing::Standing;
pub use team::{NewPlayer, NewTeam, Player, Team, TeamStatus};
pub use venue::{Venue, VenueType};

/// Record identifier
pub type Id = u64;

/// A record that lives in its own whole-collection snapshot
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection (and snapshot file) name
    const COLLECTION: &'static str;

    /// Human-readable entity name used in errors and logs
    const ENTITY: &'static str;

    /// The record's ID
    fn id(&self) -> Id;
}
