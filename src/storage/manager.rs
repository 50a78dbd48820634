//! Store
//!
//! Owns one collection per entity type and prepares the data directory.
//!
//! ## Responsibilities
//! - Create the data directory on startup
//! - Create missing snapshots (seeding sports and venues when enabled)
//! - Hand out the per-collection handles
//!
//! ## Lock Order
//! Operations that write more than one collection acquire writers in this
//! order: colleges → teams → players → matches → standings.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::model::{College, Match, Player, Sport, Standing, Team, Venue};

use super::seed::{reference_sports, reference_venues};
use super::Collection;

/// All collections of one data directory
pub struct Store {
    /// Directory holding every snapshot
    data_dir: PathBuf,

    sports: Collection<Sport>,
    venues: Collection<Venue>,
    colleges: Collection<College>,
    teams: Collection<Team>,
    players: Collection<Player>,
    matches: Collection<Match>,
    standings: Collection<Standing>,
}

impl Store {
    /// Open or create the store described by `config`
    ///
    /// On startup:
    /// 1. Create data directory if it doesn't exist
    /// 2. Write reference sports/venues if their snapshots are missing
    /// 3. Write empty snapshots for every other missing collection
    pub fn open(config: &Config) -> Result<Self> {
        fs::create_dir_all(&config.data_dir)?;

        let dir = config.data_dir.as_path();
        let format = config.snapshot_format;
        let sync = config.sync_writes;

        let store = Self {
            data_dir: dir.to_path_buf(),
            sports: Collection::open(dir, format, sync),
            venues: Collection::open(dir, format, sync),
            colleges: Collection::open(dir, format, sync),
            teams: Collection::open(dir, format, sync),
            players: Collection::open(dir, format, sync),
            matches: Collection::open(dir, format, sync),
            standings: Collection::open(dir, format, sync),
        };

        let seed = config.seed_reference_data;
        let sports_created = store
            .sports
            .ensure_exists(|| if seed { reference_sports() } else { Vec::new() })?;
        let venues_created = store
            .venues
            .ensure_exists(|| if seed { reference_venues() } else { Vec::new() })?;
        if seed && (sports_created || venues_created) {
            tracing::info!(sports_created, venues_created, "reference data seeded");
        }
        store.colleges.ensure_exists(Vec::new)?;
        store.teams.ensure_exists(Vec::new)?;
        store.players.ensure_exists(Vec::new)?;
        store.matches.ensure_exists(Vec::new)?;
        store.standings.ensure_exists(Vec::new)?;

        tracing::info!(data_dir = %dir.display(), ?format, "store opened");

        Ok(store)
    }

    pub fn sports(&self) -> &Collection<Sport> {
        &self.sports
    }

    pub fn venues(&self) -> &Collection<Venue> {
        &self.venues
    }

    pub fn colleges(&self) -> &Collection<College> {
        &self.colleges
    }

    pub fn teams(&self) -> &Collection<Team> {
        &self.teams
    }

    pub fn players(&self) -> &Collection<Player> {
        &self.players
    }

    pub fn matches(&self) -> &Collection<Match> {
        &self.matches
    }

    pub fn standings(&self) -> &Collection<Standing> {
        &self.standings
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
