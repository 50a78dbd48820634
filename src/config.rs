//! Configuration for leaguestore
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::LeagueError;
use crate::standings::PointsRule;

/// Main configuration for a league store instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for all collection snapshots
    /// Internal structure:
    ///   {data_dir}/
    ///     ├── sports.json
    ///     ├── venues.json
    ///     ├── colleges.json
    ///     ├── teams.json
    ///     ├── players.json
    ///     ├── matches.json
    ///     └── standings.json
    pub data_dir: PathBuf,

    /// On-disk encoding used for every collection
    pub snapshot_format: SnapshotFormat,

    /// fsync each snapshot before it replaces the previous one
    pub sync_writes: bool,

    /// Write the reference sports and venues when their files are missing
    pub seed_reference_data: bool,

    // -------------------------------------------------------------------------
    // Reporting Configuration
    // -------------------------------------------------------------------------
    /// Number of recently registered teams shown on the dashboard
    pub recent_teams_limit: usize,

    /// Points awarded per match outcome
    pub points_rule: PointsRule,
}

/// Snapshot encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    /// Pretty-printed JSON array (human readable, default)
    Json,

    /// bincode payload framed with magic, version and CRC32
    Binary,
}

impl SnapshotFormat {
    /// File extension for snapshots in this format
    pub fn extension(&self) -> &'static str {
        match self {
            SnapshotFormat::Json => "json",
            SnapshotFormat::Binary => "bin",
        }
    }
}

impl FromStr for SnapshotFormat {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(SnapshotFormat::Json),
            "binary" | "bin" => Ok(SnapshotFormat::Binary),
            other => Err(LeagueError::Config(format!(
                "unknown snapshot format '{}' (expected json or binary)",
                other
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./league_data"),
            snapshot_format: SnapshotFormat::Json,
            sync_writes: true,
            seed_reference_data: true,
            recent_teams_limit: 10,
            points_rule: PointsRule::default(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for all snapshots)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the snapshot encoding
    pub fn snapshot_format(mut self, format: SnapshotFormat) -> Self {
        self.config.snapshot_format = format;
        self
    }

    /// Enable or disable fsync on every snapshot write
    pub fn sync_writes(mut self, sync: bool) -> Self {
        self.config.sync_writes = sync;
        self
    }

    /// Enable or disable seeding of sports and venues
    pub fn seed_reference_data(mut self, seed: bool) -> Self {
        self.config.seed_reference_data = seed;
        self
    }

    /// Set how many recent teams the dashboard lists
    pub fn recent_teams_limit(mut self, limit: usize) -> Self {
        self.config.recent_teams_limit = limit;
        self
    }

    /// Set the points awarded for a win, draw and loss
    pub fn points_rule(mut self, rule: PointsRule) -> Self {
        self.config.points_rule = rule;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
