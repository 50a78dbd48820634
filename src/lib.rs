//! # leaguestore
//!
//! Storage and standings core for an inter-college tournament:
//! - Flat per-collection snapshots (JSON or checksummed binary)
//! - Single writer per collection, lock-free readers
//! - Registration rules for colleges and teams
//! - Standings registered on approval, updated on match completion,
//!   ranked on read
//! - Enriched listings and a dashboard summary
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Callers (HTTP layer, leaguectl)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Engine                               │
//! │         (registration, approval, match workflows)           │
//! └──────┬──────────────────┬───────────────────┬───────────────┘
//!        │                  │                   │
//!        ▼                  ▼                   ▼
//!  ┌───────────┐     ┌─────────────┐     ┌─────────────┐
//!  │ Resolver  │     │  Standings  │     │  Dashboard  │
//!  │  (joins)  │     │  (ranking)  │     │ (summaries) │
//!  └───────────┘     └─────────────┘     └─────────────┘
//!                           │
//!                           ▼
//!                   ┌───────────────┐
//!                   │    Storage    │
//!                   │ (collections) │
//!                   └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod model;
pub mod storage;
pub mod resolver;
pub mod standings;
pub mod dashboard;
pub mod query;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{LeagueError, Result};
pub use config::Config;
pub use engine::Engine;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of leaguestore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
