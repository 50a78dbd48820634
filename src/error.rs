//! Error types for leaguestore
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

use crate::model::Id;

/// Result type alias using LeagueError
pub type Result<T> = std::result::Result<T, LeagueError>;

/// Unified error type for leaguestore operations
#[derive(Debug, Error)]
pub enum LeagueError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Snapshot Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Snapshot corruption detected: {0}")]
    Corruption(String),

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: Id },

    // -------------------------------------------------------------------------
    // Uniqueness Errors
    // -------------------------------------------------------------------------
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("College {college_id} already has a team registered for sport {sport_id}")]
    DuplicateRegistration { sport_id: Id, college_id: Id },

    // -------------------------------------------------------------------------
    // Workflow Errors
    // -------------------------------------------------------------------------
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LeagueError {
    /// Shorthand for a missing record of the given entity type
    pub fn not_found(entity: &'static str, id: Id) -> Self {
        LeagueError::NotFound { entity, id }
    }

    /// True when persistence itself failed (as opposed to a rejected request)
    pub fn is_storage_failure(&self) -> bool {
        matches!(
            self,
            LeagueError::Io(_) | LeagueError::Serialization(_) | LeagueError::Corruption(_)
        )
    }
}

impl From<serde_json::Error> for LeagueError {
    fn from(e: serde_json::Error) -> Self {
        LeagueError::Serialization(e.to_string())
    }
}

impl From<bincode::Error> for LeagueError {
    fn from(e: bincode::Error) -> Self {
        LeagueError::Serialization(e.to_string())
    }
}
