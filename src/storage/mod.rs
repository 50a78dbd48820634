//! Storage Module
//!
//! Flat-file record store: one snapshot file per entity type.
//!
//! ## Responsibilities
//! - Load a whole collection for reads
//! - Replace a whole collection on writes (temp file + rename)
//! - Serialize writers per collection and allocate IDs inside that section
//! - Create missing collections on startup, seeding reference data
//!
//! ## Binary Snapshot Format
//! ```text
//! ┌────────────────────────────────────────┐
//! │ Header (14 bytes)                      │
//! │ ┌──────────┬──────────┬──────────────┐ │
//! │ │Magic (4) │Version(2)│ Record Count │ │
//! │ └──────────┴──────────┴──────────────┘ │
//! ├────────────────────────────────────────┤
//! │ Payload                                │
//! │   bincode-encoded sequence of records  │
//! ├────────────────────────────────────────┤
//! │ Footer (4 bytes)                       │
//! │ ┌────────────────────────────────────┐ │
//! │ │          Payload CRC32             │ │
//! │ └────────────────────────────────────┘ │
//! └────────────────────────────────────────┘
//! ```
//!
//! JSON snapshots are a plain pretty-printed array of records.

mod allocator;
mod collection;
mod manager;
mod seed;
mod snapshot;

pub use allocator::{next_id, IdAllocator};
pub use collection::{Collection, CollectionWriter};
pub use manager::Store;
pub use seed::{reference_sports, reference_venues};
pub use snapshot::{decode, encode, FOOTER_SIZE, HEADER_SIZE};
