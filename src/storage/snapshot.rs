//! Snapshot codec
//!
//! Encodes a whole collection to bytes and back, in either format.

use crate::config::SnapshotFormat;
use crate::error::{LeagueError, Result};
use crate::model::Record;

/// Magic bytes identifying a binary league snapshot
pub(crate) const MAGIC: &[u8; 4] = b"LGSN";

/// Binary snapshot format version
pub(crate) const VERSION: u16 = 1;

/// Header size: magic (4) + version (2) + record count (8)
pub const HEADER_SIZE: usize = 14;

/// Footer size: payload CRC32 (4)
pub const FOOTER_SIZE: usize = 4;

/// Encode a whole collection
pub fn encode<T: Record>(records: &[T], format: SnapshotFormat) -> Result<Vec<u8>> {
    match format {
        SnapshotFormat::Json => Ok(serde_json::to_vec_pretty(records)?),
        SnapshotFormat::Binary => encode_binary(records),
    }
}

/// Decode a whole collection
pub fn decode<T: Record>(bytes: &[u8], format: SnapshotFormat) -> Result<Vec<T>> {
    match format {
        SnapshotFormat::Json => Ok(serde_json::from_slice(bytes)?),
        SnapshotFormat::Binary => decode_binary(bytes),
    }
}

// =============================================================================
// Binary Format
// =============================================================================

fn encode_binary<T: Record>(records: &[T]) -> Result<Vec<u8>> {
    let payload = bincode::serialize(records)?;
    let crc = crc32fast::hash(&payload);

    let mut out = Vec::with_capacity(HEADER_SIZE + payload.len() + FOOTER_SIZE);
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&VERSION.to_le_bytes());
    out.extend_from_slice(&(records.len() as u64).to_le_bytes());
    out.extend_from_slice(&payload);
    out.extend_from_slice(&crc.to_le_bytes());

    Ok(out)
}

fn decode_binary<T: Record>(bytes: &[u8]) -> Result<Vec<T>> {
    if bytes.len() < HEADER_SIZE + FOOTER_SIZE {
        return Err(LeagueError::Corruption(format!(
            "{} snapshot too short: {} bytes",
            T::COLLECTION,
            bytes.len()
        )));
    }

    if &bytes[0..4] != MAGIC {
        return Err(LeagueError::Corruption(format!(
            "Invalid snapshot magic: expected LGSN, got {:?}",
            &bytes[0..4]
        )));
    }

    let mut version = [0u8; 2];
    version.copy_from_slice(&bytes[4..6]);
    let version = u16::from_le_bytes(version);
    if version != VERSION {
        return Err(LeagueError::Corruption(format!(
            "Unsupported snapshot version: {}",
            version
        )));
    }

    let mut count = [0u8; 8];
    count.copy_from_slice(&bytes[6..HEADER_SIZE]);
    let count = u64::from_le_bytes(count);

    let footer_start = bytes.len() - FOOTER_SIZE;
    let payload = &bytes[HEADER_SIZE..footer_start];

    let mut stored_crc = [0u8; 4];
    stored_crc.copy_from_slice(&bytes[footer_start..]);
    let stored_crc = u32::from_le_bytes(stored_crc);
    let actual_crc = crc32fast::hash(payload);
    if stored_crc != actual_crc {
        return Err(LeagueError::Corruption(format!(
            "{} snapshot checksum mismatch: stored {:#010x}, computed {:#010x}",
            T::COLLECTION,
            stored_crc,
            actual_crc
        )));
    }

    let records: Vec<T> = bincode::deserialize(payload)?;
    if records.len() as u64 != count {
        return Err(LeagueError::Corruption(format!(
            "{} snapshot header says {} records, payload holds {}",
            T::COLLECTION,
            count,
            records.len()
        )));
    }

    Ok(records)
}
