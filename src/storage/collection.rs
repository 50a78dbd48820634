//! Collection handle
//!
//! One snapshot file holding every record of one entity type.

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use parking_lot::{Mutex, MutexGuard};

use crate::config::SnapshotFormat;
use crate::error::{LeagueError, Result};
use crate::model::{Id, Record};

use super::allocator::next_id;
use super::snapshot::{decode, encode};

/// Handle to a whole-collection snapshot
///
/// ## Concurrency:
/// - Writers: serialized by `write_lock`, one per collection. A writer loads,
///   mutates and replaces the whole collection while holding it.
/// - Readers: lock-free. Snapshots are replaced by rename, so a reader sees
///   either the old or the new collection, never a partial one.
pub struct Collection<T: Record> {
    /// Snapshot file
    path: PathBuf,

    /// On-disk encoding
    format: SnapshotFormat,

    /// fsync before replacing the snapshot
    sync_writes: bool,

    /// Serializes writers (at most one per collection)
    write_lock: Mutex<()>,

    _records: PhantomData<fn() -> T>,
}

impl<T: Record> Collection<T> {
    /// Open the collection stored under `dir`
    ///
    /// Does not touch the disk; see [`Collection::ensure_exists`].
    pub fn open(dir: &Path, format: SnapshotFormat, sync_writes: bool) -> Self {
        let path = dir.join(format!("{}.{}", T::COLLECTION, format.extension()));
        Self {
            path,
            format,
            sync_writes,
            write_lock: Mutex::new(()),
            _records: PhantomData,
        }
    }

    /// Create the snapshot with `initial` records if the file is missing
    ///
    /// Returns true when a new snapshot was written.
    pub fn ensure_exists(&self, initial: impl FnOnce() -> Vec<T>) -> Result<bool> {
        let _guard = self.write_lock.lock();
        if self.path.exists() {
            return Ok(false);
        }
        let records = initial();
        self.write_snapshot(&records)?;
        tracing::info!(
            collection = T::COLLECTION,
            records = records.len(),
            "created collection snapshot"
        );
        Ok(true)
    }

    /// Load every record
    ///
    /// A missing snapshot reads as an empty collection.
    pub fn load(&self) -> Result<Vec<T>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        decode(&bytes, self.format)
    }

    /// Load every record, degrading to an empty collection on failure
    ///
    /// Listing endpoints stay available when a snapshot is unreadable; the
    /// failure is logged.
    pub fn load_or_empty(&self) -> Vec<T> {
        match self.load() {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(
                    collection = T::COLLECTION,
                    path = %self.path.display(),
                    error = %e,
                    "failed to read collection, serving empty result"
                );
                Vec::new()
            }
        }
    }

    /// Find a record by ID
    ///
    /// An unreadable snapshot is an error here, not an empty collection.
    pub fn find(&self, id: Id) -> Result<T> {
        self.load()?
            .into_iter()
            .find(|record| record.id() == id)
            .ok_or_else(|| LeagueError::not_found(T::ENTITY, id))
    }

    /// Acquire the collection's writer and load the current records
    ///
    /// Blocks until any other writer of this collection has finished.
    pub fn lock(&self) -> Result<CollectionWriter<'_, T>> {
        let guard = self.write_lock.lock();
        let records = self.load()?;
        Ok(CollectionWriter {
            collection: self,
            records,
            _guard: guard,
        })
    }

    /// Read-modify-write under the collection's writer
    ///
    /// The snapshot is replaced only if `f` succeeds.
    pub fn update<R>(&self, f: impl FnOnce(&mut Vec<T>) -> Result<R>) -> Result<R> {
        let mut writer = self.lock()?;
        let out = f(writer.records_mut())?;
        writer.save()?;
        Ok(out)
    }

    /// Append one record, allocating its ID inside the write section
    pub fn insert(&self, build: impl FnOnce(Id) -> T) -> Result<T> {
        self.update(|records| {
            let record = build(next_id(records));
            records.push(record.clone());
            Ok(record)
        })
    }

    /// Snapshot file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Replace the snapshot (caller holds `write_lock`)
    fn write_snapshot(&self, records: &[T]) -> Result<()> {
        let bytes = encode(records, self.format)?;
        let tmp_path = self.path.with_extension(format!("{}.tmp", self.format.extension()));

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&tmp_path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(&bytes)?;
        writer.flush()?;

        let file = writer.into_inner().map_err(|e| {
            LeagueError::Io(std::io::Error::new(
                e.error().kind(),
                format!("failed to flush {} snapshot: {}", T::COLLECTION, e.error()),
            ))
        })?;
        if self.sync_writes {
            file.sync_all()?;
        }
        drop(file);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

/// Exclusive writer over one collection
///
/// Holds the collection's write lock until dropped. Changes are persisted
/// only by [`CollectionWriter::save`].
pub struct CollectionWriter<'a, T: Record> {
    collection: &'a Collection<T>,
    records: Vec<T>,
    _guard: MutexGuard<'a, ()>,
}

impl<'a, T: Record> CollectionWriter<'a, T> {
    /// Records as loaded (plus any changes made through this writer)
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Mutable access to the in-memory collection
    pub fn records_mut(&mut self) -> &mut Vec<T> {
        &mut self.records
    }

    /// Next free ID for this collection
    pub fn next_id(&self) -> Id {
        next_id(&self.records)
    }

    /// Replace the snapshot with the in-memory collection
    pub fn save(&self) -> Result<()> {
        self.collection.write_snapshot(&self.records)?;
        tracing::debug!(
            collection = T::COLLECTION,
            records = self.records.len(),
            "collection replaced"
        );
        Ok(())
    }
}
