//! ID → record indexes built once per operation

use std::collections::HashMap;

use crate::model::{Id, Record};

use super::UNKNOWN;

/// Borrowed index over one collection
pub struct Lookup<'a, T> {
    by_id: HashMap<Id, &'a T>,
}

impl<'a, T: Record> Lookup<'a, T> {
    /// Index `records` by ID
    ///
    /// Should a snapshot ever hold two records with the same ID, the first
    /// one wins, matching a front-to-back scan.
    pub fn new(records: &'a [T]) -> Self {
        let mut by_id = HashMap::with_capacity(records.len());
        for record in records {
            by_id.entry(record.id()).or_insert(record);
        }
        Self { by_id }
    }

    /// The record with this ID, if any
    pub fn get(&self, id: Id) -> Option<&'a T> {
        self.by_id.get(&id).copied()
    }

    /// A field of the referenced record, or the placeholder
    pub fn field(&self, id: Option<Id>, f: impl FnOnce(&'a T) -> &'a str) -> String {
        id.and_then(|id| self.get(id))
            .map(f)
            .unwrap_or(UNKNOWN)
            .to_string()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
