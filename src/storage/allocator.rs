//! Identity allocation
//!
//! IDs are `max(existing) + 1`, or 1 for an empty collection. Callers must
//! hold the collection's writer so the allocated ID cannot be handed out
//! twice.

use crate::model::{Id, Record};

/// Next free ID for a collection
pub fn next_id<T: Record>(records: &[T]) -> Id {
    records.iter().map(Record::id).max().map_or(1, |max| max + 1)
}

/// Hands out consecutive IDs for a batch of inserts into one collection
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: Id,
}

impl IdAllocator {
    /// Start after the highest ID currently in `records`
    pub fn for_records<T: Record>(records: &[T]) -> Self {
        Self {
            next: next_id(records),
        }
    }

    /// Take the next ID
    pub fn allocate(&mut self) -> Id {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Peek at the ID the next call to `allocate` returns
    pub fn peek(&self) -> Id {
        self.next
    }
}
