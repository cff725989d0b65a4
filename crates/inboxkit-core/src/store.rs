use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, warn};

use crate::error::ViewError;
use crate::record::Record;

/// Process-wide, so no two stores ever share a revision.
static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

fn next_revision() -> u64 {
    NEXT_REVISION.fetch_add(1, Ordering::Relaxed)
}

/// In-memory records owned by one screen.
#[derive(Debug, Clone)]
pub struct RecordStore<R> {
    items: Vec<R>,
    revision: u64,
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> RecordStore<R> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            revision: next_revision(),
        }
    }

    /// Build a store, keeping the first record for each id.
    pub fn from_records<I: IntoIterator<Item = R>>(records: I) -> Self {
        let mut seen = HashSet::new();
        let mut items = Vec::new();
        for record in records {
            if seen.insert(record.id().to_string()) {
                items.push(record);
            } else {
                debug!(id = record.id(), "Dropping duplicate record");
            }
        }
        Self {
            items,
            revision: next_revision(),
        }
    }

    // ===== Getters =====

    pub fn records(&self) -> &[R] {
        &self.items
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.items.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|r| r.id() == id)
    }

    // ===== Mutations =====

    pub fn insert(&mut self, record: R) -> Result<(), ViewError> {
        if self.contains(record.id()) {
            return Err(ViewError::DuplicateId(record.id().to_string()));
        }
        self.items.push(record);
        self.touch();
        Ok(())
    }

    /// Edit one record. An edit that changes the id is rejected and the
    /// record is left as it was.
    pub fn update<F>(&mut self, id: &str, f: F) -> Result<(), ViewError>
    where
        R: Clone,
        F: FnOnce(&mut R),
    {
        let record = self
            .items
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| ViewError::RecordNotFound(id.to_string()))?;
        let mut edited = record.clone();
        f(&mut edited);
        if edited.id() != id {
            return Err(ViewError::IdChanged {
                id: id.to_string(),
                new_id: edited.id().to_string(),
            });
        }
        *record = edited;
        self.touch();
        Ok(())
    }

    /// Apply `f` to every record whose id is in `ids`; returns how many were
    /// updated. Edits that change an id are skipped.
    pub fn update_many<'a, I, F>(&mut self, ids: I, mut f: F) -> usize
    where
        R: Clone,
        I: IntoIterator<Item = &'a str>,
        F: FnMut(&mut R),
    {
        let ids: HashSet<&str> = ids.into_iter().collect();
        let mut updated = 0;
        for record in self.items.iter_mut().filter(|r| ids.contains(r.id())) {
            let mut edited = record.clone();
            f(&mut edited);
            if edited.id() != record.id() {
                warn!(
                    id = record.id(),
                    new_id = edited.id(),
                    "Skipping edit that changes a record id"
                );
                continue;
            }
            *record = edited;
            updated += 1;
        }
        if updated > 0 {
            self.touch();
        }
        updated
    }

    pub fn remove(&mut self, id: &str) -> Option<R> {
        let pos = self.items.iter().position(|r| r.id() == id)?;
        let removed = self.items.remove(pos);
        self.touch();
        Some(removed)
    }

    /// Remove every record whose id is in `ids`; returns how many were removed.
    pub fn remove_many<'a, I>(&mut self, ids: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        let ids: HashSet<&str> = ids.into_iter().collect();
        let before = self.items.len();
        self.items.retain(|r| !ids.contains(r.id()));
        let removed = before - self.items.len();
        if removed > 0 {
            self.touch();
        }
        removed
    }

    fn touch(&mut self) {
        self.revision = next_revision();
    }
}
