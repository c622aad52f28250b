//! The authoritative in-memory collection of committed registrations.

use thiserror::Error;

use crate::record::{RecordId, Registration, StudentProfile};

/// Errors surfaced by store operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("no registration with id {0}")]
    NotFound(RecordId),
}

/// Ordered, in-memory collection of registrations.
///
/// Single source of truth for the roster. Records keep insertion order:
/// `update` replaces in place and `delete` removes, nothing reorders. Every
/// successful mutation bumps [`RegistrationStore::revision`], the change
/// signal frontends poll; failed operations leave both the records and the
/// revision untouched.
#[derive(Clone, Debug, Default)]
pub struct RegistrationStore {
    records: Vec<Registration>,
    next_id: u64,
    revision: u64,
}

impl RegistrationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commits a new registration under a freshly assigned id.
    ///
    /// Ids are monotonic and never reused, so no create can collide with any
    /// record past or present. Returns a copy of the stored record.
    pub fn create(&mut self, profile: StudentProfile) -> Registration {
        self.next_id += 1;
        let record = Registration::new(RecordId(self.next_id), profile);
        self.records.push(record.clone());
        self.revision += 1;
        record
    }

    /// Replaces the record carrying `record.id` wholesale, keeping its
    /// position in the list.
    pub fn update(&mut self, record: Registration) -> Result<(), StoreError> {
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(slot) => {
                *slot = record;
                self.revision += 1;
                Ok(())
            }
            None => Err(StoreError::NotFound(record.id)),
        }
    }

    /// Removes the record with the given id.
    pub fn delete(&mut self, id: RecordId) -> Result<(), StoreError> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        if self.records.len() == before {
            return Err(StoreError::NotFound(id));
        }
        self.revision += 1;
        Ok(())
    }

    /// Returns the record with the given id, if present.
    pub fn get(&self, id: RecordId) -> Option<&Registration> {
        self.records.iter().find(|r| r.id == id)
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[Registration] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Change counter: increments on every successful mutation and stays put
    /// on failed ones. Frontends redraw when it moves.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
