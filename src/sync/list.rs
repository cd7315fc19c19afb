//! Local list synchronizer
//!
//! `EntryList` mirrors one server-side list (all expenses, or all
//! incomes) in memory. Order is the server's fetch order and is never
//! re-sorted locally. Mutations are applied only for operations the
//! remote store has already confirmed, so the mirrored list never shows
//! state the server has not persisted. Alongside the list lives a
//! single-slot pending edit reference: a copy of the record currently
//! staged in an edit form.
//!
//! Every operation is pure in-memory bookkeeping: infallible, idempotent
//! where the identifier may be stale, and safe to call on a collection
//! that was refreshed underneath an in-flight request.

use tracing::debug;

use crate::models::{Entry, EntryId};

/// Ordered in-memory mirror of a server-side entry list
#[derive(Debug, Clone, Default)]
pub struct EntryList {
    entries: Vec<Entry>,
    pending_edit: Option<Entry>,
}

impl EntryList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire collection with a freshly fetched sequence
    ///
    /// The pending edit reference is left untouched: a refetch while an
    /// edit form is open does not close the form.
    pub fn load(&mut self, records: Vec<Entry>) {
        debug!(count = records.len(), "loaded entry list");
        self.entries = records;
    }

    /// Remove the record with the given id after a confirmed remote delete
    ///
    /// Absent ids are a silent no-op: the list may already have been
    /// replaced by a refetch. Returns whether a record was removed.
    pub fn apply_delete(&mut self, id: &EntryId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.entries.remove(index);
                debug!(%id, "removed entry");
                true
            }
            None => false,
        }
    }

    /// Insert a record returned by a confirmed remote create
    ///
    /// Appended at the end, matching where the server reports it on the
    /// next fetch. If the id is already present (a duplicate or late
    /// confirmation), the existing record is replaced in place instead,
    /// keeping identifiers unique.
    pub fn apply_create(&mut self, record: Entry) {
        match self.position(&record.id) {
            Some(index) => {
                debug!(id = %record.id, "confirmed create for known id, replacing");
                self.entries[index] = record;
            }
            None => {
                debug!(id = %record.id, "appended entry");
                self.entries.push(record);
            }
        }
    }

    /// Stage a copy of a record for editing
    ///
    /// Last call wins: any previously staged record is dropped.
    pub fn begin_edit(&mut self, record: Entry) {
        debug!(id = %record.id, "staged entry for editing");
        self.pending_edit = Some(record);
    }

    /// Replace a record in place after a confirmed remote update
    ///
    /// The updated record takes the original's position; order and length
    /// are unchanged. When the id is not found locally the collection is
    /// left alone (it may have been refreshed from another source). The
    /// pending edit reference is cleared unconditionally, found or not.
    /// Returns whether a record was replaced.
    pub fn commit_update(&mut self, record: Entry) -> bool {
        self.pending_edit = None;
        match self.position(&record.id) {
            Some(index) => {
                debug!(id = %record.id, "updated entry in place");
                self.entries[index] = record;
                true
            }
            None => {
                debug!(id = %record.id, "confirmed update for unknown id, ignoring");
                false
            }
        }
    }

    /// Clear the pending edit reference without touching the collection
    pub fn cancel_edit(&mut self) {
        self.pending_edit = None;
    }

    /// The current collection, in server fetch order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The record currently staged for editing, if any
    pub fn pending_edit(&self) -> Option<&Entry> {
        self.pending_edit.as_ref()
    }

    /// Look up a record by id
    pub fn get(&self, id: &EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    /// Whether a record with this id is present
    pub fn contains(&self, id: &EntryId) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, id: &EntryId) -> Option<usize> {
        self.entries.iter().position(|e| &e.id == id)
    }
}
