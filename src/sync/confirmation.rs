//! Server confirmation types
//!
//! The transport layer resolves each remote call into one of these
//! values once the store has acknowledged it: the full record for
//! creates and updates, just the identifier for deletes. Failed calls
//! never produce a `Confirmation`, which is what keeps the local lists
//! from drifting ahead of persisted state.

use serde::{Deserialize, Serialize};

use super::list::EntryList;
use crate::models::{Entry, EntryId};

/// A server-acknowledged mutation, ready to apply locally
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "op", content = "body")]
pub enum Confirmation {
    /// The store persisted a new record
    Created(Entry),
    /// The store persisted an update to an existing record
    Updated(Entry),
    /// The store deleted the record with this id
    Deleted(EntryId),
}

impl Confirmation {
    /// The identifier the confirmation concerns
    pub fn id(&self) -> &EntryId {
        match self {
            Self::Created(entry) | Self::Updated(entry) => &entry.id,
            Self::Deleted(id) => id,
        }
    }
}

impl EntryList {
    /// Apply a confirmed mutation to the list
    pub fn apply(&mut self, confirmation: Confirmation) {
        match confirmation {
            Confirmation::Created(entry) => self.apply_create(entry),
            Confirmation::Updated(entry) => {
                self.commit_update(entry);
            }
            Confirmation::Deleted(id) => {
                self.apply_delete(&id);
            }
        }
    }
}
