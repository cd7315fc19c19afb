//! Strongly-typed ID wrapper for entry records
//!
//! Entry identifiers are assigned by the remote store and opaque to the
//! client: never parsed, never minted locally. The newtype prevents
//! accidentally mixing identifiers up with ordinary strings at compile
//! time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, server-assigned identifier for an entry record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for EntryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for EntryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
