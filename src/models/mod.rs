//! Core data models for Spendview
//!
//! This module contains the data structures that represent the tracker
//! domain: entry records, monetary amounts, and entity identifiers.

pub mod entry;
pub mod ids;
pub mod money;

pub use entry::{Entry, EntryValidationError};
pub use ids::EntryId;
pub use money::Money;
