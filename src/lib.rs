//! Spendview - client-side state core for a personal finance dashboard
//!
//! This library holds the state that a finance-dashboard client keeps in
//! memory: the lists of expense and income records mirrored from a remote
//! REST store, the record currently staged for editing, the active view
//! tab, and aggregate totals. It never talks to the network itself; the
//! transport layer applies server-confirmed mutations through the entry
//! points defined here (confirm-then-apply), so the mirrored lists never
//! diverge from persisted state.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Client settings and path management
//! - `error`: Custom error types
//! - `models`: Core data models (entries, money, identifiers)
//! - `sync`: The local list synchronizer and confirmation types
//! - `dashboard`: Controller state (lists, edit slot, active tab)
//! - `reports`: Locally computed totals and breakdowns
//!
//! # Example
//!
//! ```rust
//! use spendview::models::{Entry, EntryId, Money};
//! use spendview::sync::EntryList;
//! use chrono::NaiveDate;
//!
//! let mut expenses = EntryList::new();
//! expenses.load(vec![Entry::new(
//!     EntryId::from("665f1c2e9b1d8a3f4c0e7a21"),
//!     Money::from_cents(1050),
//!     "Groceries",
//!     NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
//! )]);
//!
//! // Only after the remote delete was acknowledged:
//! expenses.apply_delete(&EntryId::from("665f1c2e9b1d8a3f4c0e7a21"));
//! assert!(expenses.is_empty());
//! ```

pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod reports;
pub mod sync;

pub use error::TrackerError;
