//! Local list synchronization
//!
//! Keeps an in-memory ordered list of entry records consistent with
//! server-confirmed mutations. The synchronizer never contacts the
//! network and never fails; the transport layer calls in here only after
//! the remote store has acknowledged an operation (confirm-then-apply).

pub mod confirmation;
pub mod list;

pub use confirmation::Confirmation;
pub use list::EntryList;
