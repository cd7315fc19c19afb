//! Dashboard controller state
//!
//! One object owns everything the dashboard view displays: the mirrored
//! expense and income lists, the pending edit slot, the active sidebar
//! tab, and the last stats snapshot reported by the server. The view
//! layer reads through the accessors; the transport layer mutates
//! through the confirmed-result entry points.

pub mod state;
pub mod tabs;

pub use state::{DashboardState, StatsSnapshot};
pub use tabs::ViewTab;
