//! Locally computed aggregates
//!
//! The server reports its own totals (see
//! [`StatsSnapshot`](crate::dashboard::StatsSnapshot)); these reports
//! compute the same numbers, plus per-label breakdowns, directly from the
//! mirrored lists. Chart rendering belongs to the view layer; this
//! module only produces the data behind it.

pub mod overview;

pub use overview::{FinancialOverview, LabelBreakdown, LabelTotal, OverviewSlice};
