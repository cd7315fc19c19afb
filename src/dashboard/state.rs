//! Dashboard state container

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::tabs::ViewTab;
use crate::models::{Entry, EntryId, Money};
use crate::sync::{Confirmation, EntryList};

/// Server-reported aggregate totals (the `/dashboard/stats` payload)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct StatsSnapshot {
    #[serde(default)]
    pub total_income: Money,
    #[serde(default)]
    pub total_expense: Money,
    #[serde(default)]
    pub total_balance: Money,
}

/// All state the dashboard view reads from
///
/// Both entry lists follow the confirm-then-apply contract: the
/// transport layer calls the `apply_*` entry points only after the
/// remote store acknowledged the mutation. The controller itself never
/// performs a remote call and never fails.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    expenses: EntryList,
    incomes: EntryList,
    active_tab: ViewTab,
    stats: Option<StatsSnapshot>,
}

impl DashboardState {
    /// Create an empty dashboard (nothing fetched yet)
    pub fn new() -> Self {
        Self::default()
    }

    // --- fetch results -------------------------------------------------

    /// Replace the expense list with a fetched sequence
    pub fn load_expenses(&mut self, records: Vec<Entry>) {
        self.expenses.load(records);
    }

    /// Replace the income list with a fetched sequence
    pub fn load_incomes(&mut self, records: Vec<Entry>) {
        self.incomes.load(records);
    }

    /// Store the latest server-reported totals
    pub fn load_stats(&mut self, stats: StatsSnapshot) {
        debug!(
            income = stats.total_income.cents(),
            expense = stats.total_expense.cents(),
            "loaded stats snapshot"
        );
        self.stats = Some(stats);
    }

    // --- confirmed mutations -------------------------------------------

    /// Apply a confirmed mutation to the expense list
    pub fn apply_expense(&mut self, confirmation: Confirmation) {
        self.expenses.apply(confirmation);
    }

    /// Apply a confirmed mutation to the income list
    pub fn apply_income(&mut self, confirmation: Confirmation) {
        self.incomes.apply(confirmation);
    }

    // --- edit staging ---------------------------------------------------

    /// Stage an expense for the edit modal
    pub fn begin_expense_edit(&mut self, id: &EntryId) -> bool {
        match self.expenses.get(id).cloned() {
            Some(record) => {
                self.expenses.begin_edit(record);
                true
            }
            None => {
                debug!(%id, "edit requested for unknown expense");
                false
            }
        }
    }

    /// Close the edit modal without saving
    pub fn cancel_expense_edit(&mut self) {
        self.expenses.cancel_edit();
    }

    // --- view state -----------------------------------------------------

    /// Switch the active sidebar tab
    pub fn set_active_tab(&mut self, tab: ViewTab) {
        debug!(tab = %tab, "switched tab");
        self.active_tab = tab;
    }

    pub fn active_tab(&self) -> ViewTab {
        self.active_tab
    }

    pub fn expenses(&self) -> &EntryList {
        &self.expenses
    }

    pub fn incomes(&self) -> &EntryList {
        &self.incomes
    }

    /// The expense staged in the edit modal, if any
    pub fn editing_expense(&self) -> Option<&Entry> {
        self.expenses.pending_edit()
    }

    /// The last stats snapshot, if one was fetched
    pub fn stats(&self) -> Option<&StatsSnapshot> {
        self.stats.as_ref()
    }
}
