//! Sidebar view tabs

use serde::{Deserialize, Serialize};
use std::fmt;

/// The dashboard's sidebar tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ViewTab {
    /// Overview with totals and the breakdown chart
    #[default]
    Dashboard,
    AddIncome,
    AddExpense,
    AllExpenses,
    IncomeRecord,
}

impl ViewTab {
    /// Human-readable tab title, as shown in the sidebar
    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::AddIncome => "Add Income",
            Self::AddExpense => "Add Expense",
            Self::AllExpenses => "All Expenses",
            Self::IncomeRecord => "Income Record",
        }
    }
}

impl fmt::Display for ViewTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
