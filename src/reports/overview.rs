//! Financial overview report
//!
//! Aggregates the mirrored expense and income lists into the totals and
//! pie-chart slices the dashboard's overview tab displays, and per-label
//! breakdowns for the list tabs.

use std::collections::HashMap;

use crate::models::Money;
use crate::sync::EntryList;

/// One slice of the overview pie chart
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewSlice {
    pub name: &'static str,
    pub amount: Money,
    /// Share of the slice total, 0-100
    pub percentage: f64,
}

/// Totals across both lists, plus the three overview chart slices
#[derive(Debug, Clone, PartialEq)]
pub struct FinancialOverview {
    pub total_income: Money,
    pub total_expense: Money,
    /// Income minus expenses
    pub total_balance: Money,
    pub slices: Vec<OverviewSlice>,
}

impl FinancialOverview {
    /// Compute the overview from the mirrored lists
    pub fn compute(expenses: &EntryList, incomes: &EntryList) -> Self {
        let total_expense: Money = expenses.entries().iter().map(|e| e.amount).sum();
        let total_income: Money = incomes.entries().iter().map(|e| e.amount).sum();
        let total_balance = total_income - total_expense;

        // The chart scales slices against their combined magnitude
        let slice_total = total_balance.abs() + total_expense + total_income;

        let slices = vec![
            OverviewSlice {
                name: "Total Balance",
                amount: total_balance,
                percentage: total_balance.percent_of(slice_total),
            },
            OverviewSlice {
                name: "Total Expenses",
                amount: total_expense,
                percentage: total_expense.percent_of(slice_total),
            },
            OverviewSlice {
                name: "Total Income",
                amount: total_income,
                percentage: total_income.percent_of(slice_total),
            },
        ];

        Self {
            total_income,
            total_expense,
            total_balance,
            slices,
        }
    }
}

/// Aggregate for one label within a list
#[derive(Debug, Clone, PartialEq)]
pub struct LabelTotal {
    pub label: String,
    pub total: Money,
    pub entry_count: usize,
    /// Share of the list total, 0-100
    pub percentage: f64,
}

/// Per-label totals for one list (categories for expenses, sources for incomes)
#[derive(Debug, Clone, PartialEq)]
pub struct LabelBreakdown {
    pub labels: Vec<LabelTotal>,
    pub total: Money,
    pub entry_count: usize,
}

impl LabelBreakdown {
    /// Compute the breakdown for one list, largest label first
    pub fn compute(list: &EntryList) -> Self {
        let mut by_label: HashMap<&str, (Money, usize)> = HashMap::new();
        let mut total = Money::zero();

        for entry in list.entries() {
            let slot = by_label
                .entry(entry.label.as_str())
                .or_insert((Money::zero(), 0));
            slot.0 += entry.amount;
            slot.1 += 1;
            total += entry.amount;
        }

        let mut labels: Vec<LabelTotal> = by_label
            .into_iter()
            .map(|(label, (amount, count))| LabelTotal {
                label: label.to_string(),
                total: amount,
                entry_count: count,
                percentage: amount.percent_of(total),
            })
            .collect();

        // Largest first; ties broken by name for a stable display order
        labels.sort_by(|a, b| b.total.cmp(&a.total).then(a.label.cmp(&b.label)));

        Self {
            labels,
            total,
            entry_count: list.len(),
        }
    }

    /// The heaviest labels, at most `limit` of them
    pub fn top_labels(&self, limit: usize) -> &[LabelTotal] {
        &self.labels[..self.labels.len().min(limit)]
    }
}
