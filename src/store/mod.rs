//! In-memory bill state for one session.
//!
//! `BillStore` owns the bill list, the monthly budget and the category filter.
//! The filtered view and the total are recomputed from those three on every
//! read.

mod chart;
mod error;
mod optimizer;
pub(crate) mod validate;

pub use chart::{monthly_totals, MONTH_LABELS};
pub use error::BillError;
pub use optimizer::{optimize, Optimization};

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{Bill, Category};

pub const DEFAULT_MONTHLY_BUDGET: Decimal = Decimal::from_parts(50000, 0, 0, false, 0);

#[derive(Debug, Clone)]
pub struct BillStore {
    bills: Vec<Bill>,
    monthly_budget: Decimal,
    category_filter: Option<Category>,
}

impl Default for BillStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BillStore {
    pub fn new() -> Self {
        Self::with_budget(DEFAULT_MONTHLY_BUDGET)
    }

    pub fn with_budget(monthly_budget: Decimal) -> Self {
        Self {
            bills: Vec::new(),
            monthly_budget,
            category_filter: None,
        }
    }

    // ── Mutations ────────────────────────────────────────────

    /// Positivity is the caller's concern; see `validate::parse_budget`.
    pub fn set_monthly_budget(&mut self, value: Decimal) {
        debug!(old = %self.monthly_budget, new = %value, "set monthly budget");
        self.monthly_budget = value;
    }

    /// Append a bill. The caller guarantees its id is not already present.
    pub fn add_bill(&mut self, bill: Bill) {
        debug!(id = bill.short_id(), amount = %bill.amount, category = %bill.category, "add bill");
        self.bills.push(bill);
    }

    /// Replace the bill with the same id in place. Returns `false` if none matched.
    pub fn edit_bill(&mut self, bill: Bill) -> bool {
        match self.bills.iter_mut().find(|b| b.id == bill.id) {
            Some(slot) => {
                debug!(id = bill.short_id(), amount = %bill.amount, "edit bill");
                *slot = bill;
                true
            }
            None => {
                debug!(id = bill.short_id(), "edit ignored, no such bill");
                false
            }
        }
    }

    pub fn remove_bill(&mut self, id: &str) -> Option<Bill> {
        let idx = self.bills.iter().position(|b| b.id == id)?;
        debug!(id, "remove bill");
        Some(self.bills.remove(idx))
    }

    /// Set or clear (`None`) the category filter.
    pub fn filter_bills(&mut self, category: Option<Category>) {
        debug!(?category, "filter bills");
        self.category_filter = category;
    }

    // ── Derived views ────────────────────────────────────────

    /// Sum of amounts over every bill, regardless of filter or budget.
    /// Saturates at `Decimal::MAX` instead of overflowing.
    pub fn calculate_total(&self) -> Decimal {
        self.bills
            .iter()
            .fold(Decimal::ZERO, |acc, b| acc.saturating_add(b.amount))
    }

    pub fn total_amount(&self) -> Decimal {
        self.calculate_total()
    }

    /// Bills within the monthly budget that match the category filter, if one is set.
    pub fn filtered_bills(&self) -> Vec<&Bill> {
        self.bills
            .iter()
            .filter(|b| b.amount <= self.monthly_budget)
            .filter(|b| self.category_filter.map_or(true, |c| b.category == c))
            .collect()
    }

    /// Budget left after every bill is paid. Negative when over budget.
    pub fn remaining_budget(&self) -> Decimal {
        self.monthly_budget.saturating_sub(self.total_amount())
    }

    pub fn optimize(&self) -> Optimization {
        optimize(&self.bills, self.monthly_budget)
    }

    /// Bills feeding the monthly chart: the filtered view, or every bill when that is empty.
    pub fn chart_bills(&self) -> Vec<&Bill> {
        let filtered = self.filtered_bills();
        if filtered.is_empty() {
            self.bills.iter().collect()
        } else {
            filtered
        }
    }

    pub fn monthly_totals(&self) -> [Decimal; 12] {
        monthly_totals(self.chart_bills())
    }

    // ── Accessors ────────────────────────────────────────────

    pub fn bills(&self) -> &[Bill] {
        &self.bills
    }

    pub fn bill(&self, id: &str) -> Option<&Bill> {
        self.bills.iter().find(|b| b.id == id)
    }

    pub fn monthly_budget(&self) -> Decimal {
        self.monthly_budget
    }

    pub fn category_filter(&self) -> Option<Category> {
        self.category_filter
    }

    pub fn len(&self) -> usize {
        self.bills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bills.is_empty()
    }
}
