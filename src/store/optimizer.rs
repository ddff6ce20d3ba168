use rust_decimal::Decimal;

use crate::models::Bill;

#[derive(Debug, Clone, PartialEq)]
pub struct Optimization {
    pub selected_bills: Vec<Bill>,
    pub total_selected: Decimal,
}

/// Greedy largest-first selection of bills whose running sum stays within `budget`.
///
/// Bills are visited by amount descending; equal amounts keep their insertion
/// order. A bill is taken whenever it still fits, so a smaller bill can be
/// picked after a larger one was skipped. The result never exceeds the budget
/// but is not guaranteed to be the best possible subset.
pub fn optimize(bills: &[Bill], budget: Decimal) -> Optimization {
    let mut sorted: Vec<&Bill> = bills.iter().collect();
    sorted.sort_by(|a, b| b.amount.cmp(&a.amount));

    let mut total_selected = Decimal::ZERO;
    let mut selected_bills = Vec::new();

    for bill in sorted {
        match total_selected.checked_add(bill.amount) {
            Some(next) if next <= budget => {
                total_selected = next;
                selected_bills.push(bill.clone());
            }
            _ => {}
        }
    }

    tracing::trace!(
        selected = selected_bills.len(),
        of = bills.len(),
        %total_selected,
        %budget,
        "optimized bills"
    );

    Optimization {
        selected_bills,
        total_selected,
    }
}
