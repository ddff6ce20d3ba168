use chrono::Datelike;
use rust_decimal::Decimal;

use crate::models::Bill;

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Sum bill amounts per calendar month (index 0 = January), across all years.
pub fn monthly_totals<'a>(bills: impl IntoIterator<Item = &'a Bill>) -> [Decimal; 12] {
    let mut totals = [Decimal::ZERO; 12];
    for bill in bills {
        let idx = bill.date.month0() as usize;
        if let Some(slot) = totals.get_mut(idx) {
            *slot = slot.saturating_add(bill.amount);
        }
    }
    totals
}
