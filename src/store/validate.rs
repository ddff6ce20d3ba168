use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use super::error::{BillError, Result};
use super::BillStore;
use crate::models::Category;

pub fn parse_amount(input: &str) -> Result<Decimal> {
    let trimmed = input.trim();
    match Decimal::from_str(trimmed) {
        Ok(amount) if amount > Decimal::ZERO => Ok(amount),
        _ => Err(BillError::InvalidAmount(trimmed.to_string())),
    }
}

pub fn parse_budget(input: &str) -> Result<Decimal> {
    let trimmed = input.trim();
    match Decimal::from_str(trimmed) {
        Ok(budget) if budget > Decimal::ZERO => Ok(budget),
        _ => Err(BillError::InvalidBudget(trimmed.to_string())),
    }
}

pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| BillError::InvalidDate(trimmed.to_string()))
}

pub fn parse_category(input: &str) -> Result<Category> {
    Category::parse(input).ok_or_else(|| BillError::UnknownCategory(input.trim().to_string()))
}

/// Reject `amount` if it would push the store's total over the monthly budget.
///
/// When `replacing` names an existing bill, its current amount is taken out of
/// the total first so an edit is measured against the other bills only. This
/// intentionally differs from counting the edited bill twice.
/// A total too large for `Decimal` is reported as over budget.
pub fn check_budget(store: &BillStore, amount: Decimal, replacing: Option<&str>) -> Result<()> {
    let budget = store.monthly_budget();
    let replaced = replacing
        .and_then(|id| store.bill(id))
        .map(|b| b.amount)
        .unwrap_or(Decimal::ZERO);
    let new_total = store
        .total_amount()
        .checked_sub(replaced)
        .and_then(|rest| rest.checked_add(amount));
    match new_total {
        Some(total) if total <= budget => Ok(()),
        Some(total) => Err(BillError::ExceedsBudget {
            budget,
            new_total: total,
        }),
        None => Err(BillError::ExceedsBudget {
            budget,
            new_total: Decimal::MAX,
        }),
    }
}

/// Validate the amount field of an add or edit submission and return it parsed.
pub fn validate_submission(
    store: &BillStore,
    amount_input: &str,
    replacing: Option<&str>,
) -> Result<Decimal> {
    let amount = parse_amount(amount_input)?;
    check_budget(store, amount, replacing)?;
    Ok(amount)
}
