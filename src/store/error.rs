use rust_decimal::Decimal;
use thiserror::Error;

/// Input rejected before it reaches the store. The message is shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BillError {
    #[error("Please enter a valid amount")]
    InvalidAmount(String),

    #[error("Adding this bill exceeds the monthly budget of ₹{budget}.")]
    ExceedsBudget { budget: Decimal, new_total: Decimal },

    #[error("Invalid budget: {0}. Enter a positive number")]
    InvalidBudget(String),

    #[error("Invalid date: {0}. Use YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

pub type Result<T> = std::result::Result<T, BillError>;
