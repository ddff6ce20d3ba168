use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::Category;

#[derive(Debug, Clone, PartialEq)]
pub struct Bill {
    pub id: String,
    pub description: String,
    pub category: Category,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub due_date: Option<NaiveDate>,
}

impl Bill {
    /// Create a bill with a freshly generated id.
    pub fn new(description: String, category: Category, amount: Decimal, date: NaiveDate) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            description,
            category,
            amount,
            date,
            due_date: None,
        }
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// First 8 characters of the id, for compact display.
    pub fn short_id(&self) -> &str {
        self.id.get(..8).unwrap_or(&self.id)
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_date.is_some_and(|d| d < today)
    }
}
