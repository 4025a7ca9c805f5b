use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Category, TransactionKind};

/// Placeholder used when a row carries no description.
pub const NO_DESCRIPTION: &str = "No description";

/// A single normalized statement entry.
///
/// Values are immutable once built; the kind (income or expense) is always
/// derived from the sign of `amount` and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    date: NaiveDate,
    description: String,
    /// Positive is money in, negative is money out.
    amount: Decimal,
    category: Category
}

impl Transaction {
    /// Builds a transaction, substituting [`NO_DESCRIPTION`] for a blank description.
    pub fn new(date: NaiveDate, description: &str, amount: Decimal, category: Category) -> Self {
        let description = description.trim();

        Self {
            date,
            description: if description.is_empty() { NO_DESCRIPTION.to_string() } else { description.to_string() },
            amount,
            category
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Income only when the amount is strictly positive; zero counts as an expense.
    pub fn kind(&self) -> TransactionKind {
        if self.amount > Decimal::ZERO {
            TransactionKind::Income
        } else {
            TransactionKind::Expense
        }
    }
}
