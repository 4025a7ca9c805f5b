mod errors;
mod ledger;
mod transaction;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

pub use errors::{IngestionError, RowError};
pub use ledger::Ledger;
pub use transaction::{Transaction, NO_DESCRIPTION};

/// Direction of a transaction, derived from the sign of its amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TransactionKind {
    Income,
    Expense
}

/// Spending category assigned by the categorizer.
///
/// Variant order is the presentation tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Housing,
    Leisure,
    Health,
    Other
}

impl Display for Category {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Housing => "Housing",
            Category::Leisure => "Leisure",
            Category::Health => "Health",
            Category::Other => "Other"
        };

        formatter.write_str(label)
    }
}
