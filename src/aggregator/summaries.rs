use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use serde::Serialize;

use crate::aggregator::errors::AggregationError;
use crate::models::{Category, Ledger, TransactionKind};
use crate::types::YearMonth;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Income and expense sums of one month. Expense is signed (never positive).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MonthlyTotals {
    pub income: Decimal,
    pub expense: Decimal
}

impl MonthlyTotals {
    /// Balance of the month.
    pub fn net(&self) -> Decimal {
        self.income.saturating_add(self.expense)
    }
}

pub type MonthlySummary = BTreeMap<YearMonth, MonthlyTotals>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    /// Absolute amount spent.
    pub total: Decimal
}

/// Expense totals per category, largest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryTotals(Vec<CategoryTotal>);

impl CategoryTotals {
    pub fn iter(&self) -> std::slice::Iter<'_, CategoryTotal> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, category: Category) -> Option<Decimal> {
        self.0.iter().find(|entry| entry.category == category).map(|entry| entry.total)
    }

    /// Sum over every category.
    pub fn total(&self) -> Decimal {
        self.0.iter().fold(Decimal::ZERO, |sum, entry| sum.saturating_add(entry.total))
    }

    /// Percentage of all expenses spent in `category`; zero when absent.
    pub fn share(&self, category: Category) -> Decimal {
        let total = self.total();

        match self.get(category) {
            Some(amount) if !total.is_zero() => percentage(amount, total),
            _ => Decimal::ZERO
        }
    }
}

/// Absolute income and expense magnitudes of a whole ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KindTotals {
    pub income: Decimal,
    pub expense: Decimal
}

/// Headline figures of a ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KpiSet {
    pub total_income: Decimal,
    /// Signed, never positive.
    pub total_expense: Decimal,
    pub net_balance: Decimal,
    /// Percent of income kept; zero without income.
    pub savings_rate: Decimal
}

/// Groups the ledger by calendar month.
///
/// Every month that has transactions reports both an income and an expense
/// total, zero when that kind is absent.
///
/// # Errors
/// Returns `AggregationError::NoDateData` for a ledger without transactions.
pub fn monthly_summary(ledger: &Ledger) -> Result<MonthlySummary, AggregationError> {
    if ledger.is_empty() {
        return Err(AggregationError::NoDateData);
    }

    let mut summary = MonthlySummary::new();

    for transaction in ledger {
        let totals = summary.entry(YearMonth::of(transaction.date())).or_default();

        match transaction.kind() {
            TransactionKind::Income => totals.income = totals.income.saturating_add(transaction.amount()),
            TransactionKind::Expense => totals.expense = totals.expense.saturating_add(transaction.amount())
        }
    }

    Ok(summary)
}

/// Sums absolute expense amounts per category, sorted by descending total.
///
/// Ties keep the category declaration order. Income is ignored; a ledger
/// without expenses gives an empty result.
pub fn category_totals(ledger: &Ledger) -> CategoryTotals {
    let mut totals = HashMap::<Category, Decimal>::new();

    for transaction in ledger.iter().filter(|t| t.kind() == TransactionKind::Expense) {
        let total = totals.entry(transaction.category()).or_default();
        *total = total.saturating_add(transaction.amount().abs());
    }

    let mut entries: Vec<CategoryTotal> = totals.into_iter()
        .map(|(category, total)| CategoryTotal { category, total })
        .collect();

    entries.sort_by(|a, b| b.total.cmp(&a.total).then(a.category.cmp(&b.category)));

    CategoryTotals(entries)
}

pub fn kind_totals(ledger: &Ledger) -> KindTotals {
    let mut totals = KindTotals::default();

    for transaction in ledger {
        match transaction.kind() {
            TransactionKind::Income => totals.income = totals.income.saturating_add(transaction.amount()),
            TransactionKind::Expense => totals.expense = totals.expense.saturating_add(transaction.amount().abs())
        }
    }

    totals
}

/// Computes the headline figures. An empty ledger gives all zeros.
pub fn kpis(ledger: &Ledger) -> KpiSet {
    let mut total_income = Decimal::ZERO;
    let mut total_expense = Decimal::ZERO;

    for transaction in ledger {
        match transaction.kind() {
            TransactionKind::Income => total_income = total_income.saturating_add(transaction.amount()),
            TransactionKind::Expense => total_expense = total_expense.saturating_add(transaction.amount())
        }
    }

    let net_balance = total_income.saturating_add(total_expense);
    let savings_rate = if total_income > Decimal::ZERO {
        percentage(net_balance, total_income)
    } else {
        Decimal::ZERO
    };

    KpiSet {
        total_income,
        total_expense,
        net_balance,
        savings_rate
    }
}

//NOTE: Sums saturate at the Decimal range; a ratio that cannot be represented reads as zero
fn percentage(part: Decimal, whole: Decimal) -> Decimal {
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(HUNDRED))
        .unwrap_or(Decimal::ZERO)
}
