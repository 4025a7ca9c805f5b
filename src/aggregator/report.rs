use serde::Serialize;
use tracing::debug;

use crate::aggregator::summaries::{
    category_totals, kind_totals, kpis, monthly_summary, CategoryTotals, KindTotals, KpiSet, MonthlySummary
};
use crate::importer::Import;
use crate::schema::Dialect;

/// Every summary of one import, ready for rendering or serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub import_id: String,
    pub dialect: Dialect,
    pub transaction_count: usize,
    pub skipped_rows: usize,
    pub kpis: KpiSet,
    pub monthly: MonthlySummary,
    pub categories: CategoryTotals,
    pub kinds: KindTotals
}

impl Report {
    /// Runs every aggregation stage over the import's ledger.
    ///
    /// The monthly stage is optional: when it fails the report carries an empty
    /// monthly summary instead.
    pub fn build(import_id: &str, import: &Import) -> Self {
        let ledger = &import.ledger;

        let monthly = monthly_summary(ledger).unwrap_or_else(|error| {
            debug!("Import [{import_id}] has no monthly summary: {error}");
            MonthlySummary::new()
        });

        Self {
            import_id: import_id.to_string(),
            dialect: import.dialect,
            transaction_count: ledger.len(),
            skipped_rows: import.skipped.len(),
            kpis: kpis(ledger),
            monthly,
            categories: category_totals(ledger),
            kinds: kind_totals(ledger)
        }
    }
}
