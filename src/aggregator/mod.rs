mod errors;
mod report;
mod summaries;

pub use errors::AggregationError;
pub use report::Report;
pub use summaries::{
    category_totals, kind_totals, kpis, monthly_summary, CategoryTotal, CategoryTotals, KindTotals, KpiSet,
    MonthlySummary, MonthlyTotals
};
