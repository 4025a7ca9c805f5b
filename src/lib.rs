//! Statement ingestion and reporting.
//!
//! Reads bank statements exported as delimited text of unknown dialect, builds a
//! normalized [`Ledger`] and derives monthly, per-category and headline summaries.

pub mod aggregator;
pub mod categorizer;
pub mod engine;
pub mod importer;
pub mod models;
pub mod parser;
pub mod schema;
pub mod storage;
pub mod types;

pub use aggregator::{category_totals, kpis, monthly_summary, AggregationError, CategoryTotals, KpiSet, MonthlySummary, Report};
pub use categorizer::Categorizer;
pub use importer::{ingest, Import, Importer};
pub use models::{Category, IngestionError, Ledger, Transaction, TransactionKind};
