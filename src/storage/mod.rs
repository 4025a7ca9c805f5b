mod report_storage;

use serde::Serialize;

use crate::aggregator::Report;

pub use report_storage::ReportStorage;

/// Final state of one import as kept by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "result", rename_all = "lowercase")]
pub enum ImportOutcome {
    Completed(Report),
    Failed(String)
}

pub trait Storage: Send + Sync + 'static {
    fn load(&self, import_id: &str) -> Option<ImportOutcome>;
    fn save(&self, import_id: &str, outcome: ImportOutcome);
}
