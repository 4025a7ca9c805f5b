use crate::storage::{ImportOutcome, Storage};
use dashmap::iter::Iter;
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory outcomes keyed by the caller supplied import id.
pub struct ReportStorage {
    outcomes: Arc<DashMap<String, ImportOutcome>>
}

impl ReportStorage {
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(DashMap::new())
        }
    }

    pub fn iter(&self) -> Iter<'_, String, ImportOutcome> {
        self.outcomes.iter()
    }
}

impl Default for ReportStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for ReportStorage {
    fn load(&self, import_id: &str) -> Option<ImportOutcome> {
        self.outcomes.get(import_id).map(|entry| entry.value().clone())
    }

    fn save(&self, import_id: &str, outcome: ImportOutcome) {
        self.outcomes.insert(import_id.to_string(), outcome);
    }
}
