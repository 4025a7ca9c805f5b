use crate::aggregator::Report;
use crate::importer::Importer;
use crate::models::IngestionError;
use crate::storage::{ImportOutcome, Storage};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

/// A statement file to import and the id its outcome is stored under.
#[derive(Debug, Clone)]
pub struct ImportJob {
    pub import_id: String,
    pub path: PathBuf
}

impl ImportJob {
    pub fn new(import_id: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            import_id: import_id.into(),
            path: path.into()
        }
    }
}

/// Runs independent statement imports concurrently.
///
/// Each import owns its ledger; the only shared state is the outcome storage.
pub struct ReportEngine<S: Storage> {
    storage: Arc<S>,
    importer: Arc<Importer>
}

impl<S: Storage> ReportEngine<S> {
    /// Creates a new engine writing outcomes to `storage`.
    pub fn new(storage: Arc<S>) -> Self {
        Self {
            storage,
            importer: Arc::new(Importer::new())
        }
    }

    pub fn with_importer(mut self, importer: Importer) -> Self {
        self.importer = Arc::new(importer);
        self
    }

    /// Imports every job and stores one outcome per import id.
    ///
    /// A failing import is recorded as `ImportOutcome::Failed` and never affects
    /// the others. Returns how many imports completed.
    pub async fn run(&self, jobs: Vec<ImportJob>) -> anyhow::Result<usize> {
        let mut tasks = JoinSet::new();
        let mut import_ids = HashMap::new();

        for job in jobs {
            let importer = self.importer.clone();
            let import_id = job.import_id.clone();

            //NOTE: Reading and parsing are blocking work, keep them off the async workers
            let handle = tasks.spawn_blocking(move || {
                let outcome = process(&importer, &job);
                (job.import_id, outcome)
            });

            import_ids.insert(handle.id(), import_id);
        }

        let mut completed = 0;

        while let Some(result) = tasks.join_next().await {
            match result {
                Ok((import_id, Ok(report))) => {
                    info!("Import [{import_id}] completed with {} transactions", report.transaction_count);
                    self.storage.save(&import_id, ImportOutcome::Completed(report));
                    completed += 1;
                }
                Ok((import_id, Err(failure))) => {
                    warn!("Import [{import_id}] failed: {failure}");
                    self.storage.save(&import_id, ImportOutcome::Failed(failure.to_string()));
                }
                Err(failure) => match import_ids.get(&failure.id()) {
                    Some(import_id) => {
                        error!("Import [{import_id}] did not finish: {failure}");
                        self.storage.save(import_id, ImportOutcome::Failed(format!("Import did not finish: {failure}")));
                    }
                    None => error!("An import task did not finish: {failure}")
                }
            }
        }

        Ok(completed)
    }
}

fn process(importer: &Importer, job: &ImportJob) -> Result<Report, IngestionError> {
    let bytes = fs::read(&job.path)?;
    let import = importer.import(&bytes)?;

    Ok(Report::build(&job.import_id, &import))
}
