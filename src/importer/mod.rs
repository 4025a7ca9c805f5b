
use tracing::{debug, info};

use crate::categorizer::Categorizer;
use crate::models::{IngestionError, Ledger, RowError};
use crate::parser::RowParser;
use crate::schema::{self, ColumnMapping, Dialect};

/// A data row that was left out of the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line in the source file.
    pub line: usize,
    pub reason: RowError
}

/// Outcome of a successful import: the ledger plus how it was read.
#[derive(Debug, Clone)]
pub struct Import {
    pub ledger: Ledger,
    pub dialect: Dialect,
    pub mapping: ColumnMapping,
    pub skipped: Vec<SkippedRow>
}

/// Builds ledgers from raw statement files.
#[derive(Debug, Clone, Default)]
pub struct Importer {
    categorizer: Categorizer
}

impl Importer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categorizer(mut self, categorizer: Categorizer) -> Self {
        self.categorizer = categorizer;
        self
    }

    /// Reads a statement end to end.
    ///
    /// Rows with an unreadable amount or date are skipped and reported in
    /// `Import::skipped`; they never fail the import on their own.
    ///
    /// # Errors
    /// - `IngestionError::UnreadableFile` or `IngestionError::MissingColumns`
    ///   from schema resolution.
    /// - `IngestionError::NoValidRows` when every data row was skipped.
    pub fn import(&self, bytes: &[u8]) -> Result<Import, IngestionError> {
        let statement = schema::resolve(bytes)?;
        let parser = RowParser::new(&statement.mapping, statement.dialect.decimal, &self.categorizer);

        let mut transactions = Vec::with_capacity(statement.table.records.len());
        let mut skipped = Vec::new();

        for record in &statement.table.records {
            match parser.parse(record) {
                Ok(transaction) => transactions.push(transaction),
                Err(reason) => {
                    debug!("Skipping line {}: {reason}", record.line);
                    skipped.push(SkippedRow { line: record.line, reason });
                }
            }
        }

        if transactions.is_empty() {
            return Err(IngestionError::NoValidRows { skipped: skipped.len() });
        }

        info!("Imported {} transactions, skipped {} rows", transactions.len(), skipped.len());

        Ok(Import {
            ledger: Ledger::new(transactions),
            dialect: statement.dialect,
            mapping: statement.mapping,
            skipped
        })
    }
}

/// Builds a ledger from raw statement bytes with the default rule table.
pub fn ingest(bytes: &[u8]) -> Result<Ledger, IngestionError> {
    Importer::new().import(bytes).map(|import| import.ledger)
}
