use crate::schema::CanonicalField;
use crate::types::AmountError;
use thiserror::Error;

/// Fatal failure of a single statement import.
#[derive(Debug, Error)]
pub enum IngestionError {
    #[error("Unreadable file: no supported encoding and delimiter produced a table with recognizable headers")]
    UnreadableFile,
    #[error("Missing required columns [{}]; detected headers: {headers:?}", join_fields(.missing))]
    MissingColumns {
        missing: Vec<CanonicalField>,
        headers: Vec<String>
    },
    #[error("No valid rows: all {skipped} data rows were discarded")]
    NoValidRows {
        skipped: usize
    },
    #[error("Could not read statement: {0}")]
    Io(#[from] std::io::Error)
}

/// Reason a single data row was discarded. Never fatal to the import.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("{0}")]
    InvalidAmount(#[from] AmountError),
    #[error("Invalid or missing date '{0}'")]
    InvalidDate(String)
}

fn join_fields(fields: &[CanonicalField]) -> String {
    fields.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
