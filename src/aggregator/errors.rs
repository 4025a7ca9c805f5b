use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AggregationError {
    #[error("Aggregation error: the ledger has no dated transactions")]
    NoDateData
}
