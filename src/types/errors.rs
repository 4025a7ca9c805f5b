use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("Amount error: value is empty")]
    Empty,
    #[error("Amount error: invalid value '{0}'")]
    InvalidFormat(String)
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MonthError {
    #[error("Month error: expected YYYY-MM, got '{0}'")]
    InvalidFormat(String)
}
