use rust_decimal::Decimal;

use crate::categorizer::Categorizer;
use crate::models::{RowError, Transaction};
use crate::parser::dates::parse_date;
use crate::schema::{AmountColumns, ColumnMapping, RawRecord};
use crate::types::{parse_amount, AmountError, DecimalConvention};

/// Turns raw records of one statement into transactions.
pub struct RowParser<'a> {
    mapping: &'a ColumnMapping,
    convention: DecimalConvention,
    categorizer: &'a Categorizer
}

impl<'a> RowParser<'a> {
    pub fn new(mapping: &'a ColumnMapping, convention: DecimalConvention, categorizer: &'a Categorizer) -> Self {
        Self {
            mapping,
            convention,
            categorizer
        }
    }

    /// Parses and categorizes one record.
    ///
    /// # Errors
    /// Returns `RowError` when the amount or the date cannot be read. A blank
    /// description is not an error.
    pub fn parse(&self, record: &RawRecord) -> Result<Transaction, RowError> {
        let amount = self.amount(record)?;

        let raw_date = record.get(self.mapping.date.index).unwrap_or_default();
        let date = parse_date(raw_date).ok_or_else(|| RowError::InvalidDate(raw_date.to_string()))?;

        let description = record.get(self.mapping.description.index).unwrap_or_default();
        let category = self.categorizer.categorize(description);

        Ok(Transaction::new(date, description, amount, category))
    }

    fn amount(&self, record: &RawRecord) -> Result<Decimal, RowError> {
        match &self.mapping.amount {
            AmountColumns::Single(column) => {
                let raw = record.get(column.index).unwrap_or_default();
                Ok(parse_amount(raw, self.convention)?)
            }
            AmountColumns::Split { credit, debit } => {
                let credit = self.optional_amount(record.get(credit.index))?;
                let debit = self.optional_amount(record.get(debit.index))?;
                credit.checked_sub(debit)
                    .ok_or_else(|| AmountError::InvalidFormat(format!("{credit} - {debit} is out of range")).into())
            }
        }
    }

    fn optional_amount(&self, raw: Option<&str>) -> Result<Decimal, AmountError> {
        match parse_amount(raw.unwrap_or_default(), self.convention) {
            Err(AmountError::Empty) => Ok(Decimal::ZERO),
            result => result
        }
    }
}
