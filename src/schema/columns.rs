use crate::models::IngestionError;
use crate::types::normalize_header;
use serde::Serialize;
use std::fmt;
use std::fmt::{Display, Formatter};

const DATE_ALIASES: &[&str] = &["data", "date", "data_lancamento", "data_movimento", "transaction_date", "posting_date", "dt"];
const DESCRIPTION_ALIASES: &[&str] = &["descricao", "description", "historico", "lancamento", "memo", "details", "payee", "narrative"];
const AMOUNT_ALIASES: &[&str] = &["valor", "value", "amount", "montante", "quantia", "valor_r"];
const CREDIT_ALIASES: &[&str] = &["credito", "credit", "entrada", "deposit", "money_in"];
const DEBIT_ALIASES: &[&str] = &["debito", "debit", "saida", "withdrawal", "money_out"];

/// Normalized target of header matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalField {
    Date,
    Description,
    Amount,
    Credit,
    Debit
}

impl CanonicalField {
    pub const ALL: [CanonicalField; 5] = [
        CanonicalField::Date,
        CanonicalField::Description,
        CanonicalField::Amount,
        CanonicalField::Credit,
        CanonicalField::Debit
    ];

    /// Normalized header names accepted for this field, in priority order.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            CanonicalField::Date => DATE_ALIASES,
            CanonicalField::Description => DESCRIPTION_ALIASES,
            CanonicalField::Amount => AMOUNT_ALIASES,
            CanonicalField::Credit => CREDIT_ALIASES,
            CanonicalField::Debit => DEBIT_ALIASES
        }
    }
}

impl Display for CanonicalField {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            CanonicalField::Date => "date",
            CanonicalField::Description => "description",
            CanonicalField::Amount => "amount",
            CanonicalField::Credit => "credit",
            CanonicalField::Debit => "debit"
        };

        formatter.write_str(name)
    }
}

/// A source column: its position in each record and its header as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub index: usize,
    pub header: String
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountColumns {
    /// One signed amount column.
    Single(Column),
    /// Separate unsigned columns; the amount is `credit - debit`.
    Split {
        credit: Column,
        debit: Column
    }
}

/// Association of canonical fields to the columns found in one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnMapping {
    pub date: Column,
    pub description: Column,
    pub amount: AmountColumns
}

impl ColumnMapping {
    /// Matches `headers` against the alias tables.
    ///
    /// A single amount column is preferred over a credit/debit pair.
    ///
    /// # Errors
    /// Returns `IngestionError::MissingColumns` naming the unresolved fields and
    /// the headers as they were found.
    pub fn resolve(headers: &[String]) -> Result<Self, IngestionError> {
        let normalized: Vec<String> = headers.iter().map(|header| normalize_header(header)).collect();

        let find = |field: CanonicalField| -> Option<Column> {
            field.aliases().iter().find_map(|alias| {
                normalized.iter().position(|header| header == alias).map(|index| Column {
                    index,
                    header: headers[index].clone()
                })
            })
        };

        let date = find(CanonicalField::Date);
        let description = find(CanonicalField::Description);
        let amount = find(CanonicalField::Amount);
        let credit = find(CanonicalField::Credit);
        let debit = find(CanonicalField::Debit);

        let mut missing = Vec::new();

        if date.is_none() {
            missing.push(CanonicalField::Date);
        }

        if description.is_none() {
            missing.push(CanonicalField::Description);
        }

        let amount = match (amount, credit, debit) {
            (Some(amount), _, _) => Some(AmountColumns::Single(amount)),
            (None, Some(credit), Some(debit)) => Some(AmountColumns::Split { credit, debit }),
            (None, Some(_), None) => {
                missing.push(CanonicalField::Debit);
                None
            }
            (None, None, Some(_)) => {
                missing.push(CanonicalField::Credit);
                None
            }
            (None, None, None) => {
                missing.push(CanonicalField::Amount);
                None
            }
        };

        match (date, description, amount) {
            (Some(date), Some(description), Some(amount)) => Ok(Self { date, description, amount }),
            _ => Err(IngestionError::MissingColumns {
                missing,
                headers: headers.to_vec()
            })
        }
    }

    /// Columns whose cells hold money values.
    pub fn amount_columns(&self) -> Vec<&Column> {
        match &self.amount {
            AmountColumns::Single(amount) => vec![amount],
            AmountColumns::Split { credit, debit } => vec![credit, debit]
        }
    }
}

/// Whether `header` matches an alias of any canonical field.
pub fn is_recognized(header: &str) -> bool {
    let normalized = normalize_header(header);

    CanonicalField::ALL.iter().any(|field| field.aliases().contains(&normalized.as_str()))
}
