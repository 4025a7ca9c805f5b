mod columns;
mod dialect;

use tracing::info;

use crate::models::IngestionError;

pub use columns::{is_recognized, AmountColumns, CanonicalField, Column, ColumnMapping};
pub use dialect::{Dialect, Encoding, RawRecord, Table};

/// A decoded statement together with everything needed to parse its rows.
#[derive(Debug, Clone)]
pub struct ResolvedStatement {
    pub dialect: Dialect,
    pub mapping: ColumnMapping,
    pub table: Table
}

/// Discovers the dialect and column mapping of a raw statement.
///
/// The same bytes always resolve to the same dialect and mapping.
///
/// # Errors
/// - `IngestionError::UnreadableFile` when no encoding and delimiter pair yields
///   data rows under a recognizable header.
/// - `IngestionError::MissingColumns` when the required fields cannot be mapped.
pub fn resolve(bytes: &[u8]) -> Result<ResolvedStatement, IngestionError> {
    let (encoding, delimiter, mut table) = dialect::sniff_table(bytes)
        .ok_or(IngestionError::UnreadableFile)?;

    let mapping = ColumnMapping::resolve(&table.headers)?;

    if delimiter == b',' {
        if let AmountColumns::Single(amount) = &mapping.amount {
            rejoin_split_amounts(&mut table, amount.index);
        }
    }

    let cells = table.records.iter()
        .flat_map(|record| mapping.amount_columns().into_iter().filter_map(move |column| record.get(column.index)));
    let decimal = dialect::detect_decimal_convention(cells, delimiter);

    let dialect = Dialect { encoding, delimiter, decimal };

    info!("Resolved statement dialect {dialect:?} with columns {mapping:?}");

    Ok(ResolvedStatement { dialect, mapping, table })
}

/// Rejoins amounts such as `-45,90` that were written unquoted into a
/// comma-delimited file and therefore split across two fields.
///
/// Only records with exactly one field more than the header are touched, and
/// only when the amount ends in a digit and the next field is a one or two
/// digit fraction. Trailing delimiters and commas inside descriptions are left
/// alone.
fn rejoin_split_amounts(table: &mut Table, amount_index: usize) {
    let expected = table.headers.len();

    for record in table.records.iter_mut() {
        if record.fields.len() != expected + 1 || amount_index + 1 >= record.fields.len() {
            continue;
        }

        if is_split_amount(&record.fields[amount_index], &record.fields[amount_index + 1]) {
            let fraction = record.fields.remove(amount_index + 1);
            record.fields[amount_index] = format!("{},{}", record.fields[amount_index], fraction);
        }
    }
}

fn is_split_amount(whole: &str, fraction: &str) -> bool {
    let whole_ends_in_digit = whole.chars().last().is_some_and(|c| c.is_ascii_digit());
    let fraction_is_cents = (1..=2).contains(&fraction.len()) && fraction.bytes().all(|b| b.is_ascii_digit());

    whole_ends_in_digit && fraction_is_cents
}
