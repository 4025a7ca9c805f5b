use super::{parse_date, RowParser};

use std::str::FromStr;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::categorizer::Categorizer;
use crate::models::{Category, RowError, TransactionKind, NO_DESCRIPTION};
use crate::schema::{ColumnMapping, RawRecord};
use crate::types::{AmountError, DecimalConvention};

fn create_record(fields: &[&str]) -> RawRecord {
    RawRecord {
        line: 2,
        fields: fields.iter().map(|field| field.to_string()).collect()
    }
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| anyhow!("invalid test date"))
}

fn single_amount_mapping() -> Result<ColumnMapping> {
    Ok(ColumnMapping::resolve(&["Data".to_string(), "Descricao".to_string(), "Valor".to_string()])?)
}

fn split_amount_mapping() -> Result<ColumnMapping> {
    Ok(ColumnMapping::resolve(&["Date".to_string(), "Description".to_string(), "Credit".to_string(), "Debit".to_string()])?)
}

#[test]
fn test_dates_prefer_day_before_month() -> Result<()> {
    assert_eq!(parse_date("01/03/2024"), Some(date(2024, 3, 1)?));
    assert_eq!(parse_date("05-03-2024"), Some(date(2024, 3, 5)?));
    assert_eq!(parse_date("05.03.2024"), Some(date(2024, 3, 5)?));
    assert_eq!(parse_date("05/03/24"), Some(date(2024, 3, 5)?));

    Ok(())
}

#[test]
fn test_dates_accept_iso_and_date_times() -> Result<()> {
    assert_eq!(parse_date("2024-03-01"), Some(date(2024, 3, 1)?));
    assert_eq!(parse_date("2024/03/01"), Some(date(2024, 3, 1)?));
    assert_eq!(parse_date(" 2024-03-01 13:45:00 "), Some(date(2024, 3, 1)?));
    assert_eq!(parse_date("2024-03-01T13:45:00"), Some(date(2024, 3, 1)?));
    assert_eq!(parse_date("01/03/2024 13:45"), Some(date(2024, 3, 1)?));
    assert_eq!(parse_date("2024-03-01 10:30"), Some(date(2024, 3, 1)?));
    assert_eq!(parse_date("2024-03-01T10:30"), Some(date(2024, 3, 1)?));

    Ok(())
}

#[test]
fn test_dates_fall_back_to_month_first_only_when_needed() -> Result<()> {
    assert_eq!(parse_date("12/31/2024"), Some(date(2024, 12, 31)?));
    assert_eq!(parse_date("12/11/2024"), Some(date(2024, 11, 12)?));

    Ok(())
}

#[test]
fn test_dates_reject_garbage() {
    assert_eq!(parse_date(""), None);
    assert_eq!(parse_date("ontem"), None);
    assert_eq!(parse_date("31/02/2024"), None);
    assert_eq!(parse_date("32/13/2024"), None);
}

#[test]
fn test_single_amount_row_is_parsed_and_categorized() -> Result<()> {
    let mapping = single_amount_mapping()?;
    let categorizer = Categorizer::default();
    let parser = RowParser::new(&mapping, DecimalConvention::Comma, &categorizer);

    let transaction = parser.parse(&create_record(&["01/03/2024", "Ifood Lanche", "-45,90"]))?;

    assert_eq!(transaction.date(), date(2024, 3, 1)?);
    assert_eq!(transaction.description(), "Ifood Lanche");
    assert_eq!(transaction.amount(), Decimal::from_str("-45.90")?);
    assert_eq!(transaction.category(), Category::Food);
    assert_eq!(transaction.kind(), TransactionKind::Expense);

    Ok(())
}

#[test]
fn test_split_amount_row_subtracts_debit_from_credit() -> Result<()> {
    let mapping = split_amount_mapping()?;
    let categorizer = Categorizer::default();
    let parser = RowParser::new(&mapping, DecimalConvention::Dot, &categorizer);

    let income = parser.parse(&create_record(&["2024-03-01", "Transfer", "100", "0"]))?;
    let expense = parser.parse(&create_record(&["2024-03-02", "Uber", "", "23.10"]))?;
    let short = parser.parse(&create_record(&["2024-03-03", "Deposit", "50.00"]))?;

    assert_eq!(income.amount(), Decimal::from(100));
    assert_eq!(income.kind(), TransactionKind::Income);
    assert_eq!(expense.amount(), Decimal::from_str("-23.10")?);
    assert_eq!(expense.category(), Category::Transport);
    assert_eq!(short.amount(), Decimal::from(50));

    Ok(())
}

#[test]
fn test_blank_description_is_replaced_not_skipped() -> Result<()> {
    let mapping = single_amount_mapping()?;
    let categorizer = Categorizer::default();
    let parser = RowParser::new(&mapping, DecimalConvention::Comma, &categorizer);

    let transaction = parser.parse(&create_record(&["01/03/2024", "", "10,00"]))?;
    let truncated = parser.parse(&create_record(&["01/03/2024"]));

    assert_eq!(transaction.description(), NO_DESCRIPTION);
    assert_eq!(transaction.category(), Category::Other);
    assert_eq!(truncated, Err(RowError::InvalidAmount(AmountError::Empty)));

    Ok(())
}

#[test]
fn test_bad_rows_are_rejected_with_a_reason() -> Result<()> {
    let mapping = single_amount_mapping()?;
    let categorizer = Categorizer::default();
    let parser = RowParser::new(&mapping, DecimalConvention::Comma, &categorizer);

    let bad_amount = parser.parse(&create_record(&["01/03/2024", "Lanche", "dez reais"]));
    let bad_date = parser.parse(&create_record(&["sometime", "Lanche", "-10,00"]));
    let missing_date = parser.parse(&create_record(&["", "Lanche", "-10,00"]));

    assert!(matches!(bad_amount, Err(RowError::InvalidAmount(AmountError::InvalidFormat(_)))));
    assert_eq!(bad_date, Err(RowError::InvalidDate("sometime".to_string())));
    assert_eq!(missing_date, Err(RowError::InvalidDate(String::new())));

    Ok(())
}

#[test]
fn test_split_amount_with_garbage_credit_is_rejected() -> Result<()> {
    let mapping = split_amount_mapping()?;
    let categorizer = Categorizer::default();
    let parser = RowParser::new(&mapping, DecimalConvention::Dot, &categorizer);

    let result = parser.parse(&create_record(&["2024-03-01", "Transfer", "n/a", ""]));

    assert!(matches!(result, Err(RowError::InvalidAmount(_))));

    Ok(())
}

#[test]
fn test_split_amount_out_of_range_is_rejected() -> Result<()> {
    let mapping = split_amount_mapping()?;
    let categorizer = Categorizer::default();
    let parser = RowParser::new(&mapping, DecimalConvention::Dot, &categorizer);

    let max = Decimal::MAX.to_string();
    let result = parser.parse(&create_record(&["2024-03-01", "Transfer", &max, &format!("-{max}")]));

    assert!(matches!(result, Err(RowError::InvalidAmount(AmountError::InvalidFormat(_)))));

    Ok(())
}
