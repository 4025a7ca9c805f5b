use crate::types::errors::AmountError;
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;

//NOTE: "R$" has to be stripped before "$" or a stray "R" is left behind
const CURRENCY_MARKERS: [&str; 4] = ["R$", "$", "€", "£"];

/// Which character separates the fractional part of an amount.
///
/// The other one of the pair is treated as the thousands separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DecimalConvention {
    /// `1.234,56`
    Comma,
    /// `1,234.56`
    Dot
}

impl DecimalConvention {
    pub fn decimal_separator(self) -> char {
        match self {
            DecimalConvention::Comma => ',',
            DecimalConvention::Dot => '.'
        }
    }

    pub fn thousands_separator(self) -> char {
        match self {
            DecimalConvention::Comma => '.',
            DecimalConvention::Dot => ','
        }
    }
}

/// Parses a locale formatted currency amount into a signed decimal.
///
/// Whitespace and currency markers are ignored. Negative values may be written
/// with a leading `-`, a trailing `-` or wrapped in parentheses.
pub fn parse_amount(raw: &str, convention: DecimalConvention) -> Result<Decimal, AmountError> {
    let mut value: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    for marker in CURRENCY_MARKERS {
        value = value.replace(marker, "");
    }

    if value.is_empty() {
        return Err(AmountError::Empty);
    }

    let mut negative = false;

    if let Some(inner) = value.strip_prefix('(').and_then(|v| v.strip_suffix(')')) {
        negative = true;
        value = inner.to_string();
    } else if let Some(inner) = value.strip_suffix('-') {
        negative = true;
        value = inner.to_string();
    }

    let normalized = value
        .replace(convention.thousands_separator(), "")
        .replace(convention.decimal_separator(), ".");

    let amount = Decimal::from_str(&normalized)
        .map_err(|_| AmountError::InvalidFormat(raw.trim().to_string()))?;

    if negative {
        Ok(-amount.abs())
    } else {
        Ok(amount)
    }
}
