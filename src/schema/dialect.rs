use crate::schema::columns::is_recognized;
use crate::types::DecimalConvention;
use csv::{ReaderBuilder, Trim};
use serde::{Serialize, Serializer};
use tracing::trace;

/// Encodings tried in order. ISO-8859-1 is the same mapping as Latin-1.
const ENCODINGS: [Encoding; 2] = [Encoding::Utf8, Encoding::Latin1];
const DELIMITERS: [u8; 3] = [b',', b';', b'\t'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Encoding {
    Utf8,
    Latin1
}

impl Encoding {
    /// Returns `None` when `bytes` are not valid in this encoding.
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            Encoding::Utf8 => std::str::from_utf8(bytes)
                .ok()
                .map(|text| text.strip_prefix('\u{feff}').unwrap_or(text).to_string()),
            //NOTE: Every Latin-1 byte maps onto the Unicode code point of the same value
            Encoding::Latin1 => Some(bytes.iter().map(|&byte| byte as char).collect())
        }
    }
}

/// How a source file was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dialect {
    pub encoding: Encoding,
    #[serde(serialize_with = "serialize_delimiter")]
    pub delimiter: u8,
    pub decimal: DecimalConvention
}

/// One data row as read from the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// 1-based line in the source file.
    pub line: usize,
    pub fields: Vec<String>
}

impl RawRecord {
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }
}

/// Header row plus data rows of a decoded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub records: Vec<RawRecord>
}

/// Tries every encoding and delimiter in priority order and returns the first
/// table that has data rows and at least one recognizable header.
pub(crate) fn sniff_table(bytes: &[u8]) -> Option<(Encoding, u8, Table)> {
    for encoding in ENCODINGS {
        let Some(text) = encoding.decode(bytes) else {
            trace!("Statement is not valid {encoding:?}");
            continue;
        };

        for delimiter in DELIMITERS {
            match read_table(&text, delimiter) {
                Some(table) if !table.records.is_empty() && table.headers.iter().any(|header| is_recognized(header)) => {
                    return Some((encoding, delimiter, table));
                }
                _ => trace!("No usable table with {encoding:?} and delimiter {:?}", delimiter as char)
            }
        }
    }

    None
}

fn read_table(text: &str, delimiter: u8) -> Option<Table> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers().ok()?.iter().map(str::to_string).collect();
    let mut records = Vec::new();

    for result in reader.records() {
        match result {
            Ok(record) => records.push(RawRecord {
                line: record.position().map_or(0, |position| position.line() as usize),
                fields: record.iter().map(str::to_string).collect()
            }),
            Err(error) => trace!("Unreadable record: {error}")
        }
    }

    Some(Table { headers, records })
}

/// Picks the decimal convention by majority vote over money cells.
///
/// A cell votes when its last `,` or `.` is followed by one or two digits.
/// Without a majority, comma-delimited files default to a dot decimal and
/// every other delimiter to a comma decimal.
pub(crate) fn detect_decimal_convention<'a, I>(cells: I, delimiter: u8) -> DecimalConvention
where
    I: IntoIterator<Item = &'a str>,
{
    let (mut comma_votes, mut dot_votes) = (0usize, 0usize);

    for cell in cells {
        match vote(cell) {
            Some(DecimalConvention::Comma) => comma_votes += 1,
            Some(DecimalConvention::Dot) => dot_votes += 1,
            None => {}
        }
    }

    if comma_votes > dot_votes {
        DecimalConvention::Comma
    } else if dot_votes > comma_votes {
        DecimalConvention::Dot
    } else if delimiter == b',' {
        DecimalConvention::Dot
    } else {
        DecimalConvention::Comma
    }
}

fn vote(cell: &str) -> Option<DecimalConvention> {
    let cell = cell.trim().trim_end_matches([')', '-']);
    let position = cell.rfind([',', '.'])?;
    let fraction = &cell[position + 1..];

    if fraction.is_empty() || fraction.len() > 2 || !fraction.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    match cell.as_bytes()[position] {
        b',' => Some(DecimalConvention::Comma),
        _ => Some(DecimalConvention::Dot)
    }
}

fn serialize_delimiter<S>(delimiter: &u8, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_char(*delimiter as char)
}
