mod dates;
mod row_parser;
#[cfg(test)]
mod tests;

pub use dates::parse_date;
pub use row_parser::RowParser;
