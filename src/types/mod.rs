mod amount;
mod errors;
mod month;
mod text;

pub use amount::{parse_amount, DecimalConvention};
pub use errors::{AmountError, MonthError};
pub use month::YearMonth;
pub use text::{fold_text, normalize_header};
