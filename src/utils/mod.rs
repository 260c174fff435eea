mod currencies;
mod format;

pub use currencies::currency_symbol;
pub use format::{format_amount, format_percent};
