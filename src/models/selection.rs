use serde::{Deserialize, Serialize};

use crate::utils::currency_symbol;

/// The (id, label) pair the searchable dropdown operates over. Identity is
/// `id`; `label` is the human-readable, searchable text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectableItem {
    pub id: String,
    pub label: String,
}

impl SelectableItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Quote currency with its display glyph. The glyph is derived from the code
/// by static lookup and may be absent for unrecognized codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    pub name: String,
    pub symbol: Option<&'static str>,
}

impl Currency {
    pub fn from_code(code: &str) -> Self {
        Self {
            name: code.to_uppercase(),
            symbol: currency_symbol(code),
        }
    }

    /// Glyph for display, empty when the code has no known symbol.
    pub fn glyph(&self) -> &'static str {
        self.symbol.unwrap_or("")
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::from_code("USD")
    }
}

/// The (currency, category) pair that determines which listing request is
/// active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinFilter {
    pub currency_code: String,
    pub category_id: Option<String>,
}
