pub const ICON_SEARCH: &str = "🔍";
pub const ICON_CLEAR: &str = "❌";
pub const ICON_CARET_DOWN: &str = "⏷";
pub const ICON_CARET_UP: &str = "⏶";

/// All user-facing strings in one place.
pub struct UiText {
    pub loading: &'static str,
    pub search_hint: &'static str,
    pub category_label: &'static str,
    pub currency_label: &'static str,
    pub category_placeholder: &'static str,
    pub currency_placeholder: &'static str,
    pub retry: &'static str,
    pub reload: &'static str,
    pub error_title_rate_limit: &'static str,
    pub error_title_generic: &'static str,
    pub error_hint: &'static str,
    pub details: &'static str,
    pub back: &'static str,
    pub detail_missing: &'static str,
    pub col_rank: &'static str,
    pub col_logo: &'static str,
    pub col_symbol: &'static str,
    pub col_name: &'static str,
    pub col_price: &'static str,
    pub col_change_24h: &'static str,
    pub col_market_cap: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    loading: "Loading...",
    search_hint: "Search...",
    category_label: "Category",
    currency_label: "Currency",
    category_placeholder: "Category",
    currency_placeholder: "Currency",
    retry: "Retry",
    reload: "Reload",
    error_title_rate_limit: "Request limit!",
    error_title_generic: "Request failed",
    error_hint: "Wait for 5-10 minutes and reload.",
    details: "Details",
    back: "⏴ All coins",
    detail_missing: "is not in the current snapshot",
    col_rank: "Rank",
    col_logo: "Logo",
    col_symbol: "Symbol",
    col_name: "Name",
    col_price: "Price",
    col_change_24h: "Exchange 24h, %",
    col_market_cap: "Market Cap",
};
