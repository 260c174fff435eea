/// Static configuration for the CoinGecko REST endpoints.
pub struct ApiConfig {
    pub base_url: &'static str,
    /// Listing sort order requested upstream.
    pub order: &'static str,
    pub per_page: u32,
    pub page: u32,
    pub sparkline: bool,
    pub request_timeout_secs: u64,
}

pub static API: ApiConfig = ApiConfig {
    base_url: "https://api.coingecko.com/api/v3",
    order: "market_cap_desc",
    per_page: 1000,
    page: 1,
    sparkline: false,
    request_timeout_secs: 30,
};
