use {
    async_trait::async_trait,
    reqwest::Client,
    serde::Deserialize,
    std::time::Duration,
    thiserror::Error,
    uuid::Uuid,
};

use crate::{
    config::API,
    models::{CoinFilter, MarketCoin, SelectableItem},
};

/// The only modeled failure kind. Every failure is scoped to the single
/// request that produced it and recoverable by a user-initiated retry.
#[derive(Debug, Clone, Error)]
pub enum RequestError {
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("network error: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

impl RequestError {
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::Status { status: 429, .. })
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// CoinGecko error envelope, e.g.
/// `{"status":{"error_code":429,"error_message":"You've exceeded ..."}}`.
#[derive(Deserialize)]
struct ErrorEnvelope {
    status: ErrorStatus,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ErrorStatus {
    error_message: String,
}

fn status_error(status: u16, body: &str) -> RequestError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.status.error_message)
        .unwrap_or_else(|_| body.trim().to_string());
    RequestError::Status { status, message }
}

/// Abstract interface over the three read operations the screener issues.
/// All operations are idempotent and side-effect-free from the caller's
/// viewpoint.
#[async_trait]
pub trait MarketDataApi: Send + Sync {
    /// Market listings for the given filter, ordered by descending market
    /// cap upstream.
    async fn coin_markets(&self, filter: &CoinFilter) -> Result<Vec<MarketCoin>, RequestError>;

    /// Category list as dropdown items.
    async fn category_list(&self) -> Result<Vec<SelectableItem>, RequestError>;

    /// Supported quote currencies as dropdown items. Upstream only returns
    /// bare codes; ids are synthesized locally.
    async fn supported_currencies(&self) -> Result<Vec<SelectableItem>, RequestError>;
}

pub struct CoinGeckoClient {
    http: Client,
    base_url: String,
    per_page: u32,
}

impl CoinGeckoClient {
    pub fn new(base_url: Option<String>, per_page: Option<u32>) -> Result<Self, RequestError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(API.request_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.unwrap_or_else(|| API.base_url.to_string()),
            per_page: per_page.unwrap_or(API.per_page),
        })
    }

    fn markets_query(&self, filter: &CoinFilter) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("vs_currency", filter.currency_code.to_lowercase()),
            ("order", API.order.to_string()),
            ("per_page", self.per_page.to_string()),
            ("page", API.page.to_string()),
            ("sparkline", API.sparkline.to_string()),
        ];
        if let Some(category) = &filter.category_id {
            query.push(("category", category.clone()));
        }
        query
    }

    async fn get_json<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T, RequestError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path);
        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = status_error(status.as_u16(), &body);
            log::warn!("GET {path} failed: {err}");
            return Err(err);
        }
        Ok(response.json().await?)
    }
}

#[derive(Deserialize)]
struct CategoryEntry {
    category_id: String,
    name: String,
}

#[async_trait]
impl MarketDataApi for CoinGeckoClient {
    async fn coin_markets(&self, filter: &CoinFilter) -> Result<Vec<MarketCoin>, RequestError> {
        self.get_json("coins/markets", &self.markets_query(filter))
            .await
    }

    async fn category_list(&self) -> Result<Vec<SelectableItem>, RequestError> {
        let entries: Vec<CategoryEntry> = self.get_json("coins/categories/list", &[]).await?;
        Ok(entries
            .into_iter()
            .map(|entry| SelectableItem::new(entry.category_id, entry.name))
            .collect())
    }

    async fn supported_currencies(&self) -> Result<Vec<SelectableItem>, RequestError> {
        let codes: Vec<String> = self.get_json("simple/supported_vs_currencies", &[]).await?;
        Ok(codes.iter().map(|code| currency_item(code)).collect())
    }
}

/// Currency codes arrive as bare strings; synthesize a stable id (UUIDv5
/// over the code) so they can feed the dropdown like any other item list.
pub(crate) fn currency_item(code: &str) -> SelectableItem {
    let id = Uuid::new_v5(&Uuid::NAMESPACE_OID, code.as_bytes());
    SelectableItem::new(id.to_string(), code.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::{CoinGeckoClient, currency_item, status_error};
    use crate::models::CoinFilter;

    fn client() -> CoinGeckoClient {
        CoinGeckoClient::new(None, None).unwrap()
    }

    #[test]
    fn markets_query_without_category() {
        let filter = CoinFilter {
            currency_code: "USD".to_string(),
            category_id: None,
        };
        let query = client().markets_query(&filter);
        assert_eq!(
            query,
            vec![
                ("vs_currency", "usd".to_string()),
                ("order", "market_cap_desc".to_string()),
                ("per_page", "1000".to_string()),
                ("page", "1".to_string()),
                ("sparkline", "false".to_string()),
            ]
        );
    }

    #[test]
    fn markets_query_appends_category_when_set() {
        let filter = CoinFilter {
            currency_code: "EUR".to_string(),
            category_id: Some("layer-1".to_string()),
        };
        let query = client().markets_query(&filter);
        assert_eq!(query.last(), Some(&("category", "layer-1".to_string())));
        assert_eq!(query[0], ("vs_currency", "eur".to_string()));
    }

    #[test]
    fn status_error_reads_the_coingecko_envelope() {
        let body = r#"{"status":{"error_code":429,"error_message":"You've exceeded the Rate Limit."}}"#;
        let err = status_error(429, body);
        assert!(err.is_rate_limited());
        assert_eq!(
            err.to_string(),
            "request failed with status 429: You've exceeded the Rate Limit."
        );
    }

    #[test]
    fn status_error_falls_back_to_the_raw_body() {
        let err = status_error(503, "upstream unavailable\n");
        assert!(!err.is_rate_limited());
        assert_eq!(
            err.to_string(),
            "request failed with status 503: upstream unavailable"
        );
    }

    #[test]
    fn currency_ids_are_stable_and_labels_uppercased() {
        let first = currency_item("eur");
        let second = currency_item("eur");
        assert_eq!(first.id, second.id);
        assert_eq!(first.label, "EUR");
        assert_ne!(first.id, currency_item("usd").id);
    }
}
