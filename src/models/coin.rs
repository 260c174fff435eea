use {
    chrono::{DateTime, Utc},
    serde::{Deserialize, Deserializer, Serialize},
};

/// One tradable asset as reported by the markets endpoint.
///
/// Treated as a read-only snapshot: never mutated client-side, refetched
/// wholesale whenever the active filter changes. The four fields the table
/// always renders (`current_price`, `price_change_24h`,
/// `price_change_percentage_24h`, `market_cap_change_percentage_24h`) decode
/// missing or null upstream values to `0.0`; every other optional numeric
/// stays an `Option` and is handled at render time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketCoin {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub image: String,
    #[serde(deserialize_with = "null_to_zero")]
    pub current_price: f64,
    pub market_cap: Option<f64>,
    pub market_cap_rank: Option<u32>,
    pub fully_diluted_valuation: Option<f64>,
    pub total_volume: Option<f64>,
    pub high_24h: Option<f64>,
    pub low_24h: Option<f64>,
    #[serde(deserialize_with = "null_to_zero")]
    pub price_change_24h: f64,
    #[serde(deserialize_with = "null_to_zero")]
    pub price_change_percentage_24h: f64,
    pub market_cap_change_24h: Option<f64>,
    #[serde(deserialize_with = "null_to_zero")]
    pub market_cap_change_percentage_24h: f64,
    pub circulating_supply: Option<f64>,
    pub total_supply: Option<f64>,
    pub max_supply: Option<f64>,
    pub ath: Option<f64>,
    pub ath_change_percentage: Option<f64>,
    pub ath_date: Option<DateTime<Utc>>,
    pub atl: Option<f64>,
    pub atl_change_percentage: Option<f64>,
    pub atl_date: Option<DateTime<Utc>>,
    pub last_updated: Option<DateTime<Utc>>,
}

fn null_to_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::MarketCoin;

    #[test]
    fn missing_price_fields_normalize_to_zero() {
        let coin: MarketCoin =
            serde_json::from_str(r#"{"id":"bitcoin","symbol":"btc","name":"Bitcoin"}"#).unwrap();
        assert_eq!(coin.current_price, 0.0);
        assert_eq!(coin.price_change_24h, 0.0);
        assert_eq!(coin.price_change_percentage_24h, 0.0);
        assert_eq!(coin.market_cap_change_percentage_24h, 0.0);
    }

    #[test]
    fn null_price_fields_normalize_to_zero() {
        let payload = r#"{
            "id": "mooncoin",
            "symbol": "moon",
            "name": "Mooncoin",
            "current_price": null,
            "price_change_24h": null,
            "price_change_percentage_24h": null,
            "market_cap_change_percentage_24h": null,
            "market_cap": null,
            "market_cap_rank": null
        }"#;
        let coin: MarketCoin = serde_json::from_str(payload).unwrap();
        assert_eq!(coin.current_price, 0.0);
        assert_eq!(coin.price_change_24h, 0.0);
        assert_eq!(coin.price_change_percentage_24h, 0.0);
        assert_eq!(coin.market_cap_change_percentage_24h, 0.0);
        assert!(coin.market_cap.is_none());
        assert!(coin.market_cap_rank.is_none());
    }

    #[test]
    fn full_payload_decodes() {
        let payload = r#"{
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "image": "https://assets.coingecko.com/coins/images/1/large/bitcoin.png",
            "current_price": 21833,
            "market_cap": 421543304770,
            "market_cap_rank": 1,
            "fully_diluted_valuation": 458899517378,
            "total_volume": 32674031120,
            "high_24h": 21861,
            "low_24h": 21471,
            "price_change_24h": 295.29,
            "price_change_percentage_24h": 1.37106,
            "market_cap_change_24h": 5887928195,
            "market_cap_change_percentage_24h": 1.41654,
            "circulating_supply": 19290518,
            "total_supply": 21000000,
            "max_supply": 21000000,
            "ath": 69045,
            "ath_change_percentage": -68.35045,
            "ath_date": "2021-11-10T14:24:11.849Z",
            "atl": 67.81,
            "atl_change_percentage": 32126.33864,
            "atl_date": "2013-07-06T00:00:00.000Z",
            "roi": null,
            "last_updated": "2023-02-14T10:43:59.903Z"
        }"#;
        let coin: MarketCoin = serde_json::from_str(payload).unwrap();
        assert_eq!(coin.current_price, 21833.0);
        assert_eq!(coin.market_cap_rank, Some(1));
        assert_eq!(coin.price_change_percentage_24h, 1.37106);
        assert!(coin.ath_date.is_some());
        assert!(coin.last_updated.is_some());
    }
}
