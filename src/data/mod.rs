mod client;
mod worker;

pub use client::{CoinGeckoClient, MarketDataApi, RequestError};
pub use worker::{ApiCommand, ApiEvent, QueryWorker};
