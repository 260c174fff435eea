mod coin;
mod selection;

pub use coin::MarketCoin;
pub use selection::{CoinFilter, Currency, SelectableItem};
