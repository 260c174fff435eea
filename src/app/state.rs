use crate::{
    data::{ApiCommand, ApiEvent, RequestError},
    models::{CoinFilter, Currency, MarketCoin, SelectableItem},
    ui::SearchDropdown,
};

/// Which screen is showing. The listing screen is the landing route.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) enum Route {
    #[default]
    Listing,
    CoinDetail {
        symbol: String,
    },
}

/// Lifecycle of one remote query. Each of the three queries toggles its own
/// state independently of the others.
#[derive(Debug, Clone)]
pub(crate) enum QueryState<T> {
    Loading,
    Ready(T),
    Failed(RequestError),
}

impl<T> QueryState<T> {
    pub(crate) fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub(crate) fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub(crate) fn error(&self) -> Option<&RequestError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> From<Result<T, RequestError>> for QueryState<T> {
    fn from(result: Result<T, RequestError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(err),
        }
    }
}

/// All transient state behind the listing screen: the active filter key,
/// the two dropdown controls and the three query slots.
pub(crate) struct ListingState {
    pub(crate) currency: Currency,
    pub(crate) category_id: Option<String>,
    pub(crate) category_dropdown: SearchDropdown,
    pub(crate) currency_dropdown: SearchDropdown,
    pub(crate) categories: QueryState<Vec<SelectableItem>>,
    pub(crate) currencies: QueryState<Vec<SelectableItem>>,
    pub(crate) coins: QueryState<Vec<MarketCoin>>,
    coins_seq: u64,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            category_id: None,
            category_dropdown: SearchDropdown::new("Category").with_clear(),
            currency_dropdown: SearchDropdown::new("Currency"),
            categories: QueryState::Loading,
            currencies: QueryState::Loading,
            coins: QueryState::Loading,
            coins_seq: 0,
        }
    }
}

impl ListingState {
    /// Current filter key for the coins query.
    pub(crate) fn filter(&self) -> CoinFilter {
        CoinFilter {
            currency_code: self.currency.name.clone(),
            category_id: self.category_id.clone(),
        }
    }

    /// Marks the coins slot loading and stamps a fresh request. Responses
    /// carrying an older stamp are dropped on arrival, so a slow response
    /// for a superseded filter can never overwrite newer results.
    pub(crate) fn next_coins_request(&mut self) -> ApiCommand {
        self.coins_seq += 1;
        self.coins = QueryState::Loading;
        ApiCommand::FetchCoins {
            filter: self.filter(),
            seq: self.coins_seq,
        }
    }

    pub(crate) fn apply_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::Coins { seq, result } => {
                if seq < self.coins_seq {
                    log::info!(
                        "Dropping stale coins response (seq {seq} < {})",
                        self.coins_seq
                    );
                    return;
                }
                self.coins = result.into();
            }
            ApiEvent::Categories(result) => self.categories = result.into(),
            ApiEvent::Currencies(result) => self.currencies = result.into(),
        }
    }

    /// Category dropdown reported a change. Returns whether the filter key
    /// actually moved (and the coins query must be re-issued).
    pub(crate) fn set_category(&mut self, item: Option<&SelectableItem>) -> bool {
        let next = item.map(|item| item.id.clone());
        let changed = next != self.category_id;
        self.category_id = next;
        changed
    }

    /// Currency dropdown reported a change. Clearing falls back to the USD
    /// default with its looked-up glyph.
    pub(crate) fn set_currency(&mut self, item: Option<&SelectableItem>) -> bool {
        let next = match item {
            Some(item) => Currency::from_code(&item.label),
            None => Currency::default(),
        };
        let changed = next != self.currency;
        self.currency = next;
        changed
    }
}
