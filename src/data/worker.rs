use {
    eframe::egui::Context,
    std::{
        sync::{
            Arc,
            mpsc::{Receiver, Sender, channel},
        },
        thread,
    },
    tokio::runtime::Runtime,
};

use crate::{
    data::{MarketDataApi, RequestError},
    models::{CoinFilter, MarketCoin, SelectableItem},
};

/// Requests the UI pushes to the background worker.
#[derive(Debug, Clone)]
pub enum ApiCommand {
    /// `seq` stamps the request so the UI can drop responses that were
    /// superseded by a newer filter before they arrived.
    FetchCoins { filter: CoinFilter, seq: u64 },
    FetchCategories,
    FetchCurrencies,
}

/// Completed requests flowing back to the UI thread.
#[derive(Debug)]
pub enum ApiEvent {
    Coins {
        seq: u64,
        result: Result<Vec<MarketCoin>, RequestError>,
    },
    Categories(Result<Vec<SelectableItem>, RequestError>),
    Currencies(Result<Vec<SelectableItem>, RequestError>),
}

/// Owns the background thread serving API requests. The UI thread sends
/// commands and drains events with `try_recv` each frame.
pub struct QueryWorker {
    command_tx: Sender<ApiCommand>,
    event_rx: Receiver<ApiEvent>,
}

impl QueryWorker {
    /// Spawns the worker thread with its own tokio runtime. Each command is
    /// served on its own task, so the three query kinds can be in flight at
    /// the same time. In-flight requests are not aborted; superseded coin
    /// responses are filtered out by their sequence stamp on arrival.
    pub fn spawn(api: Arc<dyn MarketDataApi>, ctx: Context) -> Self {
        let (command_tx, command_rx) = channel::<ApiCommand>();
        let (event_tx, event_rx) = channel::<ApiEvent>();

        thread::spawn(move || {
            let rt = match Runtime::new() {
                Ok(rt) => rt,
                Err(err) => {
                    log::error!("Failed to create worker runtime: {err}");
                    return;
                }
            };

            // Exits when the app drops its command sender.
            while let Ok(command) = command_rx.recv() {
                let api = Arc::clone(&api);
                let event_tx = event_tx.clone();
                let ctx = ctx.clone();
                rt.spawn(async move {
                    let event = serve(api.as_ref(), command).await;
                    if event_tx.send(event).is_ok() {
                        ctx.request_repaint();
                    }
                });
            }
        });

        Self {
            command_tx,
            event_rx,
        }
    }

    pub fn send(&self, command: ApiCommand) {
        if self.command_tx.send(command).is_err() {
            log::error!("Query worker is gone; dropping command");
        }
    }

    pub fn try_recv(&self) -> Option<ApiEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn serve(api: &dyn MarketDataApi, command: ApiCommand) -> ApiEvent {
    match command {
        ApiCommand::FetchCoins { filter, seq } => ApiEvent::Coins {
            seq,
            result: api.coin_markets(&filter).await,
        },
        ApiCommand::FetchCategories => ApiEvent::Categories(api.category_list().await),
        ApiCommand::FetchCurrencies => ApiEvent::Currencies(api.supported_currencies().await),
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiCommand, ApiEvent, QueryWorker};
    use crate::{
        data::{MarketDataApi, RequestError},
        models::{CoinFilter, MarketCoin, SelectableItem},
    };
    use async_trait::async_trait;
    use std::{sync::Arc, time::Duration};

    struct StubApi;

    #[async_trait]
    impl MarketDataApi for StubApi {
        async fn coin_markets(
            &self,
            filter: &CoinFilter,
        ) -> Result<Vec<MarketCoin>, RequestError> {
            assert_eq!(filter.currency_code, "USD");
            Ok(vec![MarketCoin::default()])
        }

        async fn category_list(&self) -> Result<Vec<SelectableItem>, RequestError> {
            Ok(vec![SelectableItem::new("layer-1", "Layer 1")])
        }

        async fn supported_currencies(&self) -> Result<Vec<SelectableItem>, RequestError> {
            Err(RequestError::Status {
                status: 429,
                message: "rate limited".to_string(),
            })
        }
    }

    #[test]
    fn worker_serves_concurrent_commands_and_reports_each_outcome() {
        let worker = QueryWorker::spawn(Arc::new(StubApi), eframe::egui::Context::default());

        worker.send(ApiCommand::FetchCoins {
            filter: CoinFilter {
                currency_code: "USD".to_string(),
                category_id: None,
            },
            seq: 1,
        });
        worker.send(ApiCommand::FetchCategories);
        worker.send(ApiCommand::FetchCurrencies);

        let mut coins = 0;
        let mut categories = 0;
        let mut failed_currencies = 0;
        for _ in 0..3 {
            match worker
                .event_rx
                .recv_timeout(Duration::from_secs(5))
                .expect("worker should answer every command")
            {
                ApiEvent::Coins { seq, result } => {
                    assert_eq!(seq, 1);
                    assert_eq!(result.unwrap().len(), 1);
                    coins += 1;
                }
                ApiEvent::Categories(result) => {
                    assert_eq!(result.unwrap()[0].id, "layer-1");
                    categories += 1;
                }
                ApiEvent::Currencies(result) => {
                    assert!(result.unwrap_err().is_rate_limited());
                    failed_currencies += 1;
                }
            }
        }
        assert_eq!((coins, categories, failed_currencies), (1, 1, 1));
    }
}
