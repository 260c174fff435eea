use {
    eframe::{
        Frame,
        egui::Context,
    },
    std::sync::Arc,
};

use crate::{
    Cli,
    app::{ListingState, QueryState, Route},
    data::{ApiCommand, CoinGeckoClient, MarketDataApi, QueryWorker},
    ui::setup_custom_visuals,
};

pub struct App {
    pub(crate) route: Route,
    pub(crate) listing: ListingState,
    worker: QueryWorker,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        setup_custom_visuals(&cc.egui_ctx);

        let api: Arc<dyn MarketDataApi> = Arc::new(
            CoinGeckoClient::new(args.base_url, args.per_page)
                .expect("Failed to create HTTP client"),
        );
        let worker = QueryWorker::spawn(api, cc.egui_ctx.clone());

        let mut app = Self {
            route: Route::default(),
            listing: ListingState::default(),
            worker,
        };

        // All three queries start in flight; each resolves independently.
        app.worker.send(ApiCommand::FetchCategories);
        app.worker.send(ApiCommand::FetchCurrencies);
        app.refetch_coins();
        app
    }

    pub(crate) fn navigate(&mut self, route: Route) {
        self.route = route;
    }

    /// Re-issues the coins query for the current filter key.
    pub(crate) fn refetch_coins(&mut self) {
        let command = self.listing.next_coins_request();
        self.worker.send(command);
    }

    pub(crate) fn retry_categories(&mut self) {
        self.listing.categories = QueryState::Loading;
        self.worker.send(ApiCommand::FetchCategories);
    }

    pub(crate) fn retry_currencies(&mut self) {
        self.listing.currencies = QueryState::Loading;
        self.worker.send(ApiCommand::FetchCurrencies);
    }

    fn drain_events(&mut self) {
        while let Some(event) = self.worker.try_recv() {
            self.listing.apply_event(event);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.drain_events();

        match self.route.clone() {
            Route::Listing => self.render_listing(ctx),
            Route::CoinDetail { symbol } => self.render_coin_detail(ctx, &symbol),
        }
    }
}
