use eframe::egui::{
    CentralPanel, Context, Grid, Image, RichText, ScrollArea, TopBottomPanel, Ui, Vec2,
};

use crate::{
    app::{App, ListingState, QueryState, Route},
    data::RequestError,
    models::{Currency, MarketCoin},
    ui::{DropdownEvent, UI_CONFIG, UI_TEXT, percent_change_text},
    utils::format_amount,
};

impl App {
    pub(crate) fn render_listing(&mut self, ctx: &Context) {
        TopBottomPanel::top("filter_toolbar")
            .frame(UI_CONFIG.toolbar_frame())
            .show(ctx, |ui| self.render_toolbar(ui));

        let mut reload = false;
        let mut open_detail: Option<String> = None;

        CentralPanel::default().show(ctx, |ui| match &self.listing.coins {
            QueryState::Loading => render_loading(ui),
            QueryState::Failed(err) => reload = render_error_panel(ui, err),
            QueryState::Ready(coins) => {
                open_detail = render_coins_table(ui, coins, &self.listing.currency);
            }
        });

        if reload {
            self.refetch_coins();
        }
        if let Some(symbol) = open_detail {
            self.navigate(Route::CoinDetail { symbol });
        }
    }

    fn render_toolbar(&mut self, ui: &mut Ui) {
        // The original UI treats the two list queries as one loading gate.
        if self.listing.categories.is_loading() || self.listing.currencies.is_loading() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(UI_TEXT.loading);
            });
            return;
        }

        let mut category_event = None;
        let mut currency_event = None;
        let mut retry_categories = false;
        let mut retry_currencies = false;

        {
            let ListingState {
                currency,
                category_dropdown,
                currency_dropdown,
                categories,
                currencies,
                ..
            } = &mut self.listing;
            let currency_name = currency.name.clone();

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(UI_TEXT.category_label);
                    match categories {
                        QueryState::Ready(items) => {
                            category_event =
                                category_dropdown.show(ui, "category_dropdown", items, None);
                        }
                        QueryState::Failed(err) => retry_categories = inline_error(ui, err),
                        QueryState::Loading => {}
                    }
                });
                ui.add_space(8.0);
                ui.vertical(|ui| {
                    ui.label(UI_TEXT.currency_label);
                    match currencies {
                        QueryState::Ready(items) => {
                            currency_event = currency_dropdown.show(
                                ui,
                                "currency_dropdown",
                                items,
                                Some(&currency_name),
                            );
                        }
                        QueryState::Failed(err) => retry_currencies = inline_error(ui, err),
                        QueryState::Loading => {}
                    }
                });
            });
        }

        let mut filter_changed = false;
        if let Some(event) = category_event {
            filter_changed |= match event {
                DropdownEvent::Selected(item) => self.listing.set_category(Some(&item)),
                DropdownEvent::Cleared => self.listing.set_category(None),
            };
        }
        if let Some(event) = currency_event {
            filter_changed |= match event {
                DropdownEvent::Selected(item) => self.listing.set_currency(Some(&item)),
                DropdownEvent::Cleared => self.listing.set_currency(None),
            };
        }

        if filter_changed {
            self.refetch_coins();
        }
        if retry_categories {
            self.retry_categories();
        }
        if retry_currencies {
            self.retry_currencies();
        }
    }
}

fn render_loading(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.4);
        ui.spinner();
        ui.label(RichText::new(UI_TEXT.loading).size(20.0));
    });
}

/// Full-page error panel for a failed coins query. Returns true when the
/// user asked to reload.
fn render_error_panel(ui: &mut Ui, err: &RequestError) -> bool {
    let mut reload = false;
    let title = if err.is_rate_limited() {
        UI_TEXT.error_title_rate_limit
    } else {
        UI_TEXT.error_title_generic
    };

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.3);
        ui.heading(
            RichText::new(title)
                .size(32.0)
                .color(UI_CONFIG.colors.loss),
        );
        ui.add_space(8.0);
        ui.label(UI_TEXT.error_hint);
        ui.label(
            RichText::new(err.to_string())
                .small()
                .color(UI_CONFIG.colors.subdued),
        );
        ui.add_space(12.0);
        if ui.button(UI_TEXT.reload).clicked() {
            reload = true;
        }
    });
    reload
}

/// Inline error for the category/currency list queries. The original showed
/// nothing here; surfacing it with a retry closes that gap.
fn inline_error(ui: &mut Ui, err: &RequestError) -> bool {
    let mut retry = false;
    ui.horizontal(|ui| {
        ui.label(RichText::new(err.to_string()).color(UI_CONFIG.colors.loss));
        if ui.small_button(UI_TEXT.retry).clicked() {
            retry = true;
        }
    });
    retry
}

fn render_coins_table(ui: &mut Ui, coins: &[MarketCoin], currency: &Currency) -> Option<String> {
    let mut open_detail = None;

    ScrollArea::both().show(ui, |ui| {
        Grid::new("coins_grid")
            .striped(true)
            .num_columns(9)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                let heading = |text: String| {
                    RichText::new(text)
                        .strong()
                        .color(UI_CONFIG.colors.heading)
                };
                ui.label(heading(UI_TEXT.col_rank.to_string()));
                ui.label(heading(UI_TEXT.col_logo.to_string()));
                ui.label(heading(UI_TEXT.col_symbol.to_string()));
                ui.label(heading(UI_TEXT.col_name.to_string()));
                ui.label(heading(format!("{}, {}", UI_TEXT.col_price, currency.name)));
                ui.label(heading(UI_TEXT.col_change_24h.to_string()));
                ui.label(heading(format!(
                    "{}, {}",
                    UI_TEXT.col_market_cap, currency.name
                )));
                ui.label(heading(UI_TEXT.col_change_24h.to_string()));
                ui.label("");
                ui.end_row();

                for coin in coins {
                    ui.label(
                        coin.market_cap_rank
                            .map(|rank| rank.to_string())
                            .unwrap_or_else(|| "-".to_string()),
                    );
                    if coin.image.is_empty() {
                        ui.label("-");
                    } else {
                        ui.add(
                            Image::new(coin.image.as_str())
                                .fit_to_exact_size(Vec2::splat(UI_CONFIG.logo_size)),
                        );
                    }
                    ui.label(coin.symbol.to_uppercase());
                    ui.label(&coin.name);
                    ui.label(format!(
                        "{}{}",
                        currency.glyph(),
                        format_amount(coin.current_price)
                    ));
                    ui.label(percent_change_text(coin.price_change_percentage_24h));
                    ui.label(format!(
                        "{}{}",
                        currency.glyph(),
                        format_amount(coin.market_cap.unwrap_or(0.0))
                    ));
                    ui.label(percent_change_text(coin.market_cap_change_percentage_24h));
                    if ui.link(UI_TEXT.details).clicked() {
                        open_detail = Some(coin.symbol.clone());
                    }
                    ui.end_row();
                }
            });
    });

    open_detail
}
