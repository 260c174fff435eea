use eframe::egui::{CentralPanel, Context, Grid, Image, RichText, ScrollArea, Ui, Vec2};

use chrono::{DateTime, Utc};

use crate::{
    app::{App, Route},
    models::{Currency, MarketCoin},
    ui::{UI_CONFIG, UI_TEXT, percent_change_text},
    utils::format_amount,
};

impl App {
    /// Per-coin detail screen, keyed by symbol. Renders the snapshot the
    /// listing query already holds; nothing is refetched here.
    pub(crate) fn render_coin_detail(&mut self, ctx: &Context, symbol: &str) {
        let coin = self
            .listing
            .coins
            .ready()
            .and_then(|coins| {
                coins
                    .iter()
                    .find(|coin| coin.symbol.eq_ignore_ascii_case(symbol))
            })
            .cloned();
        let currency = self.listing.currency.clone();

        let mut back = false;
        CentralPanel::default().show(ctx, |ui| {
            if ui.button(UI_TEXT.back).clicked() {
                back = true;
            }
            ui.add_space(12.0);

            match &coin {
                Some(coin) => render_snapshot(ui, coin, &currency),
                None => {
                    ui.vertical_centered(|ui| {
                        ui.add_space(ui.available_height() * 0.3);
                        ui.heading(format!(
                            "{} {}",
                            symbol.to_uppercase(),
                            UI_TEXT.detail_missing
                        ));
                    });
                }
            }
        });

        if back {
            self.navigate(Route::Listing);
        }
    }
}

fn render_snapshot(ui: &mut Ui, coin: &MarketCoin, currency: &Currency) {
    ui.horizontal(|ui| {
        if !coin.image.is_empty() {
            ui.add(
                Image::new(coin.image.as_str())
                    .fit_to_exact_size(Vec2::splat(UI_CONFIG.detail_logo_size)),
            );
        }
        ui.heading(
            RichText::new(format!("{} ({})", coin.name, coin.symbol.to_uppercase()))
                .size(28.0)
                .color(UI_CONFIG.colors.heading),
        );
        if let Some(rank) = coin.market_cap_rank {
            ui.label(
                RichText::new(format!("#{rank}"))
                    .size(20.0)
                    .color(UI_CONFIG.colors.subdued),
            );
        }
    });

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(format!(
                "{}{}",
                currency.glyph(),
                format_amount(coin.current_price)
            ))
            .size(24.0),
        );
        ui.label(percent_change_text(coin.price_change_percentage_24h));
    });
    ui.separator();

    ScrollArea::vertical().show(ui, |ui| {
        Grid::new("coin_facts")
            .num_columns(2)
            .spacing([24.0, 8.0])
            .show(ui, |ui| {
                let mut fact = |label: &str, value: String| {
                    ui.label(RichText::new(label).color(UI_CONFIG.colors.subdued));
                    ui.label(value);
                    ui.end_row();
                };

                fact("24h High", amount_or_dash(currency, coin.high_24h));
                fact("24h Low", amount_or_dash(currency, coin.low_24h));
                fact("Market Cap", amount_or_dash(currency, coin.market_cap));
                fact(
                    "Fully Diluted Valuation",
                    amount_or_dash(currency, coin.fully_diluted_valuation),
                );
                fact("Total Volume", amount_or_dash(currency, coin.total_volume));
                fact(
                    "All-Time High",
                    format!(
                        "{} ({})",
                        amount_or_dash(currency, coin.ath),
                        date_or_dash(coin.ath_date)
                    ),
                );
                fact(
                    "All-Time Low",
                    format!(
                        "{} ({})",
                        amount_or_dash(currency, coin.atl),
                        date_or_dash(coin.atl_date)
                    ),
                );
                fact(
                    "Circulating Supply",
                    number_or_dash(coin.circulating_supply),
                );
                fact("Total Supply", number_or_dash(coin.total_supply));
                fact("Max Supply", number_or_dash(coin.max_supply));
                fact(
                    "Last Updated",
                    coin.last_updated
                        .map(|at| at.format("%Y-%m-%d %H:%M UTC").to_string())
                        .unwrap_or_else(|| "-".to_string()),
                );
            });
    });
}

fn amount_or_dash(currency: &Currency, value: Option<f64>) -> String {
    value
        .map(|value| format!("{}{}", currency.glyph(), format_amount(value)))
        .unwrap_or_else(|| "-".to_string())
}

fn number_or_dash(value: Option<f64>) -> String {
    value
        .map(format_amount)
        .unwrap_or_else(|| "-".to_string())
}

fn date_or_dash(date: Option<DateTime<Utc>>) -> String {
    date.map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}
