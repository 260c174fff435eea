use eframe::egui::{Color32, Context, RichText, Visuals};

use crate::{
    ui::{
        UI_CONFIG,
        text::{ICON_CARET_DOWN, ICON_CARET_UP},
    },
    utils::format_percent,
};

/// Green for gains, red for losses. Zero counts as a gain, matching the
/// `>= 0` rule the table renders with.
pub fn change_color(value: f64) -> Color32 {
    if value >= 0.0 {
        UI_CONFIG.colors.gain
    } else {
        UI_CONFIG.colors.loss
    }
}

fn change_caret(value: f64) -> &'static str {
    if value >= 0.0 { ICON_CARET_UP } else { ICON_CARET_DOWN }
}

/// Colored "⏶ 1.37%" fragment for a 24h percentage change.
pub fn percent_change_text(value: f64) -> RichText {
    RichText::new(format!("{} {}", change_caret(value), format_percent(value)))
        .color(change_color(value))
}

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.window_fill;
    visuals.panel_fill = UI_CONFIG.colors.panel_fill;

    // Make the widgets stand out a bit more
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}
