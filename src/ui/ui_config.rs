use eframe::egui::{Color32, Frame, Margin, Stroke};

/// UI Colors for consistent theming
#[derive(Clone, Copy)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subdued: Color32,
    pub gain: Color32,
    pub loss: Color32,
    pub window_fill: Color32,
    pub panel_fill: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub dropdown_min_width: f32,
    pub dropdown_panel_max_height: f32,
    pub logo_size: f32,
    pub detail_logo_size: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(200, 200, 200),
        heading: Color32::from_rgb(240, 240, 240),
        subdued: Color32::GRAY,
        gain: Color32::from_rgb(22, 163, 74),
        loss: Color32::from_rgb(220, 38, 38),
        window_fill: Color32::from_rgb(18, 18, 24),
        panel_fill: Color32::from_rgb(28, 28, 36),
    },
    dropdown_min_width: 150.0,
    dropdown_panel_max_height: 220.0,
    logo_size: 24.0,
    detail_logo_size: 48.0,
};

impl UiConfig {
    /// Frame for the filter toolbar (Standard padding)
    pub fn toolbar_frame(&self) -> Frame {
        Frame {
            fill: self.colors.panel_fill,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(12, 8),
            ..Default::default()
        }
    }
}
