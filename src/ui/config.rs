use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub price_up: Color32,
    pub price_down: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub side_panel_min_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(212, 175, 55),   // Gold
        heading: Color32::from_rgb(212, 175, 55), // Gold
        subsection_heading: Color32::from_rgb(235, 205, 110),
        central_panel: Color32::from_rgb(11, 61, 11), // Dark green
        side_panel: Color32::from_rgb(21, 75, 20),
        price_up: Color32::from_rgb(130, 220, 140),
        price_down: Color32::from_rgb(255, 120, 110),
    },
    side_panel_min_width: 180.0,
};
