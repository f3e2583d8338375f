//! Price chart configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Close-price line colour
    pub price_line_color: Color32,
    /// Dashed reference line (previous close / session open)
    pub reference_line_color: Color32,
    pub price_line_width: f32,
    /// Chart height in points for a full-width panel
    pub chart_height: f32,
    /// Charts in 3-column rows get a shorter box
    pub compact_chart_height: f32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    price_line_color: Color32::from_rgb(212, 175, 55), // Gold
    reference_line_color: Color32::from_rgb(120, 160, 120),
    price_line_width: 1.5,
    chart_height: 220.0,
    compact_chart_height: 160.0,
};
