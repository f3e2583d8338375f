use eframe::egui::{Color32, Context, RichText, Ui, Visuals};

use crate::analysis::PriceChange;
use crate::ui::config::UI_CONFIG;

/// Creates a colored heading with uppercase text and monospace font
pub fn colored_heading(text: impl Into<String>) -> RichText {
    let uppercase_text = text.into().to_uppercase() + ":";
    RichText::new(uppercase_text)
        .color(UI_CONFIG.colors.heading)
        .monospace()
}

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;

    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

/// Creates a section heading with standard spacing
pub fn section_heading(ui: &mut Ui, text: impl Into<String>) {
    ui.add_space(10.0);
    ui.heading(colored_heading(text));
    ui.add_space(5.0);
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);
}

/// Futures quotes are shown to two decimals regardless of magnitude.
pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}

/// "+1.23% (4500.25 → 4555.50)"
pub fn format_change(change: &PriceChange) -> String {
    format!(
        "{:+.2}% ({} → {})",
        change.pct,
        format_price(change.reference),
        format_price(change.latest)
    )
}

pub fn change_color(pct: f64) -> Color32 {
    if pct >= 0.0 {
        UI_CONFIG.colors.price_up
    } else {
        UI_CONFIG.colors.price_down
    }
}
