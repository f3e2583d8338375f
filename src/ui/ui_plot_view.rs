use eframe::egui;
use egui_plot::{AxisHints, HLine, HPlacement, Line, LineStyle, Plot, PlotPoints};

use crate::analysis::PriceChange;
use crate::config::plot::PLOT_CONFIG;
use crate::domain::PriceSeries;
use crate::ui::ui_text::UI_TEXT;
use crate::utils::time_utils::epoch_sec_to_local_hm;

/// Line chart of close price against time for one symbol.
pub struct PriceChart<'a> {
    id: &'a str,
    title: &'a str,
    series: &'a PriceSeries,
    change: Option<&'a PriceChange>,
    height: f32,
}

impl<'a> PriceChart<'a> {
    pub fn new(id: &'a str, title: &'a str, series: &'a PriceSeries) -> Self {
        Self {
            id,
            title,
            series,
            change: None,
            height: PLOT_CONFIG.chart_height,
        }
    }

    /// Draws the change reference (previous close / session open) as a dashed line.
    pub fn with_reference(mut self, change: Option<&'a PriceChange>) -> Self {
        self.change = change;
        self
    }

    pub fn compact(mut self, compact: bool) -> Self {
        if compact {
            self.height = PLOT_CONFIG.compact_chart_height;
        }
        self
    }

    pub fn show(self, ui: &mut egui::Ui) {
        let points = PlotPoints::from(self.series.plot_points());
        let reference = self.change.map(|c| c.reference);

        Plot::new(format!("price_chart_{}", self.id))
            .height(self.height)
            .custom_x_axes(vec![create_x_axis()])
            .custom_y_axes(vec![create_y_axis()])
            .label_formatter(|_, value| {
                format!("{}  {:.2}", epoch_sec_to_local_hm(value.x as i64), value.y)
            })
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(self.title, points)
                        .color(PLOT_CONFIG.price_line_color)
                        .width(PLOT_CONFIG.price_line_width),
                );
                if let Some(price) = reference {
                    plot_ui.hline(
                        HLine::new(UI_TEXT.plot_reference_line, price)
                            .color(PLOT_CONFIG.reference_line_color)
                            .style(LineStyle::dashed_loose()),
                    );
                }
            });
    }
}

fn create_x_axis() -> AxisHints<'static> {
    AxisHints::new_x()
        .label(UI_TEXT.plot_x_axis)
        .formatter(|grid_mark, _range| epoch_sec_to_local_hm(grid_mark.value as i64))
}

fn create_y_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.plot_y_axis)
        .formatter(|grid_mark, _range| format!("{:.2}", grid_mark.value))
        .placement(HPlacement::Left)
}
