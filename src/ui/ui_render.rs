use eframe::egui::{
    CentralPanel, Color32, Context, Frame, Margin, RichText, ScrollArea, SidePanel,
    TopBottomPanel, Ui,
};

use crate::analysis::{ChangeSnapshot, SIGNAL_TICKERS, analyze_market};
use crate::domain::PanelSpec;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::symbol_view::{Notice, PriceDisplay, SymbolView};
use crate::ui::ui_panels::{AnalysisPanel, CategoryPanel, Panel};
use crate::ui::ui_plot_view::PriceChart;
use crate::ui::utils::{change_color, format_change, spaced_separator};
use crate::utils::time_utils::format_countdown;
use crate::utils::app_time::now;

use super::app::FuturesDashApp;

impl FuturesDashApp {
    pub(super) fn render_side_panel(&mut self, ctx: &Context) {
        let side_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(8, 4));
        SidePanel::left("left_panel")
            .min_width(UI_CONFIG.side_panel_min_width)
            .frame(side_panel_frame)
            .show(ctx, |ui| {
                let events = CategoryPanel::new(self.selected_category).render(ui);
                for category in events {
                    self.handle_category_selection(category);
                }

                spaced_separator(ui);

                let snapshot = ChangeSnapshot::from_outcomes(self.outcomes.iter());
                let signals = analyze_market(&snapshot);
                let available = SIGNAL_TICKERS
                    .iter()
                    .filter(|t| snapshot.get(t).is_some())
                    .count();

                ScrollArea::vertical()
                    .id_salt("analysis_panel")
                    .show(ui, |ui| {
                        AnalysisPanel::new(&signals, available, SIGNAL_TICKERS.len()).render(ui);
                    });
            });
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        let status_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(8, 4));
        TopBottomPanel::bottom("status_panel")
            .frame(status_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.metric("📡", &self.provider_name, Color32::from_rgb(100, 200, 100));
                    ui.separator();

                    if self.is_refreshing() {
                        ui.spinner();
                        ui.label_warning(UI_TEXT.status_refreshing);
                    } else {
                        let remaining = self.timer.remaining(now());
                        ui.metric(
                            UI_TEXT.status_next_refresh,
                            &format_countdown(remaining),
                            Color32::from_rgb(180, 200, 255),
                        );
                    }
                    ui.separator();

                    if let Some(report) = &self.last_report {
                        ui.label_subdued(format!(
                            "{} ({}): {} {}, {} {}, {} {} in {:.1}s",
                            UI_TEXT.status_last_pass,
                            report.category,
                            report.fetched(),
                            UI_TEXT.status_fetched,
                            report.served_from_cache(),
                            UI_TEXT.status_cached,
                            report.unavailable(),
                            UI_TEXT.status_unavailable,
                            report.elapsed.as_secs_f32()
                        ));
                    }
                });
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::same(12));
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .id_salt("central_panel")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.label_header(UI_TEXT.app_title);
                        ui.label_subdued(UI_TEXT.app_subtitle);
                        ui.add_space(8.0);
                        ui.label_subheader(self.selected_category.title());
                        ui.add_space(8.0);

                        let descriptor = self.selected_category.descriptor();
                        for row in descriptor.rows {
                            match row.len() {
                                0 => {}
                                1 => self.render_symbol_panel(ui, &row[0], false),
                                n => {
                                    ui.columns(n, |columns| {
                                        for (column, panel) in columns.iter_mut().zip(row.iter()) {
                                            self.render_symbol_panel(column, panel, n >= 3);
                                        }
                                    });
                                }
                            }
                            spaced_separator(ui);
                        }
                    });
            });
    }

    fn render_symbol_panel(&self, ui: &mut Ui, panel: &PanelSpec, compact: bool) {
        let view = SymbolView::from_outcome(panel, self.outcomes.get(panel.ticker));

        ui.vertical(|ui| {
            ui.label_subheader(view.title);
            if !view.description.is_empty() {
                ui.label(RichText::new(view.description).small());
            }
            ui.add_space(4.0);

            match &view.display {
                PriceDisplay::Pending => {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label_subdued(view.latest_text());
                    });
                }
                PriceDisplay::Unavailable { notice } => {
                    match notice {
                        Notice::Warning(msg) => ui.label_warning(msg),
                        Notice::Error(msg) => ui.label_error(msg),
                    }
                    ui.label(RichText::new(view.latest_text()).strong());
                }
                PriceDisplay::Available {
                    latest,
                    change,
                    series,
                } => {
                    ui.metric(UI_TEXT.latest_label, latest, UI_CONFIG.colors.label);
                    match change {
                        Some(change) => ui.metric(
                            UI_TEXT.change_label,
                            &format_change(change),
                            change_color(change.pct),
                        ),
                        None => ui.label_subdued(UI_TEXT.change_unavailable),
                    }
                    ui.add_space(4.0);
                    PriceChart::new(panel.ticker, view.title, series)
                        .with_reference(change.as_ref())
                        .compact(compact)
                        .show(ui);
                }
            }
        });
    }
}
