use eframe::egui::{ComboBox, RichText, Ui};
use strum::IntoEnumIterator;

use crate::analysis::MarketSignal;
use crate::domain::Category;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::section_heading;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// The single selector choosing which category is shown
pub struct CategoryPanel {
    selected: Category,
}

impl CategoryPanel {
    pub fn new(selected: Category) -> Self {
        Self { selected }
    }
}

impl Panel for CategoryPanel {
    type Event = Category;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.category_heading);

        ComboBox::from_id_salt("Category")
            .selected_text(self.selected.to_string())
            .width(UI_CONFIG.side_panel_min_width - 10.0)
            .show_ui(ui, |ui| {
                for category in Category::iter() {
                    if ui
                        .selectable_value(&mut self.selected, category, category.to_string())
                        .clicked()
                    {
                        events.push(self.selected);
                    }
                }
            });

        ui.add_space(20.0);
        events
    }
}

/// Heuristic read across all fetched symbols
pub struct AnalysisPanel<'a> {
    signals: &'a [MarketSignal],
    inputs_available: usize,
    inputs_total: usize,
}

impl<'a> AnalysisPanel<'a> {
    pub fn new(signals: &'a [MarketSignal], inputs_available: usize, inputs_total: usize) -> Self {
        Self {
            signals,
            inputs_available,
            inputs_total,
        }
    }
}

impl<'a> Panel for AnalysisPanel<'a> {
    type Event = ();
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        section_heading(ui, UI_TEXT.analysis_heading);

        for signal in self.signals {
            let text = RichText::new(format!("• {}", signal)).small();
            if signal.is_neutral() {
                ui.label(text);
            } else {
                ui.label(text.color(UI_CONFIG.colors.subsection_heading));
            }
            ui.add_space(4.0);
        }

        if self.inputs_available < self.inputs_total {
            ui.add_space(6.0);
            ui.label_subdued(format!(
                "({}/{}) {}",
                self.inputs_available, self.inputs_total, UI_TEXT.analysis_partial_note
            ));
        }

        Vec::new()
    }
}
