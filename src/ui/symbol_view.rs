use std::sync::Arc;

use crate::analysis::{PriceChange, compute_change};
use crate::data::FetchOutcome;
use crate::domain::{PanelSpec, PriceSeries};
use crate::ui::config::UI_TEXT;
use crate::ui::utils::format_price;

/// Annotation shown above "Data not available".
/// Which one appears depends only on where the failure surfaced.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// Provider answered but had no rows
    Warning(String),
    /// Request or parse failed
    Error(String),
}

/// What a panel should draw for its symbol.
#[derive(Debug, Clone)]
pub enum PriceDisplay {
    /// No pass has reached this symbol yet
    Pending,
    Available {
        latest: String,
        change: Option<PriceChange>,
        series: Arc<PriceSeries>,
    },
    /// Err and empty Ok both land here
    Unavailable { notice: Notice },
}

/// Render model for one panel: title, blurb, and the price branch to take.
#[derive(Debug, Clone)]
pub struct SymbolView {
    pub title: &'static str,
    pub description: &'static str,
    pub display: PriceDisplay,
}

impl SymbolView {
    pub fn from_outcome(panel: &PanelSpec, outcome: Option<&FetchOutcome>) -> Self {
        let display = match outcome {
            None => PriceDisplay::Pending,
            Some(Err(e)) => PriceDisplay::Unavailable {
                notice: Notice::Error(format!(
                    "{} {}: {}",
                    UI_TEXT.fetch_error_prefix, panel.ticker, e
                )),
            },
            Some(Ok(series)) => match series.latest() {
                None => PriceDisplay::Unavailable {
                    notice: Notice::Warning(format!(
                        "{} {}",
                        UI_TEXT.no_data_prefix, panel.ticker
                    )),
                },
                Some(latest) => PriceDisplay::Available {
                    latest: format_price(latest.close),
                    change: compute_change(series),
                    series: Arc::clone(series),
                },
            },
        };

        Self {
            title: panel.title,
            description: panel.description,
            display,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self.display, PriceDisplay::Available { .. })
    }

    /// Formatted latest close, or the "not available" text for any other branch.
    pub fn latest_text(&self) -> &str {
        match &self.display {
            PriceDisplay::Available { latest, .. } => latest,
            PriceDisplay::Pending => UI_TEXT.waiting_for_data,
            PriceDisplay::Unavailable { .. } => UI_TEXT.data_not_available,
        }
    }
}
