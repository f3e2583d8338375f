use crate::domain::PriceSeries;

/// Move from a reference price to the latest close.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceChange {
    pub pct: f64,
    pub reference: f64,
    pub latest: f64,
}

/// Percentage change for a series.
///
/// 1. Two or more calendar days: last close of the previous day -> last close of the final day.
/// 2. One day: first observation (session open) -> last observation.
///
/// `None` for an empty series or a zero reference.
pub fn compute_change(series: &PriceSeries) -> Option<PriceChange> {
    let days = series.trading_days();

    let (reference, latest) = match days.as_slice() {
        [] => return None,
        [.., prev_day, current_day] => (
            series.last_on(*prev_day)?.close,
            series.last_on(*current_day)?.close,
        ),
        [_] => (series.first()?.close, series.latest()?.close),
    };

    if reference == 0.0 {
        return None;
    }

    Some(PriceChange {
        pct: (latest - reference) / reference * 100.0,
        reference,
        latest,
    })
}
