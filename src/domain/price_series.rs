use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};

/// One minute bar reduced to its close.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceObservation {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
}

impl PriceObservation {
    pub fn new(timestamp: DateTime<Utc>, close: f64) -> Self {
        Self { timestamp, close }
    }

    pub fn epoch_sec(&self) -> i64 {
        self.timestamp.timestamp()
    }
}

/// Time-ordered closes for one symbol. Built once per fetch and never edited,
/// a refresh swaps in a whole new series.
///
/// Days are split at the exchange's local midnight, not UTC's; a Globex session
/// opening at 23:00 UTC belongs to one trading day.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    observations: Vec<PriceObservation>,
    exchange_offset: FixedOffset,
}

impl Default for PriceSeries {
    fn default() -> Self {
        Self {
            observations: Vec::new(),
            exchange_offset: Utc.fix(),
        }
    }
}

impl PriceSeries {
    /// Sorts by timestamp so callers can rely on ascending order.
    pub fn new(mut observations: Vec<PriceObservation>) -> Self {
        observations.sort_by_key(|o| o.timestamp);
        Self {
            observations,
            ..Self::default()
        }
    }

    /// Sets the exchange's UTC offset in seconds. Out-of-range offsets leave UTC in place.
    pub fn with_exchange_offset(mut self, offset_secs: i32) -> Self {
        if let Some(offset) = FixedOffset::east_opt(offset_secs) {
            self.exchange_offset = offset;
        }
        self
    }

    fn exchange_day(&self, observation: &PriceObservation) -> NaiveDate {
        observation
            .timestamp
            .with_timezone(&self.exchange_offset)
            .date_naive()
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn observations(&self) -> &[PriceObservation] {
        &self.observations
    }

    pub fn first(&self) -> Option<&PriceObservation> {
        self.observations.first()
    }

    /// Most recent observation (the last row, not the max or min).
    pub fn latest(&self) -> Option<&PriceObservation> {
        self.observations.last()
    }

    /// Distinct exchange-local calendar days present, ascending.
    pub fn trading_days(&self) -> Vec<NaiveDate> {
        let mut days: Vec<NaiveDate> = self
            .observations
            .iter()
            .map(|o| self.exchange_day(o))
            .collect();
        days.dedup();
        days
    }

    /// Last observation on the given day.
    pub fn last_on(&self, day: NaiveDate) -> Option<&PriceObservation> {
        self.observations
            .iter()
            .rev()
            .find(|o| self.exchange_day(o) == day)
    }

    /// `[epoch_sec, close]` pairs, the shape egui_plot wants.
    pub fn plot_points(&self) -> Vec<[f64; 2]> {
        self.observations
            .iter()
            .map(|o| [o.epoch_sec() as f64, o.close])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn obs(sec: i64, close: f64) -> PriceObservation {
        PriceObservation::new(Utc.timestamp_opt(sec, 0).unwrap(), close)
    }

    #[test]
    fn latest_is_last_row_not_extreme() {
        let series = PriceSeries::new(vec![obs(60, 100.00), obs(120, 101.25), obs(180, 99.90)]);
        assert_eq!(series.latest().map(|o| o.close), Some(99.90));
    }

    #[test]
    fn new_sorts_out_of_order_rows() {
        let series = PriceSeries::new(vec![obs(180, 3.0), obs(60, 1.0), obs(120, 2.0)]);
        let closes: Vec<f64> = series.observations().iter().map(|o| o.close).collect();
        assert_eq!(closes, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn empty_series_has_no_latest() {
        let series = PriceSeries::empty();
        assert!(series.is_empty());
        assert!(series.latest().is_none());
        assert!(series.trading_days().is_empty());
    }

    #[test]
    fn trading_days_are_distinct() {
        let day = 86_400;
        let series = PriceSeries::new(vec![obs(100, 1.0), obs(200, 2.0), obs(day + 100, 3.0)]);
        assert_eq!(series.trading_days().len(), 2);
        let first_day = series.trading_days()[0];
        assert_eq!(series.last_on(first_day).map(|o| o.close), Some(2.0));
    }

    #[test]
    fn days_split_at_exchange_midnight() {
        // 2024-01-10 23:00Z, 23:30Z and 2024-01-11 00:30Z are all Jan 10 in New York
        let base = 1_704_927_600;
        let series = PriceSeries::new(vec![
            obs(base, 100.0),
            obs(base + 1_800, 110.0),
            obs(base + 5_400, 121.0),
        ]);
        assert_eq!(series.trading_days().len(), 2);

        let series = series.with_exchange_offset(-5 * 3_600);
        let days = series.trading_days();
        assert_eq!(days, vec![NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()]);
        assert_eq!(series.last_on(days[0]).map(|o| o.close), Some(121.0));
    }

    #[test]
    fn out_of_range_offset_keeps_utc() {
        let series = PriceSeries::empty().with_exchange_offset(100_000);
        assert_eq!(series.exchange_offset.local_minus_utc(), 0);
    }
}
