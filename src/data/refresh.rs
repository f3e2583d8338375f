use std::time::Duration;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::REFRESH;
use crate::data::cache::{CacheLookup, RefreshCache};
use crate::data::fetcher::{FetchOutcome, PriceFetcher};
use crate::domain::{Category, Symbol};
use crate::utils::app_time::now;
use crate::utils::{AppInstant, Clock};

/// One symbol's result from a pass.
#[derive(Debug, Clone)]
pub struct SymbolReport {
    pub symbol: Symbol,
    pub outcome: FetchOutcome,
    pub lookup: CacheLookup,
}

/// Everything a render pass pulled through the cache.
#[derive(Debug, Clone)]
pub struct RefreshReport {
    pub category: Category,
    pub symbols: Vec<SymbolReport>,
    pub elapsed: Duration,
}

impl RefreshReport {
    pub fn fetched(&self) -> usize {
        self.symbols
            .iter()
            .filter(|s| s.lookup == CacheLookup::Miss)
            .count()
    }

    pub fn served_from_cache(&self) -> usize {
        self.symbols.len() - self.fetched()
    }

    pub fn unavailable(&self) -> usize {
        self.symbols
            .iter()
            .filter(|s| s.outcome.as_ref().map_or(true, |series| series.is_empty()))
            .count()
    }
}

/// Pulls each symbol through the cache, strictly one after another.
/// A slow fetch delays the rest of the pass; nothing runs in parallel.
pub fn run_refresh_pass<F: PriceFetcher, C: Clock>(
    cache: &mut RefreshCache<F, C>,
    category: Category,
    symbols: &[Symbol],
) -> RefreshReport {
    let started = now();

    let mut seen: Vec<&Symbol> = Vec::with_capacity(symbols.len());
    let mut reports = Vec::with_capacity(symbols.len());
    for symbol in symbols {
        if seen.contains(&symbol) {
            continue;
        }
        seen.push(symbol);

        let (outcome, lookup) = cache.lookup(symbol);
        reports.push(SymbolReport {
            symbol: symbol.clone(),
            outcome,
            lookup,
        });
    }

    let report = RefreshReport {
        category,
        symbols: reports,
        elapsed: started.elapsed(),
    };

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_refresh_passes {
        log::info!(
            "[refresh] {}: {} fetched, {} cached, {} unavailable in {:.2}s",
            category,
            report.fetched(),
            report.served_from_cache(),
            report.unavailable(),
            report.elapsed.as_secs_f32()
        );
    }

    report
}

impl Default for RefreshTimer {
    fn default() -> Self {
        Self::new(Duration::from_millis(REFRESH.tick_interval_ms))
    }
}

/// Fixed-interval tick with no jitter or backoff.
#[derive(Debug, Clone)]
pub struct RefreshTimer {
    interval: Duration,
    last_tick: Option<AppInstant>,
}

impl RefreshTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_tick: None,
        }
    }

    /// Due on first use and whenever a full interval has passed since the last tick.
    pub fn is_due(&self, now: AppInstant) -> bool {
        match self.last_tick {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.interval,
        }
    }

    pub fn mark_tick(&mut self, now: AppInstant) {
        self.last_tick = Some(now);
    }

    /// Time until the next tick, zero when already due.
    pub fn remaining(&self, now: AppInstant) -> Duration {
        match self.last_tick {
            None => Duration::ZERO,
            Some(last) => self
                .interval
                .saturating_sub(now.saturating_duration_since(last)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::cache::tests::{CountingFetcher, ManualClock};

    const TTL: Duration = Duration::from_secs(60);

    fn index_symbols() -> Vec<Symbol> {
        Category::Index.descriptor().symbols()
    }

    #[test]
    fn first_pass_fetches_everything_second_pass_nothing() {
        let fetcher = CountingFetcher::ok();
        let clock = ManualClock::new();
        let mut cache = RefreshCache::new(fetcher.clone(), clock.clone(), TTL);
        let symbols = index_symbols();

        let first = run_refresh_pass(&mut cache, Category::Index, &symbols);
        clock.advance(Duration::from_secs(5));
        let second = run_refresh_pass(&mut cache, Category::Index, &symbols);

        assert_eq!(first.fetched(), 4);
        assert_eq!(second.fetched(), 0);
        assert_eq!(second.served_from_cache(), 4);
        assert_eq!(fetcher.calls.get(), 4);
    }

    #[test]
    fn pass_after_ttl_refetches() {
        let fetcher = CountingFetcher::ok();
        let clock = ManualClock::new();
        let mut cache = RefreshCache::new(fetcher.clone(), clock.clone(), TTL);
        let symbols = index_symbols();

        run_refresh_pass(&mut cache, Category::Index, &symbols);
        clock.advance(Duration::from_secs(61));
        let report = run_refresh_pass(&mut cache, Category::Index, &symbols);

        assert_eq!(report.fetched(), 4);
        assert_eq!(fetcher.calls.get(), 8);
    }

    #[test]
    fn duplicate_symbols_in_a_pass_are_pulled_once() {
        let fetcher = CountingFetcher::ok();
        let mut cache = RefreshCache::new(fetcher.clone(), ManualClock::new(), TTL);
        let es = Symbol::from("ES=F");

        let report = run_refresh_pass(&mut cache, Category::Index, &[es.clone(), es]);

        assert_eq!(report.symbols.len(), 1);
        assert_eq!(fetcher.calls.get(), 1);
    }

    #[test]
    fn failures_count_as_unavailable() {
        let fetcher = CountingFetcher::failing();
        let mut cache = RefreshCache::new(fetcher, ManualClock::new(), TTL);

        let report = run_refresh_pass(&mut cache, Category::Bond, &Category::Bond.descriptor().symbols());

        assert_eq!(report.unavailable(), 2);
    }

    #[test]
    fn timer_is_due_immediately_then_every_interval() {
        let clock = ManualClock::new();
        let mut timer = RefreshTimer::new(Duration::from_secs(60));

        assert!(timer.is_due(clock.now()));
        timer.mark_tick(clock.now());
        assert!(!timer.is_due(clock.now()));

        clock.advance(Duration::from_secs(45));
        assert_eq!(timer.remaining(clock.now()), Duration::from_secs(15));
        assert!(!timer.is_due(clock.now()));

        clock.advance(Duration::from_secs(15));
        assert!(timer.is_due(clock.now()));
        assert_eq!(timer.remaining(clock.now()), Duration::ZERO);
    }
}
