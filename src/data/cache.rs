use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::data::fetcher::{FetchOutcome, PriceFetcher, log_outcome};
use crate::domain::{PriceSeries, Symbol};
use crate::utils::{AppInstant, Clock};

/// Stored result of one fetch.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub outcome: FetchOutcome,
    pub fetched_at: AppInstant,
}

impl CacheEntry {
    /// Fresh while `now - fetched_at <= ttl`.
    pub fn is_fresh(&self, now: AppInstant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.fetched_at) <= ttl
    }
}

/// Was the value served from memory or fetched just now?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheLookup {
    Hit,
    Miss,
}

/// Per-symbol TTL cache in front of a fetcher.
///
/// Holds at most one entry per symbol; an expired entry is overwritten in place.
/// Failed fetches are cached like successful ones, so a symbol is fetched at most
/// once per ttl window whatever the provider said. Nothing is ever evicted.
pub struct RefreshCache<F, C> {
    fetcher: F,
    clock: C,
    ttl: Duration,
    entries: HashMap<Symbol, CacheEntry>,
}

impl<F: PriceFetcher, C: Clock> RefreshCache<F, C> {
    pub fn new(fetcher: F, clock: C, ttl: Duration) -> Self {
        Self {
            fetcher,
            clock,
            ttl,
            entries: HashMap::new(),
        }
    }

    /// Cached outcome if still fresh, otherwise fetch and replace.
    pub fn get(&mut self, symbol: &Symbol) -> FetchOutcome {
        self.lookup(symbol).0
    }

    /// Same as `get` but also reports whether the upstream was called.
    /// A fetched entry is stamped with the time of this call, so a slow request
    /// does not stretch its ttl window.
    pub fn lookup(&mut self, symbol: &Symbol) -> (FetchOutcome, CacheLookup) {
        let now = self.clock.now();

        if let Some(entry) = self.entries.get(symbol) {
            if entry.is_fresh(now, self.ttl) {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_cache_events {
                    log::info!("[cache] hit {}", symbol);
                }
                return (entry.outcome.clone(), CacheLookup::Hit);
            }
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_cache_events {
            log::info!("[cache] miss {}", symbol);
        }

        let outcome = self.fetcher.fetch(symbol);
        log_outcome(symbol, outcome.as_ref());
        let outcome = outcome.map(Arc::new);

        self.entries.insert(
            symbol.clone(),
            CacheEntry {
                outcome: outcome.clone(),
                fetched_at: now,
            },
        );

        (outcome, CacheLookup::Miss)
    }

    /// Collapsed view: failures come back as an empty series.
    pub fn series(&mut self, symbol: &Symbol) -> Arc<PriceSeries> {
        self.get(symbol)
            .unwrap_or_else(|_| Arc::new(PriceSeries::empty()))
    }

    /// Stored outcome regardless of age. Never fetches.
    pub fn peek(&self, symbol: &Symbol) -> Option<&FetchOutcome> {
        self.entries.get(symbol).map(|e| &e.outcome)
    }

    pub fn fetched_at(&self, symbol: &Symbol) -> Option<AppInstant> {
        self.entries.get(symbol).map(|e| e.fetched_at)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::data::fetcher::FetchError;
    use crate::domain::PriceObservation;
    use chrono::{TimeZone, Utc};
    use std::cell::Cell;
    use std::rc::Rc;

    /// Clock that only moves when told to.
    #[derive(Clone)]
    pub(crate) struct ManualClock {
        start: AppInstant,
        offset: Rc<Cell<Duration>>,
    }

    impl ManualClock {
        pub(crate) fn new() -> Self {
            Self {
                start: AppInstant::now(),
                offset: Rc::new(Cell::new(Duration::ZERO)),
            }
        }

        pub(crate) fn advance(&self, by: Duration) {
            self.offset.set(self.offset.get() + by);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> AppInstant {
            self.start + self.offset.get()
        }
    }

    /// Fetcher that counts calls and returns a canned result.
    #[derive(Clone)]
    pub(crate) struct CountingFetcher {
        pub(crate) calls: Rc<Cell<usize>>,
        fail: bool,
    }

    impl CountingFetcher {
        pub(crate) fn ok() -> Self {
            Self {
                calls: Rc::new(Cell::new(0)),
                fail: false,
            }
        }

        pub(crate) fn failing() -> Self {
            Self {
                calls: Rc::new(Cell::new(0)),
                fail: true,
            }
        }
    }

    impl PriceFetcher for CountingFetcher {
        fn fetch(&self, _symbol: &Symbol) -> Result<PriceSeries, FetchError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                return Err(FetchError::Transport("timed out".to_string()));
            }
            let n = self.calls.get() as f64;
            Ok(PriceSeries::new(vec![PriceObservation::new(
                Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
                100.0 + n,
            )]))
        }

        fn signature(&self) -> &'static str {
            "counting"
        }
    }

    const TTL: Duration = Duration::from_secs(60);

    #[test]
    fn second_call_within_ttl_does_not_fetch() {
        let fetcher = CountingFetcher::ok();
        let clock = ManualClock::new();
        let mut cache = RefreshCache::new(fetcher.clone(), clock.clone(), TTL);
        let es = Symbol::from("ES=F");

        let (_, first) = cache.lookup(&es);
        clock.advance(Duration::from_secs(30));
        let (_, second) = cache.lookup(&es);

        assert_eq!(first, CacheLookup::Miss);
        assert_eq!(second, CacheLookup::Hit);
        assert_eq!(fetcher.calls.get(), 1);
    }

    #[test]
    fn exactly_ttl_old_is_still_fresh() {
        let fetcher = CountingFetcher::ok();
        let clock = ManualClock::new();
        let mut cache = RefreshCache::new(fetcher.clone(), clock.clone(), TTL);
        let es = Symbol::from("ES=F");

        cache.get(&es).unwrap();
        clock.advance(TTL);
        cache.get(&es).unwrap();

        assert_eq!(fetcher.calls.get(), 1);
    }

    #[test]
    fn expired_entry_is_refetched_once_and_restamped() {
        let fetcher = CountingFetcher::ok();
        let clock = ManualClock::new();
        let mut cache = RefreshCache::new(fetcher.clone(), clock.clone(), TTL);
        let es = Symbol::from("ES=F");

        let first = cache.get(&es).unwrap();
        let stamped = cache.fetched_at(&es).unwrap();

        clock.advance(TTL + Duration::from_secs(1));
        let second = cache.get(&es).unwrap();
        let third = cache.get(&es).unwrap();

        assert_eq!(fetcher.calls.get(), 2);
        assert!(cache.fetched_at(&es).unwrap() > stamped);
        assert_ne!(first.latest(), second.latest());
        assert_eq!(second, third);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn symbols_are_cached_independently() {
        let fetcher = CountingFetcher::ok();
        let mut cache = RefreshCache::new(fetcher.clone(), ManualClock::new(), TTL);

        cache.get(&Symbol::from("ES=F")).unwrap();
        cache.get(&Symbol::from("NQ=F")).unwrap();
        cache.get(&Symbol::from("ES=F")).unwrap();

        assert_eq!(fetcher.calls.get(), 2);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn upstream_error_collapses_to_empty_series() {
        let fetcher = CountingFetcher::failing();
        let mut cache = RefreshCache::new(fetcher.clone(), ManualClock::new(), TTL);

        let series = cache.series(&Symbol::from("ES=F"));

        assert!(series.is_empty());
    }

    #[test]
    fn errors_are_cached_for_the_window_too() {
        let fetcher = CountingFetcher::failing();
        let clock = ManualClock::new();
        let mut cache = RefreshCache::new(fetcher.clone(), clock.clone(), TTL);
        let es = Symbol::from("ES=F");

        assert!(cache.get(&es).is_err());
        assert!(cache.get(&es).is_err());
        assert_eq!(fetcher.calls.get(), 1);

        clock.advance(TTL * 2);
        assert!(cache.get(&es).is_err());
        assert_eq!(fetcher.calls.get(), 2);
    }

    /// Fetcher whose request takes `delay` on the shared clock.
    struct SlowFetcher {
        clock: ManualClock,
        delay: Duration,
        calls: Rc<Cell<usize>>,
    }

    impl PriceFetcher for SlowFetcher {
        fn fetch(&self, _symbol: &Symbol) -> Result<PriceSeries, FetchError> {
            self.calls.set(self.calls.get() + 1);
            self.clock.advance(self.delay);
            Ok(PriceSeries::empty())
        }

        fn signature(&self) -> &'static str {
            "slow"
        }
    }

    #[test]
    fn entry_is_stamped_when_the_call_started() {
        let clock = ManualClock::new();
        let calls = Rc::new(Cell::new(0));
        let fetcher = SlowFetcher {
            clock: clock.clone(),
            delay: Duration::from_secs(10),
            calls: calls.clone(),
        };
        let mut cache = RefreshCache::new(fetcher, clock.clone(), TTL);
        let es = Symbol::from("ES=F");

        let started = clock.now();
        let _ = cache.get(&es);
        assert_eq!(cache.fetched_at(&es), Some(started));

        // 61s after the call began, 51s after the slow response arrived
        clock.advance(Duration::from_secs(51));
        let _ = cache.get(&es);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn peek_never_fetches() {
        let fetcher = CountingFetcher::ok();
        let mut cache = RefreshCache::new(fetcher.clone(), ManualClock::new(), TTL);
        let es = Symbol::from("ES=F");

        assert!(cache.peek(&es).is_none());
        cache.get(&es).unwrap();
        assert!(cache.peek(&es).is_some());
        assert_eq!(fetcher.calls.get(), 1);
    }
}
