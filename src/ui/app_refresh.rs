use eframe::egui;
use poll_promise::Promise;
use std::collections::HashMap;
use std::time::Duration;

use crate::data::{FetchOutcome, PriceFetcher, RefreshCache, RefreshReport, run_refresh_pass};
use crate::domain::Symbol;
use crate::domain::category::all_symbols;
use crate::ui::app::{FuturesDashApp, LiveCache};
use crate::utils::Clock;
use crate::utils::app_time::now;

/// A finished pass hands the cache back together with what it saw.
pub(super) struct RefreshResult {
    pub(super) cache: LiveCache,
    pub(super) report: RefreshReport,
}

impl FuturesDashApp {
    /// Starts a pass when the timer fires or a category change asked for one.
    /// The cache moves into the worker thread, so at most one pass can run.
    pub(super) fn maybe_start_refresh(&mut self) {
        if self.refresh_promise.is_some() {
            return;
        }

        let now = now();
        let timer_due = self.timer.is_due(now);
        if !timer_due && !self.pass_requested {
            return;
        }

        let Some(mut cache) = self.cache.take() else {
            return;
        };

        if timer_due {
            self.timer.mark_tick(now);
        }
        self.pass_requested = false;

        let category = self.selected_category;
        let symbols = self.pass_symbols();

        let promise = Promise::spawn_thread("refresh_pass", move || {
            let report = run_refresh_pass(&mut cache, category, &symbols);
            RefreshResult { cache, report }
        });

        self.refresh_promise = Some(promise);
    }

    pub(super) fn poll_refresh(&mut self, ctx: &egui::Context) {
        let Some(promise) = self.refresh_promise.take() else {
            return;
        };

        match promise.try_take() {
            Ok(RefreshResult { cache, report }) => {
                self.outcomes = snapshot_outcomes(&cache, &all_symbols());
                self.cache = Some(cache);
                self.last_report = Some(report);
                ctx.request_repaint();
            }
            Err(promise) => {
                self.refresh_promise = Some(promise);
                ctx.request_repaint_after(Duration::from_millis(100));
            }
        }
    }

    pub(super) fn is_refreshing(&self) -> bool {
        self.refresh_promise.is_some()
    }

    /// Visible category first; everything else too when prefetching.
    pub(super) fn pass_symbols(&self) -> Vec<Symbol> {
        let mut symbols = self.selected_category.descriptor().symbols();
        if self.settings.prefetch_all {
            for symbol in all_symbols() {
                if !symbols.contains(&symbol) {
                    symbols.push(symbol);
                }
            }
        }
        symbols
    }
}

/// Copies out whatever the cache currently holds for these symbols, stale or not.
pub(super) fn snapshot_outcomes<F: PriceFetcher, C: Clock>(
    cache: &RefreshCache<F, C>,
    symbols: &[Symbol],
) -> HashMap<Symbol, FetchOutcome> {
    symbols
        .iter()
        .filter_map(|s| cache.peek(s).map(|outcome| (s.clone(), outcome.clone())))
        .collect()
}
