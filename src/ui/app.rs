use eframe::{Frame, egui};
use poll_promise::Promise;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

use crate::Cli;
use crate::config::REFRESH;
use crate::data::{FetchOutcome, PriceFetcher, RefreshCache, RefreshReport, RefreshTimer};
use crate::domain::{Category, Symbol};
use crate::ui::app_refresh::RefreshResult;
use crate::ui::utils::setup_custom_visuals;
use crate::utils::SystemClock;
use crate::utils::app_time::now;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// The cache as the running app owns it: any sendable fetcher, wall clock.
pub type LiveCache = RefreshCache<Box<dyn PriceFetcher + Send>, SystemClock>;

/// Timer and cache knobs, from config constants or the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshSettings {
    pub tick_interval: Duration,
    pub ttl: Duration,
    /// Pull every tracked symbol on each pass, not just the visible category
    pub prefetch_all: bool,
}

impl Default for RefreshSettings {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(REFRESH.tick_interval_ms),
            ttl: Duration::from_secs(REFRESH.cache_ttl_secs),
            prefetch_all: false,
        }
    }
}

impl RefreshSettings {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            tick_interval: Duration::from_secs(cli.refresh_secs),
            ttl: Duration::from_secs(cli.ttl_secs),
            prefetch_all: cli.prefetch_all,
        }
    }
}

#[derive(Deserialize, Serialize)]
pub struct FuturesDashApp {
    // UI state
    #[serde(default)]
    pub(super) selected_category: Category,

    // Runtime-only state
    #[serde(skip)]
    pub(super) settings: RefreshSettings,
    // None while a refresh pass has it
    #[serde(skip)]
    pub(super) cache: Option<LiveCache>,
    #[serde(skip)]
    pub(super) refresh_promise: Option<Promise<RefreshResult>>,
    #[serde(skip)]
    pub(super) timer: RefreshTimer,
    // Set by category changes; consumed when the next pass starts
    #[serde(skip)]
    pub(super) pass_requested: bool,
    // Latest known outcome per symbol, what the panels draw from
    #[serde(skip)]
    pub(super) outcomes: HashMap<Symbol, FetchOutcome>,
    #[serde(skip)]
    pub(super) last_report: Option<RefreshReport>,
    #[serde(skip)]
    pub(super) provider_name: String,
}

impl FuturesDashApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        fetcher: Box<dyn PriceFetcher + Send>,
        settings: RefreshSettings,
        initial_category: Option<Category>,
    ) -> Self {
        let mut app: FuturesDashApp;

        // Attempt to load the persisted state
        if let Some(storage) = cc.storage {
            if let Some(value) = eframe::get_value(storage, eframe::APP_KEY) {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("Successfully loaded persisted state");
                }
                app = value;
            } else {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("No persisted dashboard state. Creating anew.");
                }
                app = FuturesDashApp::new_with_initial_state();
            }
        } else {
            app = FuturesDashApp::new_with_initial_state();
        }

        if let Some(category) = initial_category {
            app.selected_category = category;
        }

        app.attach_fetcher(fetcher, settings);
        app
    }

    pub fn new_with_initial_state() -> Self {
        Self {
            selected_category: Category::default(),
            settings: RefreshSettings::default(),
            cache: None,
            refresh_promise: None,
            timer: RefreshTimer::default(),
            pass_requested: false,
            outcomes: HashMap::new(),
            last_report: None,
            provider_name: String::new(),
        }
    }

    /// Installs the fetcher and settings; the first frame then starts a pass.
    pub(super) fn attach_fetcher(
        &mut self,
        fetcher: Box<dyn PriceFetcher + Send>,
        settings: RefreshSettings,
    ) {
        self.provider_name = fetcher.signature().to_string();
        self.settings = settings;
        self.cache = Some(RefreshCache::new(fetcher, SystemClock, settings.ttl));
        self.timer = RefreshTimer::new(settings.tick_interval);
        self.pass_requested = true;
    }

    pub(super) fn handle_category_selection(&mut self, category: Category) {
        if category == self.selected_category {
            return;
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Category changed: {} -> {}", self.selected_category, category);
        }

        self.selected_category = category;
        self.pass_requested = true;
    }
}

impl eframe::App for FuturesDashApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // An in-flight pass finishes on its own thread; just stop waiting for it
        self.refresh_promise = None;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        self.poll_refresh(ctx);
        self.maybe_start_refresh();

        self.render_side_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);

        // Wake up for the next tick even when nobody touches the window
        ctx.request_repaint_after(self.timer.remaining(now()));
    }
}
