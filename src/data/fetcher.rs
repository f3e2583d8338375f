use std::fmt;
use std::sync::Arc;

use crate::domain::{PriceSeries, Symbol};

/// Why a fetch produced no series.
/// The dashboard shows every variant the same way ("Data not available");
/// the variants only exist so the log and the annotation can say what happened.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Connection, DNS, TLS or timeout failure
    Transport(String),
    /// Non-success HTTP status
    Status(u16),
    /// Body was not the JSON shape we expect
    Parse(String),
    /// Provider answered with its own error object (unknown symbol, etc.)
    Provider(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "Transport error: {}", msg),
            FetchError::Status(code) => write!(f, "Provider returned HTTP {}", code),
            FetchError::Parse(msg) => write!(f, "Unreadable response: {}", msg),
            FetchError::Provider(msg) => write!(f, "Provider error: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

/// What the cache hands back for a symbol. An `Ok` may still be empty.
pub type FetchOutcome = Result<Arc<PriceSeries>, FetchError>;

/// Source of one trading day of minute closes for a symbol.
pub trait PriceFetcher {
    fn fetch(&self, symbol: &Symbol) -> Result<PriceSeries, FetchError>;

    /// A unique identifier for this implementation (shown in the status bar).
    fn signature(&self) -> &'static str;
}

impl<F: PriceFetcher + ?Sized> PriceFetcher for Box<F> {
    fn fetch(&self, symbol: &Symbol) -> Result<PriceSeries, FetchError> {
        (**self).fetch(symbol)
    }

    fn signature(&self) -> &'static str {
        (**self).signature()
    }
}

/// The collapsed contract: any failure becomes an empty series.
/// Logs which branch was taken; callers cannot tell them apart.
pub fn fetch_or_empty<F: PriceFetcher + ?Sized>(fetcher: &F, symbol: &Symbol) -> PriceSeries {
    let outcome = fetcher.fetch(symbol);
    log_outcome(symbol, outcome.as_ref());
    outcome.unwrap_or_default()
}

pub(crate) fn log_outcome(symbol: &Symbol, outcome: Result<&PriceSeries, &FetchError>) {
    match outcome {
        Ok(series) if series.is_empty() => {
            log::warn!("No data returned for {}", symbol);
        }
        Ok(_) => {}
        Err(e) => {
            log::error!("Error fetching data for {}: {}", symbol, e);
        }
    }
}
