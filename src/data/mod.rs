// Data fetching, caching and the refresh pass
pub mod cache;
pub mod fetcher;
pub mod refresh;
pub mod yahoo;

// Re-export commonly used types
pub use cache::{CacheLookup, RefreshCache};
pub use fetcher::{FetchError, FetchOutcome, PriceFetcher, fetch_or_empty};
pub use refresh::{RefreshReport, RefreshTimer, run_refresh_pass};
pub use yahoo::YahooFetcher;
